mod controller;
mod document;
mod presenter;
mod validation;

pub use controller::{handle_submit, FormController, SubmissionOutcome};
pub use document::{
    Document, FieldState, FormField, InMemoryDocument, Region, RegionContent, RegionState,
    ScrollRequest,
};
pub use presenter::{Presenter, PresenterError, ResultView, SCROLL_DELAY};
pub use validation::{validate, FieldError, ValidatedSubmission};
