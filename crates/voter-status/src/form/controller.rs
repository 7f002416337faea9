use super::document::{Document, FormField};
use super::presenter::{Presenter, PresenterError, ResultView};
use super::validation::{validate, FieldError};
use crate::eligibility::{EligibilityAssessment, EligibilityRules};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// Outcome of one submission, before anything is written to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Rejected { errors: Vec<FieldError> },
    Assessed { result: ResultView },
}

impl SubmissionOutcome {
    pub fn is_assessed(&self) -> bool {
        matches!(self, Self::Assessed { .. })
    }
}

/// Validates the raw inputs and, when they pass, computes the result.
pub fn handle_submit(
    raw_name: &str,
    raw_birth_date: &str,
    today: NaiveDate,
    rules: &EligibilityRules,
) -> SubmissionOutcome {
    match validate(raw_name, raw_birth_date, today, rules) {
        Ok(submission) => {
            let assessment = EligibilityAssessment::evaluate(submission.birth_date, today, rules);
            SubmissionOutcome::Assessed {
                result: ResultView::new(submission.full_name, &assessment),
            }
        }
        Err(errors) => SubmissionOutcome::Rejected { errors },
    }
}

/// Wires a document's form to the validate → compute → present pipeline.
pub struct FormController {
    rules: EligibilityRules,
    presenter: Presenter,
}

impl FormController {
    pub fn new(rules: EligibilityRules) -> Result<Self, PresenterError> {
        Ok(Self {
            rules,
            presenter: Presenter::new()?,
        })
    }

    pub fn rules(&self) -> &EligibilityRules {
        &self.rules
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    /// One-time setup: the date picker may not go past today.
    pub fn initialize<D: Document>(&self, document: &mut D, today: NaiveDate) {
        let max = today.format("%Y-%m-%d").to_string();
        document.set_field_max(FormField::BirthDate, &max);
    }

    /// Runs one submission against the document's current field values.
    pub fn submit<D: Document>(
        &self,
        document: &mut D,
        today: NaiveDate,
    ) -> Result<SubmissionOutcome, PresenterError> {
        let raw_name = document.field_value(FormField::FullName);
        let raw_birth_date = document.field_value(FormField::BirthDate);

        self.presenter.clear(document);
        let outcome = handle_submit(&raw_name, &raw_birth_date, today, &self.rules);

        match &outcome {
            SubmissionOutcome::Rejected { errors } => {
                let codes: Vec<&str> = errors.iter().map(|error| error.code()).collect();
                debug!(?codes, "submission rejected");
                self.presenter.show_errors(document, errors);
            }
            SubmissionOutcome::Assessed { result } => {
                debug!(
                    status = result.status.slug(),
                    age_at_election = result.age_at_election,
                    "submission assessed"
                );
                self.presenter.show_result(document, result)?;
            }
        }

        Ok(outcome)
    }
}
