use super::document::{Document, FormField, InMemoryDocument, Region};
use super::validation::FieldError;
use crate::eligibility::{EligibilityAssessment, VotingStatus};
use chrono::Datelike;
use serde::Serialize;
use std::time::Duration;
use tera::{Context, Tera};

const RESULT_TEMPLATE_NAME: &str = "result.html";
const RESULT_TEMPLATE: &str = include_str!("templates/result.html");
const PAGE_TEMPLATE_NAME: &str = "page.html";
const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

/// Pause before the result region is scrolled into view.
pub const SCROLL_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, thiserror::Error)]
pub enum PresenterError {
    #[error("failed to compile form templates")]
    Template(#[source] tera::Error),
    #[error("failed to render {template}")]
    Render {
        template: &'static str,
        #[source]
        source: tera::Error,
    },
}

/// Values shown in the result region after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub full_name: String,
    pub current_age: i32,
    pub is_adult: bool,
    pub age_at_election: i32,
    pub election_year: i32,
    pub election_month: String,
    pub status: VotingStatus,
}

impl ResultView {
    pub fn new(full_name: impl Into<String>, assessment: &EligibilityAssessment) -> Self {
        Self {
            full_name: full_name.into(),
            current_age: assessment.current_age,
            is_adult: assessment.is_adult,
            age_at_election: assessment.age_at_election,
            election_year: assessment.election_date.year(),
            election_month: assessment.election_date.format("%B").to_string(),
            status: assessment.status,
        }
    }

    pub const fn majority_class(&self) -> &'static str {
        if self.is_adult {
            "adult"
        } else {
            "minor"
        }
    }
}

#[derive(Serialize)]
struct ResultContext<'a> {
    full_name: &'a str,
    current_age: i32,
    is_adult: bool,
    age_at_election: i32,
    election_year: i32,
    election_month: &'a str,
    status_slug: &'static str,
    status_icon: &'static str,
    status_message: &'static str,
}

impl<'a> From<&'a ResultView> for ResultContext<'a> {
    fn from(view: &'a ResultView) -> Self {
        Self {
            full_name: &view.full_name,
            current_age: view.current_age,
            is_adult: view.is_adult,
            age_at_election: view.age_at_election,
            election_year: view.election_year,
            election_month: &view.election_month,
            status_slug: view.status.slug(),
            status_icon: view.status.icon(),
            status_message: view.status.message(),
        }
    }
}

#[derive(Serialize)]
struct PageContext<'a> {
    full_name: String,
    birth_date: String,
    birth_date_max: &'a str,
    name_error: &'a str,
    date_error: &'a str,
    result_html: &'a str,
    result_classes: String,
    scroll_delay_ms: u64,
}

impl<'a> PageContext<'a> {
    fn from_document(document: &'a InMemoryDocument) -> Self {
        let result_classes = document
            .region(Region::Result)
            .map(|state| state.classes.join(" "))
            .unwrap_or_default();
        let scroll_delay_ms = document
            .pending_scroll()
            .filter(|request| {
                request.region == Region::Result && document.is_visible(Region::Result)
            })
            .map(|request| request.delay_ms)
            .unwrap_or_default();

        Self {
            full_name: document.field_value(FormField::FullName),
            birth_date: document.field_value(FormField::BirthDate),
            birth_date_max: document
                .field(FormField::BirthDate)
                .and_then(|field| field.max.as_deref())
                .unwrap_or_default(),
            name_error: document.visible_content(Region::NameError).unwrap_or_default(),
            date_error: document.visible_content(Region::DateError).unwrap_or_default(),
            result_html: document.visible_content(Region::Result).unwrap_or_default(),
            result_classes,
            scroll_delay_ms,
        }
    }
}

/// Turns pipeline output into document updates.
pub struct Presenter {
    templates: Tera,
}

impl Presenter {
    pub fn new() -> Result<Self, PresenterError> {
        let mut templates = Tera::default();
        templates
            .add_raw_templates(vec![
                (RESULT_TEMPLATE_NAME, RESULT_TEMPLATE),
                (PAGE_TEMPLATE_NAME, PAGE_TEMPLATE),
            ])
            .map_err(PresenterError::Template)?;
        Ok(Self { templates })
    }

    /// HTML fragment for the result region. Names are escaped.
    pub fn render_result(&self, view: &ResultView) -> Result<String, PresenterError> {
        self.render(RESULT_TEMPLATE_NAME, ResultContext::from(view))
    }

    /// Full form page reflecting the document's current state.
    pub fn render_page(&self, document: &InMemoryDocument) -> Result<String, PresenterError> {
        self.render(PAGE_TEMPLATE_NAME, PageContext::from_document(document))
    }

    fn render<T: Serialize>(
        &self,
        template: &'static str,
        context: T,
    ) -> Result<String, PresenterError> {
        let render_error = |source| PresenterError::Render { template, source };
        let context = Context::from_serialize(context).map_err(render_error)?;
        self.templates
            .render(template, &context)
            .map_err(render_error)
    }

    /// Hides every region and drops the result styling left by a previous run.
    pub fn clear<D: Document>(&self, document: &mut D) {
        for region in Region::ordered() {
            document.hide(region);
        }
        document.set_classes(Region::Result, &[]);
    }

    pub fn show_errors<D: Document>(&self, document: &mut D, errors: &[FieldError]) {
        for error in errors {
            document.show_text(error.region(), &error.to_string());
        }
    }

    pub fn show_result<D: Document>(
        &self,
        document: &mut D,
        view: &ResultView,
    ) -> Result<(), PresenterError> {
        let html = self.render_result(view)?;
        document.set_classes(Region::Result, &["result", view.majority_class()]);
        document.show_html(Region::Result, &html);
        document.scroll_into_view(Region::Result, SCROLL_DELAY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::document::{InMemoryDocument, RegionContent};

    fn view(name: &str, is_adult: bool, status: VotingStatus) -> ResultView {
        ResultView {
            full_name: name.to_string(),
            current_age: if is_adult { 40 } else { 15 },
            is_adult,
            age_at_election: if is_adult { 40 } else { 16 },
            election_year: 2026,
            election_month: "October".to_string(),
            status,
        }
    }

    #[test]
    fn result_fragment_carries_greeting_and_panel() {
        let presenter = Presenter::new().expect("templates compile");
        let html = presenter
            .render_result(&view("Ana Souza", true, VotingStatus::MandatoryVoting))
            .expect("renders");

        assert!(html.contains("Hello, Ana Souza!"));
        assert!(html.contains("You are 40 years old and an <strong>adult</strong>."));
        assert!(html.contains("voting-info mandatory-voting"));
        assert!(html.contains("🗳️"));
        assert!(html.contains("In October 2026 you will be 40 years old."));
        assert!(html.contains(VotingStatus::MandatoryVoting.message()));
    }

    #[test]
    fn minors_get_minority_statement() {
        let presenter = Presenter::new().expect("templates compile");
        let html = presenter
            .render_result(&view("Léo", false, VotingStatus::OptionalVoting))
            .expect("renders");

        assert!(html.contains("a <strong>minor</strong>"));
        assert!(html.contains("📋"));
    }

    #[test]
    fn names_are_escaped() {
        let presenter = Presenter::new().expect("templates compile");
        let html = presenter
            .render_result(&view("<script>x</script>", true, VotingStatus::MandatoryVoting))
            .expect("renders");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn show_result_sets_classes_and_schedules_scroll() {
        let presenter = Presenter::new().expect("templates compile");
        let mut document = InMemoryDocument::new();

        presenter
            .show_result(&mut document, &view("Ana", false, VotingStatus::BelowVotingAge))
            .expect("result shown");

        let state = document.region(Region::Result).expect("result region");
        assert!(state.visible);
        assert_eq!(state.classes, vec!["result".to_string(), "minor".to_string()]);
        assert!(matches!(state.content, RegionContent::Html(_)));
        let scroll = document.pending_scroll().expect("scroll scheduled");
        assert_eq!(scroll.region, Region::Result);
        assert_eq!(scroll.delay_ms, 100);
    }

    #[test]
    fn page_reflects_document_state() {
        let presenter = Presenter::new().expect("templates compile");
        let mut document = InMemoryDocument::with_inputs("A", "2026-10-20");
        document.set_field_max(FormField::BirthDate, "2026-10-19");
        presenter.show_errors(&mut document, &[FieldError::InvalidName, FieldError::FutureDate]);

        let page = presenter.render_page(&document).expect("page renders");

        assert!(page.contains(r#"max="2026-10-19""#));
        assert!(page.contains(r#"value="2026-10-20""#));
        assert!(page.contains("Please enter a valid name with at least 2 characters."));
        assert!(page.contains("The birth date cannot be in the future."));
        assert!(page.contains(r#"<div id="result" class="" style="display: none"></div>"#));
        assert!(!page.contains("scrollIntoView"));
    }

    #[test]
    fn page_embeds_rendered_result_unescaped() {
        let presenter = Presenter::new().expect("templates compile");
        let mut document = InMemoryDocument::with_inputs("<b>Ana</b>", "2000-01-01");
        presenter
            .show_result(&mut document, &view("<b>Ana</b>", true, VotingStatus::MandatoryVoting))
            .expect("result shown");

        let page = presenter.render_page(&document).expect("page renders");

        assert!(page.contains(r#"<div id="result" class="result adult">"#));
        assert!(page.contains(r#"<div class="result-card">"#));
        assert!(!page.contains("<b>Ana</b>"));
        assert!(page.contains("scrollIntoView"));
        assert!(page.contains("}, 100);"));
    }

    #[test]
    fn page_after_clear_drops_stale_result_styling_and_scroll() {
        let presenter = Presenter::new().expect("templates compile");
        let mut document = InMemoryDocument::with_inputs("Ana", "2000-01-01");
        presenter
            .show_result(&mut document, &view("Ana", true, VotingStatus::MandatoryVoting))
            .expect("result shown");

        presenter.clear(&mut document);
        presenter.show_errors(&mut document, &[FieldError::InvalidName]);
        let page = presenter.render_page(&document).expect("page renders");

        assert!(document.pending_scroll().is_none());
        assert!(page.contains(r#"<div id="result" class="" style="display: none"></div>"#));
        assert!(!page.contains("scrollIntoView"));
    }

    #[test]
    fn clear_hides_every_region() {
        let presenter = Presenter::new().expect("templates compile");
        let mut document = InMemoryDocument::new();
        presenter.show_errors(&mut document, &[FieldError::InvalidName, FieldError::MissingDate]);
        assert!(document.is_visible(Region::NameError));
        assert!(document.is_visible(Region::DateError));

        presenter.clear(&mut document);
        for region in Region::ordered() {
            assert!(!document.is_visible(region));
        }
    }
}
