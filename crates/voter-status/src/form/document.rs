use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Input controls the form reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FullName,
    BirthDate,
}

impl FormField {
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::FullName => "full-name",
            Self::BirthDate => "birth-date",
        }
    }
}

/// Output areas the presenter writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NameError,
    DateError,
    Result,
}

impl Region {
    pub const fn ordered() -> [Self; 3] {
        [Self::NameError, Self::DateError, Self::Result]
    }

    pub const fn element_id(self) -> &'static str {
        match self {
            Self::NameError => "name-error",
            Self::DateError => "date-error",
            Self::Result => "result",
        }
    }
}

/// Minimal view of the page the form lives on.
///
/// Implementations own the actual elements; the controller and presenter only
/// ever touch them through these calls.
pub trait Document {
    fn field_value(&self, field: FormField) -> String;
    fn set_field_max(&mut self, field: FormField, value: &str);
    fn show_text(&mut self, region: Region, text: &str);
    fn show_html(&mut self, region: Region, html: &str);
    fn hide(&mut self, region: Region);
    fn set_classes(&mut self, region: Region, classes: &[&str]);
    fn scroll_into_view(&mut self, region: Region, delay: Duration);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub value: String,
    pub max: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum RegionContent {
    Empty,
    Text(String),
    Html(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionState {
    pub content: RegionContent,
    pub visible: bool,
    pub classes: Vec<String>,
}

impl Default for RegionState {
    fn default() -> Self {
        Self {
            content: RegionContent::Empty,
            visible: false,
            classes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollRequest {
    pub region: Region,
    pub delay_ms: u64,
}

/// [`Document`] backed by plain maps, used by the CLI, the HTTP host and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InMemoryDocument {
    fields: BTreeMap<FormField, FieldState>,
    regions: BTreeMap<Region, RegionState>,
    pending_scroll: Option<ScrollRequest>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(full_name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        let mut document = Self::new();
        document.set_field_value(FormField::FullName, full_name);
        document.set_field_value(FormField::BirthDate, birth_date);
        document
    }

    pub fn set_field_value(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.entry(field).or_default().value = value.into();
    }

    pub fn field(&self, field: FormField) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    pub fn region(&self, region: Region) -> Option<&RegionState> {
        self.regions.get(&region)
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.region(region).is_some_and(|state| state.visible)
    }

    /// Text or markup of a region, but only while it is displayed.
    pub fn visible_content(&self, region: Region) -> Option<&str> {
        let state = self.region(region).filter(|state| state.visible)?;
        match &state.content {
            RegionContent::Empty => None,
            RegionContent::Text(body) | RegionContent::Html(body) => Some(body),
        }
    }

    /// The scroll still due, if any. Hiding its region cancels it.
    pub fn pending_scroll(&self) -> Option<&ScrollRequest> {
        self.pending_scroll.as_ref()
    }

    fn region_mut(&mut self, region: Region) -> &mut RegionState {
        self.regions.entry(region).or_default()
    }
}

impl Document for InMemoryDocument {
    fn field_value(&self, field: FormField) -> String {
        self.fields
            .get(&field)
            .map(|state| state.value.clone())
            .unwrap_or_default()
    }

    fn set_field_max(&mut self, field: FormField, value: &str) {
        self.fields.entry(field).or_default().max = Some(value.to_string());
    }

    fn show_text(&mut self, region: Region, text: &str) {
        let state = self.region_mut(region);
        state.content = RegionContent::Text(text.to_string());
        state.visible = true;
    }

    fn show_html(&mut self, region: Region, html: &str) {
        let state = self.region_mut(region);
        state.content = RegionContent::Html(html.to_string());
        state.visible = true;
    }

    fn hide(&mut self, region: Region) {
        self.region_mut(region).visible = false;
        if self
            .pending_scroll
            .is_some_and(|request| request.region == region)
        {
            self.pending_scroll = None;
        }
    }

    fn set_classes(&mut self, region: Region, classes: &[&str]) {
        self.region_mut(region).classes = classes.iter().map(|class| class.to_string()).collect();
    }

    fn scroll_into_view(&mut self, region: Region, delay: Duration) {
        self.pending_scroll = Some(ScrollRequest {
            region,
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
        });
    }
}
