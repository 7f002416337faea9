use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use voter_status::form::FormController;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Option<Arc<PrometheusHandle>>,
    pub(crate) controller: Arc<FormController>,
}

impl AppState {
    pub(crate) fn new(controller: FormController) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: None,
            controller: Arc::new(controller),
        }
    }

    pub(crate) fn with_metrics(mut self, metrics: PrometheusHandle) -> Self {
        self.metrics = Some(Arc::new(metrics));
        self
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
