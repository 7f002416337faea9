use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Extension, Form, Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use std::sync::atomic::Ordering;
use voter_status::error::AppError;
use voter_status::form::{handle_submit, InMemoryDocument, SubmissionOutcome};

/// Urlencoded body posted by the form page.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FormSubmission {
    #[serde(default)]
    pub(crate) full_name: String,
    #[serde(default)]
    pub(crate) birth_date: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EligibilityRequest {
    #[serde(default)]
    pub(crate) full_name: String,
    #[serde(default)]
    pub(crate) birth_date: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form_page).post(submit_form))
        .route("/api/v1/eligibility", post(eligibility_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(state))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) async fn form_page(
    Extension(state): Extension<AppState>,
) -> Result<Html<String>, AppError> {
    let mut document = InMemoryDocument::new();
    state.controller.initialize(&mut document, today());
    let page = state.controller.presenter().render_page(&document)?;
    Ok(Html(page))
}

pub(crate) async fn submit_form(
    Extension(state): Extension<AppState>,
    Form(submission): Form<FormSubmission>,
) -> Result<Html<String>, AppError> {
    let today = today();
    let mut document = InMemoryDocument::with_inputs(submission.full_name, submission.birth_date);
    state.controller.initialize(&mut document, today);
    state.controller.submit(&mut document, today)?;
    let page = state.controller.presenter().render_page(&document)?;
    Ok(Html(page))
}

pub(crate) async fn eligibility_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<EligibilityRequest>,
) -> Json<SubmissionOutcome> {
    let today = payload.today.unwrap_or_else(today);
    Json(handle_submit(
        &payload.full_name,
        &payload.birth_date,
        today,
        state.controller.rules(),
    ))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    match state.metrics {
        Some(metrics) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            metrics.render(),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            String::new(),
        ),
    }
}
