//! Age and voting-obligation checks behind a single name + birth-date form.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod form;
pub mod telemetry;
