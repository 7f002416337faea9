use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use voter_status::config::AppConfig;
use voter_status::error::AppError;
use voter_status::form::{FormController, InMemoryDocument, Region, SubmissionOutcome};

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Full name as typed into the form
    #[arg(long)]
    pub(crate) name: String,
    /// Birth date as submitted by the date picker (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) birth_date: String,
    /// Treat this date as today (defaults to the local date)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the submission outcome as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        name,
        birth_date,
        today,
        json,
    } = args;

    let config = AppConfig::load()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let controller = FormController::new(config.rules)?;
    let mut document = InMemoryDocument::with_inputs(name, birth_date);
    controller.initialize(&mut document, today);
    let outcome = controller.submit(&mut document, today)?;

    if json {
        println!("{}", to_json(&outcome)?);
        return Ok(());
    }

    for line in describe(&outcome, &document) {
        println!("{line}");
    }
    Ok(())
}

fn to_json(outcome: &SubmissionOutcome) -> Result<String, AppError> {
    serde_json::to_string_pretty(outcome)
        .map_err(std::io::Error::from)
        .map_err(AppError::from)
}

fn describe(outcome: &SubmissionOutcome, document: &InMemoryDocument) -> Vec<String> {
    match outcome {
        SubmissionOutcome::Rejected { .. } => [Region::NameError, Region::DateError]
            .into_iter()
            .filter_map(|region| document.visible_content(region))
            .map(|message| format!("Error: {message}"))
            .collect(),
        SubmissionOutcome::Assessed { result } => {
            let majority = if result.is_adult { "an adult" } else { "a minor" };
            vec![
                format!("Hello, {}!", result.full_name),
                format!(
                    "You are {} years old and {majority}.",
                    result.current_age
                ),
                format!(
                    "{} Voting status for {}: in {} {} you will be {} years old.",
                    result.status.icon(),
                    result.election_year,
                    result.election_month,
                    result.election_year,
                    result.age_at_election
                ),
                result.status.message().to_string(),
            ]
        }
    }
}
