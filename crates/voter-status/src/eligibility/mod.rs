mod age;
mod classifier;
mod rules;

pub use age::age_on;
pub use classifier::{classify, VotingStatus};
pub use rules::{EligibilityRules, RulesError};

use chrono::NaiveDate;
use serde::Serialize;

/// Everything derived from a validated birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityAssessment {
    pub current_age: i32,
    pub is_adult: bool,
    pub age_at_election: i32,
    pub election_date: NaiveDate,
    pub status: VotingStatus,
}

impl EligibilityAssessment {
    pub fn evaluate(birth: NaiveDate, today: NaiveDate, rules: &EligibilityRules) -> Self {
        let current_age = age_on(birth, today);
        let age_at_election = age_on(birth, rules.reference_election_date);

        Self {
            current_age,
            is_adult: current_age >= rules.majority_age,
            age_at_election,
            election_date: rules.reference_election_date,
            status: classify(age_at_election, rules),
        }
    }
}
