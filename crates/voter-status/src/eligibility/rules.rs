use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Raised when a rule set leaves an age uncovered or overlaps categories.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("minimum voting age {min} must not exceed majority age {majority}")]
    MinimumAboveMajority { min: i32, majority: i32 },
    #[error("mandatory voting upper bound {upper} is below majority age {majority}")]
    EmptyMandatoryBand { upper: i32, majority: i32 },
    #[error("optional voting must resume at {expected}, configured {found}")]
    GapAfterMandatoryBand { expected: i32, found: i32 },
    #[error("maximum plausible age must be positive, found {0}")]
    NonPositivePlausibleAge(i32),
}

/// Thresholds and reference date driving age and eligibility decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRules {
    pub min_voting_age: i32,
    pub majority_age: i32,
    pub mandatory_voting_upper_bound: i32,
    pub optional_voting_lower_bound: i32,
    pub max_plausible_age_years: i32,
    pub reference_election_date: NaiveDate,
}

impl EligibilityRules {
    /// Rule set for the October 2026 general election.
    pub fn standard() -> Self {
        Self {
            min_voting_age: 16,
            majority_age: 18,
            mandatory_voting_upper_bound: 69,
            optional_voting_lower_bound: 70,
            max_plausible_age_years: 150,
            reference_election_date: NaiveDate::from_ymd_opt(2026, 10, 1)
                .expect("2026-10-01 is a calendar date"),
        }
    }

    pub fn with_election_date(mut self, date: NaiveDate) -> Self {
        self.reference_election_date = date;
        self
    }

    pub fn election_year(&self) -> i32 {
        self.reference_election_date.year()
    }

    /// Checks that the three categories tile the whole age axis.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.min_voting_age > self.majority_age {
            return Err(RulesError::MinimumAboveMajority {
                min: self.min_voting_age,
                majority: self.majority_age,
            });
        }
        if self.mandatory_voting_upper_bound < self.majority_age {
            return Err(RulesError::EmptyMandatoryBand {
                upper: self.mandatory_voting_upper_bound,
                majority: self.majority_age,
            });
        }
        let expected = self.mandatory_voting_upper_bound + 1;
        if self.optional_voting_lower_bound != expected {
            return Err(RulesError::GapAfterMandatoryBand {
                expected,
                found: self.optional_voting_lower_bound,
            });
        }
        if self.max_plausible_age_years <= 0 {
            return Err(RulesError::NonPositivePlausibleAge(
                self.max_plausible_age_years,
            ));
        }
        Ok(())
    }
}

impl Default for EligibilityRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rules_are_consistent() {
        let rules = EligibilityRules::standard();
        rules.validate().expect("standard rules validate");
        assert_eq!(rules.election_year(), 2026);
    }

    #[test]
    fn rejects_gap_between_mandatory_and_optional_bands() {
        let rules = EligibilityRules {
            optional_voting_lower_bound: 75,
            ..EligibilityRules::standard()
        };

        match rules.validate() {
            Err(RulesError::GapAfterMandatoryBand { expected, found }) => {
                assert_eq!(expected, 70);
                assert_eq!(found, 75);
            }
            other => panic!("expected gap error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_minimum_above_majority() {
        let rules = EligibilityRules {
            min_voting_age: 21,
            ..EligibilityRules::standard()
        };

        assert!(matches!(
            rules.validate(),
            Err(RulesError::MinimumAboveMajority { .. })
        ));
    }
}
