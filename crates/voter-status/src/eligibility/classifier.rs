use super::rules::EligibilityRules;
use serde::{Deserialize, Serialize};

/// Voting obligation for the reference election.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VotingStatus {
    BelowVotingAge,
    OptionalVoting,
    MandatoryVoting,
}

impl VotingStatus {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::BelowVotingAge,
            Self::OptionalVoting,
            Self::MandatoryVoting,
        ]
    }

    /// CSS-friendly identifier, also used as the serialized form.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::BelowVotingAge => "below-voting-age",
            Self::OptionalVoting => "optional-voting",
            Self::MandatoryVoting => "mandatory-voting",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::BelowVotingAge => "You are not yet old enough to vote in the next election",
            Self::OptionalVoting => "Your vote is optional in the next election",
            Self::MandatoryVoting => "Your vote is mandatory in the next election",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::BelowVotingAge => "⏳",
            Self::OptionalVoting => "📋",
            Self::MandatoryVoting => "🗳️",
        }
    }
}

/// Maps an age at the election date onto a [`VotingStatus`].
pub fn classify(age_at_election: i32, rules: &EligibilityRules) -> VotingStatus {
    if age_at_election < rules.min_voting_age {
        VotingStatus::BelowVotingAge
    } else if (rules.majority_age..=rules.mandatory_voting_upper_bound).contains(&age_at_election)
    {
        VotingStatus::MandatoryVoting
    } else {
        VotingStatus::OptionalVoting
    }
}
