use serde::{Deserialize, Serialize};

/// A registered fan, keyed by nothing more than what they typed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanRecord {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementKind {
    Voting,
    Quiz,
    Prize,
}

impl EngagementKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Voting, Self::Quiz, Self::Prize]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Voting => "Voting",
            Self::Quiz => "Quiz",
            Self::Prize => "Prize",
        }
    }
}

/// One participation entry in an engagement event. `details` carries the
/// event-specific payload (vote target, quiz score summary, prize note).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementRecord {
    pub kind: EngagementKind,
    pub participant: String,
    pub details: String,
}
