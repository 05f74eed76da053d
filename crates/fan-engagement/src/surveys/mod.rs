pub mod report;
pub mod sentiment;

use serde::{Deserialize, Serialize};

/// A recorded survey submission. Immutable once stored; only `feedback`
/// participates in sentiment classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub name: String,
    pub email: String,
    pub feedback: String,
}
