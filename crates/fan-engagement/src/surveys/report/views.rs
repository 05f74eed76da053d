use super::super::sentiment::Sentiment;
use super::summary::SentimentTally;
use serde::Serialize;

/// Serializable projection of a tally for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyReportView {
    pub total_surveys: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SurveyReportView {
    pub fn from_tally(tally: &SentimentTally) -> Self {
        Self {
            total_surveys: tally.total,
            positive: tally.positive,
            negative: tally.negative,
            neutral: tally.neutral,
        }
    }
}

const RULE: &str = "----------------------------";

/// Render the fixed-format text report. Deterministic for a given tally; the
/// caller owns persisting or displaying the block.
pub fn render_text(tally: &SentimentTally) -> String {
    let mut report = String::new();
    report.push_str("Fan Engagement Report\n");
    report.push_str(RULE);
    report.push('\n');
    report.push_str(&format!("Total Surveys Submitted: {}\n", tally.total));
    for sentiment in Sentiment::ordered() {
        report.push_str(&format!(
            "{} Feedback: {}\n",
            sentiment.label(),
            tally.count(sentiment)
        ));
    }
    report.push_str(RULE);
    report.push('\n');
    report
}
