mod chart;
mod summary;
mod views;

pub use chart::{BarCategory, BarChartSpec, CHART_HEADROOM};
pub use summary::{aggregate, aggregate_responses, SentimentTally};
pub use views::{render_text, SurveyReportView};
