use super::super::sentiment::Sentiment;
use super::summary::SentimentTally;

/// Extra space above the tallest bar so value annotations stay readable.
pub const CHART_HEADROOM: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarCategory {
    pub label: &'static str,
    pub value: u64,
}

/// Backend-agnostic description of the survey bar chart: four ordered
/// categories, each annotated with its value, on a y axis capped at
/// `max(values) + CHART_HEADROOM`. Drawing it is a presentation concern and
/// lives with the caller.
#[derive(Debug, Clone)]
pub struct BarChartSpec {
    pub title: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub categories: Vec<BarCategory>,
    pub y_max: u64,
}

impl BarChartSpec {
    pub fn from_tally(tally: &SentimentTally) -> Self {
        let mut categories = vec![BarCategory {
            label: "Total Surveys",
            value: tally.total as u64,
        }];
        categories.extend(Sentiment::ordered().into_iter().map(|sentiment| {
            BarCategory {
                label: sentiment.label(),
                value: tally.count(sentiment) as u64,
            }
        }));

        let peak = categories
            .iter()
            .map(|category| category.value)
            .max()
            .unwrap_or(0);

        Self {
            title: "Survey Report Analysis",
            x_desc: "Survey Metrics",
            y_desc: "Count",
            categories,
            y_max: peak + CHART_HEADROOM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_carries_four_ordered_bars() {
        let tally = SentimentTally {
            total: 3,
            positive: 1,
            negative: 1,
            neutral: 1,
        };
        let spec = BarChartSpec::from_tally(&tally);
        let labels: Vec<&str> = spec
            .categories
            .iter()
            .map(|category| category.label)
            .collect();
        let values: Vec<u64> = spec
            .categories
            .iter()
            .map(|category| category.value)
            .collect();
        assert_eq!(labels, vec!["Total Surveys", "Positive", "Negative", "Neutral"]);
        assert_eq!(values, vec![3, 1, 1, 1]);
    }

    #[test]
    fn y_axis_leaves_headroom_above_the_peak() {
        let tally = SentimentTally {
            total: 3,
            positive: 1,
            negative: 1,
            neutral: 1,
        };
        let spec = BarChartSpec::from_tally(&tally);
        assert_eq!(spec.y_max, 8);
        assert!(spec.y_max >= 3 + CHART_HEADROOM);
    }

    #[test]
    fn zero_tally_still_reserves_headroom() {
        let spec = BarChartSpec::from_tally(&SentimentTally::default());
        assert_eq!(spec.y_max, CHART_HEADROOM);
    }
}
