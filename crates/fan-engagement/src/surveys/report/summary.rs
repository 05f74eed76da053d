use super::super::sentiment::{Sentiment, SentimentLexicon};
use super::super::SurveyResponse;

/// Zero-based index of the feedback column in a stored survey row.
const FEEDBACK_FIELD: usize = 2;

/// Aggregate sentiment counts for one reporting run. `total` counts only the
/// rows that were actually classified, so
/// `positive + negative + neutral == total` always holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SentimentTally {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentTally {
    /// True when there was nothing to classify. Callers decide whether this
    /// means "render zeros" or "skip the report".
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    fn record(&mut self, sentiment: Sentiment) {
        self.total += 1;
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

/// Tally sentiment over raw stored rows. Rows with fewer than three fields
/// are skipped and excluded from `total`; the header row must already have
/// been stripped by the loader.
pub fn aggregate(lexicon: &SentimentLexicon, rows: &[Vec<String>]) -> SentimentTally {
    let mut tally = SentimentTally::default();
    for row in rows {
        let Some(feedback) = row.get(FEEDBACK_FIELD) else {
            continue;
        };
        tally.record(lexicon.classify(feedback));
    }
    tally
}

/// Tally sentiment over already-typed responses.
pub fn aggregate_responses(
    lexicon: &SentimentLexicon,
    responses: &[SurveyResponse],
) -> SentimentTally {
    let mut tally = SentimentTally::default();
    for response in responses {
        tally.record(lexicon.classify(&response.feedback));
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|field| field.to_string()).collect()
    }

    #[test]
    fn empty_input_yields_zero_tally() {
        let lexicon = SentimentLexicon::standard();
        let tally = aggregate(&lexicon, &[]);
        assert_eq!(tally, SentimentTally::default());
        assert!(tally.is_empty());
    }

    #[test]
    fn short_rows_are_skipped_without_counting() {
        let lexicon = SentimentLexicon::standard();
        let rows = vec![row(&["a", "b"]), row(&["x", "y", "great event"])];
        let tally = aggregate(&lexicon, &rows);
        assert_eq!(tally.total, 1);
        assert_eq!(tally.positive, 1);
        assert_eq!(tally.negative, 0);
        assert_eq!(tally.neutral, 0);
    }

    #[test]
    fn all_short_rows_still_yield_zero_tally() {
        let lexicon = SentimentLexicon::standard();
        let rows = vec![row(&[]), row(&["only-name"]), row(&["name", "email"])];
        assert!(aggregate(&lexicon, &rows).is_empty());
    }

    #[test]
    fn mixed_feedback_counts_each_category_once() {
        let lexicon = SentimentLexicon::standard();
        let rows = vec![
            row(&["Alice", "a@x.com", "This was a great and amazing day"]),
            row(&["Bob", "b@x.com", "Terrible, worst experience"]),
            row(&["Cara", "c@x.com", "It was okay I guess"]),
        ];
        let tally = aggregate(&lexicon, &rows);
        assert_eq!(tally.total, 3);
        assert_eq!(tally.positive, 1);
        assert_eq!(tally.negative, 1);
        assert_eq!(tally.neutral, 1);
        assert_eq!(tally.positive + tally.negative + tally.neutral, tally.total);
    }

    #[test]
    fn count_indexes_the_tally_by_sentiment() {
        let tally = SentimentTally {
            total: 6,
            positive: 3,
            negative: 2,
            neutral: 1,
        };
        assert_eq!(tally.count(Sentiment::Positive), 3);
        assert_eq!(tally.count(Sentiment::Negative), 2);
        assert_eq!(tally.count(Sentiment::Neutral), 1);
        let summed: usize = Sentiment::ordered()
            .into_iter()
            .map(|sentiment| tally.count(sentiment))
            .sum();
        assert_eq!(summed, tally.total);
    }

    #[test]
    fn typed_responses_aggregate_like_raw_rows() {
        let lexicon = SentimentLexicon::standard();
        let responses = vec![
            SurveyResponse {
                name: "Dee".to_string(),
                email: "d@x.com".to_string(),
                feedback: "I love the halftime show".to_string(),
            },
            SurveyResponse {
                name: "Eli".to_string(),
                email: "e@x.com".to_string(),
                feedback: "poor seating".to_string(),
            },
        ];
        let tally = aggregate_responses(&lexicon, &responses);
        assert_eq!(tally.total, 2);
        assert_eq!(tally.positive, 1);
        assert_eq!(tally.negative, 1);
    }
}
