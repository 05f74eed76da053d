use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const fn ordered() -> [Self; 3] {
        [Self::Positive, Self::Negative, Self::Neutral]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

/// Keyword sets driving the classifier. Bound at construction and never
/// mutated, so a lexicon can be shared across threads and swapped out in
/// tests.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl SentimentLexicon {
    /// Build a lexicon from custom keyword sets. Entries are lowercased so
    /// matching stays case-insensitive regardless of how they were supplied.
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        fn lower<I>(words: I) -> Vec<String>
        where
            I: IntoIterator,
            I::Item: Into<String>,
        {
            words
                .into_iter()
                .map(|word| word.into().to_lowercase())
                .collect()
        }

        Self {
            positive: lower(positive),
            negative: lower(negative),
        }
    }

    /// The stock keyword sets used for fan feedback.
    pub fn standard() -> Self {
        Self::new(
            [
                "great",
                "good",
                "excellent",
                "amazing",
                "love",
                "fantastic",
                "wonderful",
            ],
            [
                "bad", "poor", "terrible", "worst", "awful", "hate", "disappointed",
            ],
        )
    }

    /// Classify a feedback string by keyword substring match on the lowercased
    /// text. The positive check runs strictly before the negative one, so text
    /// containing keywords from both sets classifies `Positive`. Empty text is
    /// `Neutral`.
    pub fn classify(&self, feedback: &str) -> Sentiment {
        let text = feedback.to_lowercase();
        if self.positive.iter().any(|word| text.contains(word.as_str())) {
            Sentiment::Positive
        } else if self.negative.iter().any(|word| text.contains(word.as_str())) {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}
