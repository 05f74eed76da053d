/// A single multiple-choice question. `answer` is the zero-based index into
/// `options`.
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    answer: usize,
}

impl QuizQuestion {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer
    }
}

/// The fixed question bank used for quiz engagement events.
#[derive(Debug, Clone)]
pub struct QuizBank {
    questions: Vec<QuizQuestion>,
}

impl QuizBank {
    pub fn standard() -> Self {
        Self {
            questions: vec![
                QuizQuestion {
                    prompt: "Who has scored the most runs in international cricket?",
                    options: [
                        "Sachin Tendulkar",
                        "Virat Kohli",
                        "Ricky Ponting",
                        "Jacques Kallis",
                    ],
                    answer: 0,
                },
                QuizQuestion {
                    prompt: "Which country won the first-ever Cricket World Cup in 1975?",
                    options: ["Australia", "West Indies", "England", "India"],
                    answer: 1,
                },
                QuizQuestion {
                    prompt: "Who holds the record for the fastest century in ODI cricket?",
                    options: [
                        "AB de Villiers",
                        "Chris Gayle",
                        "Shahid Afridi",
                        "Virender Sehwag",
                    ],
                    answer: 0,
                },
                QuizQuestion {
                    prompt: "Which bowler has taken the most wickets in Test cricket?",
                    options: [
                        "Muttiah Muralitharan",
                        "Shane Warne",
                        "James Anderson",
                        "Anil Kumble",
                    ],
                    answer: 0,
                },
                QuizQuestion {
                    prompt: "Which Indian cricketer is known as 'Captain Cool'?",
                    options: ["MS Dhoni", "Sourav Ganguly", "Rahul Dravid", "Virat Kohli"],
                    answer: 0,
                },
            ],
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Details string stored with the engagement record, e.g. `Quiz Score: 4/5`.
    pub fn score_summary(&self, score: usize) -> String {
        format!("Quiz Score: {}/{}", score, self.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bank_has_five_questions() {
        let bank = QuizBank::standard();
        assert_eq!(bank.len(), 5);
        assert!(!bank.is_empty());
    }

    #[test]
    fn answers_check_against_option_index() {
        let bank = QuizBank::standard();
        let first = &bank.questions()[0];
        assert!(first.is_correct(0));
        assert!(!first.is_correct(1));
    }

    #[test]
    fn score_summary_names_the_bank_size() {
        let bank = QuizBank::standard();
        assert_eq!(bank.score_summary(4), "Quiz Score: 4/5");
    }
}
