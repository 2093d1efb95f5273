use serde::{Deserialize, Serialize};

/// A true/false question. `prompt` is a string key resolved through
/// [`Strings`](crate::data::Strings) at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub correct_answer: bool,
}

impl Question {
    pub fn new(prompt: impl Into<String>, correct_answer: bool) -> Self {
        Self {
            prompt: prompt.into(),
            correct_answer,
        }
    }
}

/// Outcome of checking a guess against the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    /// String key of the toast shown for this verdict.
    pub fn message_key(self) -> &'static str {
        match self {
            Verdict::Correct => "correct_toast",
            Verdict::Incorrect => "incorrect_toast",
        }
    }

    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }
}

impl From<bool> for Verdict {
    fn from(correct: bool) -> Self {
        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_from_bool() {
        assert_eq!(Verdict::from(true), Verdict::Correct);
        assert_eq!(Verdict::from(false), Verdict::Incorrect);
        assert_eq!(Verdict::Correct.message_key(), "correct_toast");
        assert_eq!(Verdict::Incorrect.message_key(), "incorrect_toast");
    }

    #[test]
    fn test_question_deserialization() {
        let question: Question =
            serde_json::from_str(r#"{"prompt":"question_asia","correct_answer":true}"#).unwrap();
        assert_eq!(question, Question::new("question_asia", true));
    }
}
