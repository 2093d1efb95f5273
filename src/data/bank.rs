use crate::data::Strings;
use crate::models::Question;

/// Questions plus the string table their prompts resolve against.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
    pub strings: Strings,
}

/// The built-in geography questions, in display order.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new("question_oceans", true),
        Question::new("question_mideast", false),
        Question::new("question_africa", false),
        Question::new("question_americas", true),
        Question::new("question_asia", true),
    ]
}

pub fn default_bank() -> QuestionBank {
    QuestionBank {
        questions: default_questions(),
        strings: Strings::default(),
    }
}
