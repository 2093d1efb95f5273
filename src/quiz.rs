use crate::error::QuizError;
use crate::models::Question;

/// Cursor over a fixed, non-empty sequence of questions.
///
/// Navigation wraps in both directions, so every operation is total once the
/// state has been constructed.
#[derive(Debug, Clone)]
pub struct QuizState {
    questions: Vec<Question>,
    current_index: usize,
}

impl QuizState {
    /// Create a quiz positioned on the first question.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionBank);
        }

        Ok(Self {
            questions,
            current_index: 0,
        })
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Never true for a constructed quiz.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn advance(&mut self) {
        self.current_index = (self.current_index + 1) % self.len();
    }

    pub fn retreat(&mut self) {
        self.current_index = (self.current_index + self.len() - 1) % self.len();
    }

    /// Whether `user_guess` matches the current question's answer.
    pub fn check_answer(&self, user_guess: bool) -> bool {
        user_guess == self.current_question().correct_answer
    }

    /// The cursor as a plain integer for external storage.
    pub fn serialize_position(&self) -> i64 {
        self.current_index as i64
    }

    /// Move the cursor to a previously serialized position.
    ///
    /// The value comes from outside the process and is normalized with a
    /// Euclidean remainder, so negative or out-of-range input still lands on
    /// a valid question.
    pub fn restore_position(&mut self, value: i64) {
        let len = self.len() as i64;
        self.current_index = value.rem_euclid(len) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_questions;

    fn quiz() -> QuizState {
        QuizState::new(default_questions()).unwrap()
    }

    #[test]
    fn test_empty_bank_is_rejected() {
        assert!(matches!(
            QuizState::new(Vec::new()),
            Err(QuizError::EmptyQuestionBank)
        ));
    }

    #[test]
    fn test_advance_wraps_to_first() {
        let mut quiz = quiz();
        for _ in 0..4 {
            quiz.advance();
        }
        assert_eq!(quiz.current_index(), 4);

        quiz.advance();
        assert_eq!(quiz.current_index(), 0);

        quiz.retreat();
        assert_eq!(quiz.current_index(), 4);
    }

    #[test]
    fn test_advance_n_times() {
        for start in 0..5 {
            for n in 0..23 {
                let mut quiz = quiz();
                quiz.restore_position(start);
                for _ in 0..n {
                    quiz.advance();
                }
                assert_eq!(quiz.serialize_position(), (start + n) % 5);
            }
        }
    }

    #[test]
    fn test_retreat_and_advance_are_inverse() {
        let mut quiz = quiz();
        for start in 0..5 {
            quiz.restore_position(start);
            quiz.advance();
            quiz.retreat();
            assert_eq!(quiz.serialize_position(), start);

            quiz.retreat();
            quiz.advance();
            assert_eq!(quiz.serialize_position(), start);
        }
    }

    #[test]
    fn test_check_answer_for_every_question() {
        let mut quiz = quiz();
        for _ in 0..quiz.len() {
            let correct = quiz.current_question().correct_answer;
            assert!(quiz.check_answer(correct));
            assert!(!quiz.check_answer(!correct));
            quiz.advance();
        }
    }

    #[test]
    fn test_check_answer_on_false_question() {
        let mut quiz = quiz();
        quiz.advance();
        assert!(!quiz.current_question().correct_answer);
        assert!(quiz.check_answer(false));
        assert!(!quiz.check_answer(true));
        assert_eq!(quiz.current_index(), 1);
    }

    #[test]
    fn test_restore_position_normalizes() {
        let mut quiz = quiz();
        quiz.restore_position(7);
        assert_eq!(quiz.serialize_position(), 2);

        quiz.restore_position(-1);
        assert_eq!(quiz.serialize_position(), 4);

        quiz.restore_position(-10);
        assert_eq!(quiz.serialize_position(), 0);

        quiz.restore_position(i64::MAX);
        assert_eq!(quiz.serialize_position(), i64::MAX % 5);

        quiz.restore_position(i64::MIN);
        assert_eq!(quiz.serialize_position(), i64::MIN.rem_euclid(5));
    }

    #[test]
    fn test_single_question_bank() {
        let mut quiz = QuizState::new(vec![Question::new("only", true)]).unwrap();
        quiz.advance();
        assert_eq!(quiz.current_index(), 0);
        quiz.retreat();
        assert_eq!(quiz.current_index(), 0);
        quiz.restore_position(41);
        assert_eq!(quiz.current_index(), 0);
    }
}
