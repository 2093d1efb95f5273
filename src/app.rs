use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::data::Strings;
use crate::models::{Question, Verdict};
use crate::quiz::QuizState;

/// How long a verdict toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A user action on the quiz screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    AnswerTrue,
    AnswerFalse,
    /// Tapping the question text behaves like `Next`.
    TapQuestion,
    Quit,
}

/// Screen lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Create,
    Start,
    Resume,
    Pause,
    SaveState,
    Stop,
    Destroy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub verdict: Verdict,
    pub expires_at: Instant,
}

/// The quiz screen: one [`QuizState`], its string table and the toast
/// currently on display.
pub struct App {
    quiz: QuizState,
    strings: Strings,
    toast: Option<Toast>,
    lifecycle: Vec<Lifecycle>,
}

impl App {
    pub fn new(quiz: QuizState, strings: Strings) -> Self {
        Self {
            quiz,
            strings,
            toast: None,
            lifecycle: Vec::new(),
        }
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    pub fn current_question(&self) -> &Question {
        self.quiz.current_question()
    }

    /// Display text of the current question.
    pub fn current_prompt(&self) -> &str {
        self.strings.resolve(&self.quiz.current_question().prompt)
    }

    pub fn current_question_number(&self) -> usize {
        self.quiz.current_index() + 1
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.len()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Text of the toast on display, if any.
    pub fn toast_message(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .map(|toast| self.strings.resolve(toast.verdict.message_key()))
    }

    pub fn lifecycle(&self) -> &[Lifecycle] {
        &self.lifecycle
    }

    /// Apply a saved position before the first navigation.
    pub fn restore(&mut self, index: i64) {
        self.quiz.restore_position(index);
        info!(
            saved = index,
            restored = self.quiz.current_index(),
            "restored quiz position"
        );
    }

    /// Record a lifecycle transition. Returns the position to persist when
    /// the screen is asked to save its state.
    pub fn transition(&mut self, event: Lifecycle) -> Option<i64> {
        self.lifecycle.push(event);
        match event {
            Lifecycle::SaveState => {
                let index = self.quiz.serialize_position();
                info!(index, "on_save_instance_state");
                Some(index)
            }
            _ => {
                debug!(?event, "lifecycle transition");
                None
            }
        }
    }

    /// Run one user action. Returns true if the app should exit.
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Next | Action::TapQuestion => self.quiz.advance(),
            Action::Previous => self.quiz.retreat(),
            Action::AnswerTrue => self.answer(true, now),
            Action::AnswerFalse => self.answer(false, now),
            Action::Quit => return true,
        }

        debug!(?action, index = self.quiz.current_index(), "handled action");
        false
    }

    /// Drop the toast once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if self.toast.is_some_and(|toast| now >= toast.expires_at) {
            self.toast = None;
        }
    }

    fn answer(&mut self, guess: bool, now: Instant) {
        let verdict = Verdict::from(self.quiz.check_answer(guess));
        debug!(guess, ?verdict, index = self.quiz.current_index(), "checked answer");

        self.toast = Some(Toast {
            verdict,
            expires_at: now + TOAST_DURATION,
        });
    }
}
