//! # geoquiz
//!
//! A single-screen true/false geography quiz for the terminal.
//!
//! [`QuizState`] is the core: a wrapping cursor over a fixed question
//! sequence. [`Quiz`] hosts it on a terminal screen, saving the cursor to a
//! state file when the screen goes away so the next run resumes in place.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geoquiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::with_default_bank()?.with_state_file("geoquiz-state.json");
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
mod data;
mod error;
mod models;
pub mod persistence;
mod quiz;
pub mod terminal;
mod ui;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::{info, warn};

pub use app::{Action, App, Lifecycle, TOAST_DURATION, Toast};
pub use data::{
    LoadError, QuestionBank, Strings, default_bank, default_questions, load_bank_from_json,
};
pub use error::QuizError;
pub use models::{Question, Verdict};
pub use persistence::{PersistError, SavedState};
pub use quiz::QuizState;

/// Input poll interval; bounds how late an expired toast is cleared.
const TICK_RATE: Duration = Duration::from_millis(100);

/// A quiz screen that can be run in the terminal.
pub struct Quiz {
    app: App,
    state_file: Option<PathBuf>,
}

impl Quiz {
    /// Create a quiz over `bank`. Fails if the bank has no questions.
    pub fn new(bank: QuestionBank) -> Result<Self, QuizError> {
        let quiz = QuizState::new(bank.questions)?;
        Ok(Self {
            app: App::new(quiz, bank.strings),
            state_file: None,
        })
    }

    pub fn with_default_bank() -> Result<Self, QuizError> {
        Self::new(default_bank())
    }

    /// Load a quiz from a JSON question bank.
    ///
    /// ```rust,no_run
    /// use geoquiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        Self::new(load_bank_from_json(path)?)
    }

    /// Persist the cursor to `path` when the screen shuts down.
    pub fn with_state_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.state_file = Some(path.into());
        self
    }

    /// Resume from the saved position in the state file, if there is one.
    ///
    /// A state file that cannot be read is logged and ignored; the quiz then
    /// starts on the first question.
    pub fn resume(mut self) -> Self {
        let Some(path) = &self.state_file else {
            return self;
        };

        match SavedState::load(path) {
            Ok(Some(saved)) => self.app.restore(saved.index),
            Ok(None) => info!("no saved position, starting at the first question"),
            Err(e) => warn!("ignoring saved position: {}", e),
        }
        self
    }

    /// Run the quiz in the terminal until the user quits, then save the
    /// cursor.
    pub fn run(mut self) -> Result<(), QuizError> {
        self.app.transition(Lifecycle::Create);
        self.app.transition(Lifecycle::Start);
        self.app.transition(Lifecycle::Resume);

        let result = {
            let mut session = terminal::TerminalSession::start()?;
            run_event_loop(&mut session, &mut self.app)
        };

        let saved = self.shut_down();
        result.and(saved)
    }

    /// Take the screen down after the event loop exits: pause, save the
    /// cursor, stop, destroy. Stop and destroy are recorded even when saving
    /// fails; the save error is returned afterwards.
    pub fn shut_down(&mut self) -> Result<(), QuizError> {
        self.app.transition(Lifecycle::Pause);
        let saved = self.suspend();
        if let Err(e) = &saved {
            warn!("failed to save quiz position: {}", e);
        }
        self.app.transition(Lifecycle::Stop);
        self.app.transition(Lifecycle::Destroy);
        saved
    }

    /// Save the current position to the state file, if one is configured.
    pub fn suspend(&mut self) -> Result<(), QuizError> {
        let index = self.app.transition(Lifecycle::SaveState);
        if let (Some(path), Some(index)) = (&self.state_file, index) {
            SavedState::new(index).save(path)?;
        }
        Ok(())
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    app: &mut App,
) -> Result<(), QuizError> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(action) = action_for_key(key.code) {
                if app.dispatch(action, Instant::now()) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Map a key to the screen action it triggers.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Action::AnswerTrue),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(Action::AnswerFalse),
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('l') => Some(Action::Next),
        KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('h') => Some(Action::Previous),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::TapQuestion),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}
