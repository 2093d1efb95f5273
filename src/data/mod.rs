mod bank;
mod loader;
mod strings;

pub use bank::{QuestionBank, default_bank, default_questions};
pub use loader::{LoadError, load_bank_from_json};
pub use strings::Strings;
