mod question;

pub use question::{Question, Verdict};
