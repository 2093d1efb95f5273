//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "geoquiz")]
#[command(version, about = "True/false geography quiz in the terminal", long_about = None)]
pub struct Config {
    /// JSON file to load the questions from (defaults to the built-in bank)
    #[arg(short, long)]
    pub questions: Option<PathBuf>,

    /// File the current question index is saved to between runs
    #[arg(short, long, default_value = "geoquiz-state.json")]
    pub state_file: PathBuf,

    /// File to write logs to
    #[arg(long, default_value = "geoquiz.log")]
    pub log_file: PathBuf,

    /// Start from the first question, ignoring any saved position
    #[arg(long)]
    pub fresh: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
