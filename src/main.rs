use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use geoquiz::Quiz;
use geoquiz::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // The TUI owns stdout, so logs go to a file. RUST_LOG overrides --verbose.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("geoquiz={}", config.log_level()))),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let quiz = match &config.questions {
        Some(path) => Quiz::from_json(path)?,
        None => Quiz::with_default_bank()?,
    };
    info!(
        questions = quiz.app().total_questions(),
        state_file = %config.state_file.display(),
        "starting geoquiz"
    );

    let quiz = quiz.with_state_file(&config.state_file);
    let quiz = if config.fresh { quiz } else { quiz.resume() };

    quiz.run()?;
    info!("geoquiz exited");
    Ok(())
}
