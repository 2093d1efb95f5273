use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::data::{QuestionBank, Strings};
use crate::models::Question;

/// Error loading a question bank file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} must contain at least one question", .0.display())]
    Empty(PathBuf),
}

#[derive(Deserialize)]
struct BankFile {
    questions: Vec<Question>,
    #[serde(default)]
    strings: HashMap<String, String>,
}

/// Load a question bank from a JSON file.
///
/// Strings in the file are layered over the built-in table, so a bank only
/// needs to supply text for its own prompt keys.
pub fn load_bank_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionBank, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file: BankFile = serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if file.questions.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    let mut strings = Strings::default();
    strings.extend(file.strings);

    debug!(
        path = %path.display(),
        questions = file.questions.len(),
        "loaded question bank"
    );

    Ok(QuestionBank {
        questions: file.questions,
        strings,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_bank_with_strings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bank.json");
        fs::write(
            &path,
            r#"{
                "questions": [
                    {"prompt": "question_alps", "correct_answer": false},
                    {"prompt": "question_oceans", "correct_answer": true}
                ],
                "strings": {"question_alps": "The Alps are in South America."}
            }"#,
        )
        .unwrap();

        let bank = load_bank_from_json(&path).unwrap();
        assert_eq!(bank.questions.len(), 2);
        assert!(!bank.questions[0].correct_answer);
        assert_eq!(
            bank.strings.resolve("question_alps"),
            "The Alps are in South America."
        );
        assert_eq!(
            bank.strings.resolve("question_oceans"),
            "The Pacific Ocean is larger than the Atlantic Ocean."
        );
    }

    #[test]
    fn test_load_bank_rejects_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, r#"{"questions": []}"#).unwrap();

        assert!(matches!(load_bank_from_json(&path), Err(LoadError::Empty(_))));
    }

    #[test]
    fn test_load_bank_reports_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            load_bank_from_json(&path),
            Err(LoadError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_bank_reports_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        assert!(matches!(
            load_bank_from_json(&path),
            Err(LoadError::Io { .. })
        ));
    }
}
