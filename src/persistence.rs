//! Saved screen state.
//!
//! The only thing that survives a restart is the cursor, stored as a single
//! integer under the `index` key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to access {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed state in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    pub index: i64,
}

impl SavedState {
    pub fn new(index: i64) -> Self {
        Self { index }
    }

    /// Read a saved state. A missing file means there is nothing to restore.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>, PersistError> {
        let path = path.as_ref();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no saved state");
                return Ok(None);
            }
            Err(source) => {
                return Err(PersistError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let state = serde_json::from_str(&contents).map_err(|source| PersistError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(state))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let path = path.as_ref();
        let io_err = |source: io::Error| PersistError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string(self).map_err(|source| PersistError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)?;

        debug!(path = %path.display(), index = self.index, "saved state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("saved.json");
        SavedState::new(3).save(&path).unwrap();

        assert!(path.parent().unwrap().is_dir());
        assert_eq!(SavedState::load(&path).unwrap(), Some(SavedState::new(3)));
    }

    #[test]
    fn test_nested_state_dir_removed_with_tempdir() {
        let dir = tempdir().unwrap();
        let state_dir = dir.path().join("state");
        SavedState::new(1).save(state_dir.join("saved.json")).unwrap();

        dir.close().unwrap();
        assert!(!state_dir.exists());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("never-written.json");
        assert_eq!(SavedState::load(&path).unwrap(), None);
    }

    #[test]
    fn test_malformed_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("malformed.json");
        fs::write(&path, r#"{"index": "three"}"#).unwrap();

        assert!(matches!(
            SavedState::load(&path),
            Err(PersistError::Malformed { .. })
        ));
    }

    #[test]
    fn test_out_of_range_index_is_kept_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("negative.json");
        fs::write(&path, r#"{"index": -12}"#).unwrap();

        assert_eq!(SavedState::load(&path).unwrap(), Some(SavedState::new(-12)));
    }

    #[test]
    fn test_save_fails_when_parent_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        assert!(matches!(
            SavedState::new(0).save(blocker.join("saved.json")),
            Err(PersistError::Io { .. })
        ));
    }
}
