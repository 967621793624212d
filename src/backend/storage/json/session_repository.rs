//! # JSON Session Repository
//!
//! File-based session storage using a single JSON document
//! `goal_tracker_data.json` in the repository's base directory.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "weekly_goal": 70,
//!   "daily_progress": [10, 10, 10, 10, 10, 10, 10]
//! }
//! ```
//!
//! ## Features
//!
//! - Single data file holding the whole session
//! - Atomic file writes with temp files
//! - Typed errors that name the file involved

use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::backend::domain::models::session::Session;

/// Name of the data file inside the base directory.
pub const DATA_FILE_NAME: &str = "goal_tracker_data.json";

/// Errors surfaced by session storage.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Could not read session file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Session file {path} does not contain valid session data: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not write session file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// File-backed session store rooted at a base directory.
#[derive(Clone)]
pub struct SessionRepository {
    base_directory: PathBuf,
}

impl SessionRepository {
    /// Create a repository rooted at the given directory.
    pub fn new(base_directory: impl AsRef<Path>) -> Self {
        Self {
            base_directory: base_directory.as_ref().to_path_buf(),
        }
    }

    /// Create a repository rooted at the process working directory.
    pub fn new_default() -> Self {
        Self::new(".")
    }

    /// Path of the data file.
    pub fn data_file_path(&self) -> PathBuf {
        self.base_directory.join(DATA_FILE_NAME)
    }

    /// Whether a session has been persisted before. Pure query; never
    /// creates the file.
    pub fn exists(&self) -> bool {
        self.data_file_path().exists()
    }

    /// Load the persisted session from the data file.
    pub fn load(&self) -> Result<Session, SessionStoreError> {
        let path = self.data_file_path();

        let contents = fs::read_to_string(&path).map_err(|source| SessionStoreError::Read {
            path: path.clone(),
            source,
        })?;

        let session: Session =
            serde_json::from_str(&contents).map_err(|source| SessionStoreError::Malformed {
                path: path.clone(),
                source,
            })?;

        debug!("Loaded session from {:?}", path);
        Ok(session)
    }

    /// Persist the session, replacing any previous file contents.
    pub fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let path = self.data_file_path();

        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory).map_err(|source| SessionStoreError::Write {
                path: path.clone(),
                source,
            })?;
            info!("Created data directory {:?}", self.base_directory);
        }

        let json =
            serde_json::to_string_pretty(session).map_err(|source| SessionStoreError::Write {
                path: path.clone(),
                source: io::Error::from(source),
            })?;

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json).map_err(|source| SessionStoreError::Write {
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, &path).map_err(|source| SessionStoreError::Write {
            path: path.clone(),
            source,
        })?;

        debug!("Saved session to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> (SessionRepository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = SessionRepository::new(temp_dir.path());
        (repo, temp_dir)
    }

    #[test]
    fn test_exists_is_false_before_first_save() {
        let (repo, _temp_dir) = setup_test_repo();
        assert!(!repo.exists());
        // Checking must not create the file
        assert!(!repo.data_file_path().exists());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (repo, _temp_dir) = setup_test_repo();

        let session = Session {
            weekly_goal: 70,
            daily_progress: [10, 10, 10, 10, 10, 10, 10],
        };
        repo.save(&session).unwrap();

        assert!(repo.exists());
        let loaded = repo.load().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_save_overwrites_previous_session() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.save(&Session {
            weekly_goal: 10,
            daily_progress: [1; 7],
        })
        .unwrap();
        repo.save(&Session {
            weekly_goal: 99,
            daily_progress: [0, 0, 3, 0, 0, 0, 0],
        })
        .unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.weekly_goal, 99);
        assert_eq!(loaded.daily_progress, [0, 0, 3, 0, 0, 0, 0]);
    }

    #[test]
    fn test_session_persists_across_repository_instances() {
        let (repo, temp_dir) = setup_test_repo();

        let session = Session {
            weekly_goal: 40,
            daily_progress: [5, 5, 5, 5, 5, 5, 5],
        };
        repo.save(&session).unwrap();

        // Create a new repository instance (simulating app restart)
        let repo2 = SessionRepository::new(temp_dir.path());
        let loaded = repo2.load().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let (repo, _temp_dir) = setup_test_repo();

        let result = repo.load();
        assert!(matches!(result, Err(SessionStoreError::Read { .. })));
    }

    #[test]
    fn test_load_malformed_json_is_malformed_error() {
        let (repo, _temp_dir) = setup_test_repo();

        fs::write(repo.data_file_path(), "{ not json").unwrap();
        let result = repo.load();
        assert!(matches!(result, Err(SessionStoreError::Malformed { .. })));
    }

    #[test]
    fn test_load_wrong_shape_is_malformed_error() {
        let (repo, _temp_dir) = setup_test_repo();

        fs::write(
            repo.data_file_path(),
            r#"{"weekly_goal": 10, "daily_progress": [1, 2, 3]}"#,
        )
        .unwrap();
        let result = repo.load();
        assert!(matches!(result, Err(SessionStoreError::Malformed { .. })));

        fs::write(
            repo.data_file_path(),
            r#"{"weekly_goal": -10, "daily_progress": [0, 0, 0, 0, 0, 0, 0]}"#,
        )
        .unwrap();
        let result = repo.load();
        assert!(matches!(result, Err(SessionStoreError::Malformed { .. })));
    }

    #[test]
    fn test_error_messages_name_the_file() {
        let (repo, _temp_dir) = setup_test_repo();

        fs::write(repo.data_file_path(), "oops").unwrap();
        let error = repo.load().unwrap_err();
        assert!(error.to_string().contains(DATA_FILE_NAME));
    }

    #[test]
    fn test_save_creates_missing_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("data").join("tracker");
        let repo = SessionRepository::new(&nested);

        repo.save(&Session::default()).unwrap();
        assert!(repo.exists());
    }

    #[test]
    fn test_no_temp_file_left_behind_after_save() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.save(&Session::default()).unwrap();
        assert!(!repo.data_file_path().with_extension("tmp").exists());
    }
}
