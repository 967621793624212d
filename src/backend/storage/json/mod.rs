//! JSON file storage backend.

pub mod session_repository;

pub use session_repository::{SessionRepository, SessionStoreError, DATA_FILE_NAME};
