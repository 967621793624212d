//! # Backend Module
//!
//! Domain logic and storage for the weekly goal tracker, kept free of UI
//! concerns so everything here can be unit tested without a window. The
//! egui layer talks to this module through the [`Backend`] facade.

use anyhow::Result;
use std::path::Path;

pub mod domain;
pub mod storage;

use domain::session_service::SessionService;
use storage::json::SessionRepository;

/// Main backend struct that owns the domain services.
pub struct Backend {
    pub session_service: SessionService,
}

impl Backend {
    /// Create a backend with session data stored in the working directory.
    pub fn new() -> Result<Self> {
        let session_service = SessionService::new(SessionRepository::new_default())?;
        Ok(Self { session_service })
    }

    /// Create a backend with session data stored under the given directory.
    #[allow(dead_code)]
    pub fn with_data_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let session_service = SessionService::new(SessionRepository::new(dir))?;
        Ok(Self { session_service })
    }
}
