//! # App State Module
//!
//! This module defines the central application state structure and initialization logic
//! for the goal tracker app.
//!
//! ## Key Types:
//! - `GoalTrackerApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize new app instance with backend connection
//!
//! ## Purpose:
//! This module serves as the central state management for the entire application,
//! containing:
//! - Backend connection and data access
//! - UI state (error messages)
//! - Modal visibility and form states
//!
//! ## State Management:
//! The GoalTrackerApp struct holds all application state in a single location,
//! making it easy to manage and pass between different UI components. This follows
//! the single source of truth principle for state management.

use log::info;

use crate::backend::Backend;
use crate::ui::state::{ModalState, NoticeKind, UIState};

/// Main application struct for the egui goal tracker
pub struct GoalTrackerApp {
    pub backend: Backend,

    // UI state
    pub ui_state: UIState,

    // Modal visibility and form states
    pub modal: ModalState,
}

impl GoalTrackerApp {
    /// Create a new GoalTrackerApp with default values
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing GoalTrackerApp");

        crate::ui::components::setup_tracker_style(&cc.egui_ctx);

        let backend = Backend::new()?;

        let mut modal = ModalState::new();
        if backend.session_service.is_first_run() {
            // No saved data yet, so walk the user straight into goal entry.
            modal.show_notice(NoticeKind::Welcome);
        }

        Ok(Self {
            backend,

            // UI state
            ui_state: UIState::new(),

            // Modal visibility and form states
            modal,
        })
    }
}
