//! # UI State Module
//!
//! This module contains general UI state that affects the overall user
//! experience but is not specific to any particular component.
//!
//! ## Responsibilities:
//! - User feedback messages (error only)
//!
//! ## Purpose:
//! Save failures during a session are non-fatal: the in-memory state is
//! kept and the problem is surfaced here as a banner instead of tearing
//! the app down.

/// General UI state for user feedback
#[derive(Debug, Default)]
pub struct UIState {
    /// Error message to display to the user
    pub error_message: Option<String>,
}

impl UIState {
    /// Create new UI state with default values
    pub fn new() -> Self {
        Self {
            error_message: None,
        }
    }

    /// Clear any error messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }
}
