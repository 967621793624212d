//! # Modals Module
//!
//! This module organizes all modal dialog components for the goal tracker app.
//!
//! ## Module Organization:
//! - `goal_entry` - Weekly goal entry modal
//! - `progress_entry` - Two-stage daily progress modal
//! - `reset_confirm` - Reset confirmation modal
//! - `notices` - Single-button informational modals
//! - `shared` - Common modal functionality and styling
//!
//! ## Architecture:
//! Each modal is self-contained with its own rendering logic and state handling.
//! Shared functionality is provided by the shared module for consistency.

pub mod goal_entry;
pub mod notices;
pub mod progress_entry;
pub mod reset_confirm;
pub mod shared;

use eframe::egui;

use crate::ui::app_state::GoalTrackerApp;

impl GoalTrackerApp {
    /// Render whichever modal is currently active.
    ///
    /// Called at the end of the frame so modals paint above the main layout.
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_goal_modal(ctx);
        self.render_progress_modal(ctx);
        self.render_reset_confirm_modal(ctx);
        self.render_notice_modal(ctx);
    }
}
