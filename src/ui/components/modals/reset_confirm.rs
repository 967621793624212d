//! # Reset Confirmation Dialog
//!
//! This module contains the yes/no confirmation shown before a session reset.
//!
//! ## Purpose:
//! A reset clears the goal and all seven daily values, so it never runs off
//! a single click. Only an explicit "Yes" applies it.

use eframe::egui;

use crate::ui::app_state::GoalTrackerApp;
use crate::ui::components::modals::shared;
use crate::ui::components::styling::colors;
use crate::ui::state::modal_state::NoticeKind;

impl GoalTrackerApp {
    /// Render the reset confirmation dialog
    pub fn render_reset_confirm_modal(&mut self, ctx: &egui::Context) {
        if !self.modal.show_reset_confirm {
            return;
        }

        shared::show_modal_frame(
            ctx,
            "reset_confirm_overlay",
            egui::vec2(400.0, 200.0),
            colors::ERROR_RED,
            |ui| {
                shared::render_modal_title(ui, "Reset Session", colors::ERROR_RED);

                ui.label(
                    egui::RichText::new(
                        "Are you sure you want to reset your session?\nThis will clear all progress.",
                    )
                    .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_DARK),
                );
                ui.add_space(20.0);

                let mut confirmed = false;
                let mut declined = false;
                ui.horizontal(|ui| {
                    ui.add_space(60.0);
                    if shared::primary_button(ui, "Yes", true).clicked() {
                        confirmed = true;
                    }
                    ui.add_space(16.0);
                    if shared::cancel_button(ui, "No").clicked() {
                        declined = true;
                    }
                });

                if confirmed {
                    self.apply_reset();
                }
                if declined {
                    self.modal.hide_all_modals();
                }
            },
        );
    }

    /// Clear the session and report the outcome.
    fn apply_reset(&mut self) {
        if let Err(e) = self.backend.session_service.reset() {
            log::error!("Failed to save after reset: {:#}", e);
            self.ui_state.set_error(format!("Could not save the reset: {}", e));
        }
        self.modal.show_notice(NoticeKind::ResetComplete);
    }
}
