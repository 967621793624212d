//! # Notice Dialogs
//!
//! This module contains the single-button informational dialogs.
//!
//! ## Responsibilities:
//! - Welcome notice on first run, leading straight into goal entry
//! - Reset confirmation notice after a session reset

use eframe::egui;

use crate::ui::app_state::GoalTrackerApp;
use crate::ui::components::modals::shared;
use crate::ui::components::styling::colors;
use crate::ui::state::modal_state::NoticeKind;

impl GoalTrackerApp {
    /// Render the active notice dialog, if any
    pub fn render_notice_modal(&mut self, ctx: &egui::Context) {
        let Some(kind) = self.modal.active_notice else {
            return;
        };

        let (title, body) = match kind {
            NoticeKind::Welcome => (
                "Welcome to the Weekly Goal Tracker!",
                "To get started, set your weekly goal using the\n'Set Weekly Goal' button.",
            ),
            NoticeKind::ResetComplete => ("Reset Complete", "Your session has been reset."),
        };

        shared::show_modal_frame(
            ctx,
            "notice_overlay",
            egui::vec2(420.0, 190.0),
            colors::BUTTON_PRIMARY,
            |ui| {
                shared::render_modal_title(ui, title, colors::BUTTON_PRIMARY);

                ui.label(
                    egui::RichText::new(body)
                        .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_DARK),
                );
                ui.add_space(20.0);

                let mut acknowledged = false;
                if shared::primary_button(ui, "OK", true).clicked() {
                    acknowledged = true;
                }

                if acknowledged {
                    match kind {
                        // The welcome notice hands off directly to goal entry so a
                        // fresh session starts with a goal on screen.
                        NoticeKind::Welcome => self.modal.open_goal_modal(),
                        NoticeKind::ResetComplete => self.modal.hide_all_modals(),
                    }
                }
            },
        );
    }
}
