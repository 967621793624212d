//! # Weekly Goal Dialog
//!
//! This module contains the dialog for setting the weekly goal.
//!
//! ## Responsibilities:
//! - Prompt for a non-negative whole number of units
//! - Inline validation feedback; invalid input keeps the dialog open
//! - Apply the new goal through the session service on submit

use eframe::egui;

use crate::ui::app_state::GoalTrackerApp;
use crate::ui::components::modals::shared;
use crate::ui::components::styling::colors;

impl GoalTrackerApp {
    /// Render the weekly goal dialog
    pub fn render_goal_modal(&mut self, ctx: &egui::Context) {
        if !self.modal.show_goal_modal {
            return;
        }

        shared::show_modal_frame(
            ctx,
            "goal_modal_overlay",
            egui::vec2(380.0, 240.0),
            colors::BUTTON_PRIMARY,
            |ui| {
                shared::render_modal_title(ui, "Set Weekly Goal", colors::BUTTON_PRIMARY);

                let field_response = shared::render_number_field(
                    ui,
                    "How many lessons this week?",
                    &mut self.modal.goal_form.goal_text,
                    "e.g. 70",
                    &self.modal.goal_form.goal_error,
                );
                if field_response.changed() {
                    self.modal.goal_form.validate();
                }

                // Handle Enter key
                if field_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.submit_goal_form();
                }

                ui.add_space(20.0);

                let mut submitted = false;
                let mut cancelled = false;
                ui.horizontal(|ui| {
                    ui.add_space(40.0);
                    let can_submit = self.modal.goal_form.can_submit();
                    if shared::primary_button(ui, "Save Goal", can_submit).clicked() && can_submit {
                        submitted = true;
                    }
                    ui.add_space(16.0);
                    if shared::cancel_button(ui, "Cancel").clicked() {
                        cancelled = true;
                    }
                });

                if submitted {
                    self.submit_goal_form();
                }
                if cancelled {
                    self.modal.hide_all_modals();
                }
            },
        );
    }

    /// Apply the goal form if it validates, then close the dialog.
    fn submit_goal_form(&mut self) {
        if !self.modal.goal_form.validate() {
            return;
        }
        let Some(goal) = self.modal.goal_form.goal else {
            return;
        };

        if let Err(e) = self.backend.session_service.set_weekly_goal(goal) {
            log::error!("Failed to save weekly goal: {:#}", e);
            self.ui_state.set_error(format!("Could not save your goal: {}", e));
        }
        self.modal.hide_all_modals();
    }
}
