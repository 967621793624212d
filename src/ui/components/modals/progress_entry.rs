//! # Daily Progress Dialog
//!
//! This module contains the two-stage dialog for recording daily progress.
//!
//! ## Responsibilities:
//! - Stage 1: pick the day of the week (today preselected)
//! - Stage 2: enter the units completed on that day
//! - Apply the entry through the session service on submit
//!
//! ## Purpose:
//! Recording replaces the day's previous value rather than adding to it,
//! so re-entering a number is how a mistake gets corrected. Cancelling at
//! either stage leaves the session untouched.

use eframe::egui;

use crate::backend::domain::models::day_of_week::DayOfWeek;
use crate::ui::app_state::GoalTrackerApp;
use crate::ui::components::modals::shared;
use crate::ui::components::styling::colors;
use crate::ui::state::modal_state::ProgressEntryStage;

impl GoalTrackerApp {
    /// Render the progress entry dialog
    pub fn render_progress_modal(&mut self, ctx: &egui::Context) {
        if !self.modal.show_progress_modal {
            return;
        }

        let stage = self.modal.progress_form.stage;
        shared::show_modal_frame(
            ctx,
            "progress_modal_overlay",
            egui::vec2(500.0, 270.0),
            colors::SUCCESS_GREEN,
            |ui| {
                shared::render_modal_title(ui, "Update Daily Progress", colors::SUCCESS_GREEN);

                match stage {
                    ProgressEntryStage::Day => self.render_day_stage(ui),
                    ProgressEntryStage::Units => self.render_units_stage(ui),
                }
            },
        );
    }

    /// Stage 1: one button per day, today highlighted.
    fn render_day_stage(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Which day do you want to update?")
                .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                .color(colors::TEXT_DARK),
        );
        ui.add_space(14.0);

        let today = DayOfWeek::today();
        let mut picked_day = None;
        ui.horizontal(|ui| {
            ui.add_space(14.0);
            for day in DayOfWeek::ALL {
                let is_today = day == today;
                let (fill, text_color) = if is_today {
                    (colors::BUTTON_PRIMARY, egui::Color32::WHITE)
                } else {
                    (egui::Color32::WHITE, colors::TEXT_DARK)
                };

                let button = egui::Button::new(
                    egui::RichText::new(format!("{}\n{}", day.number(), day.abbrev()))
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                        .color(text_color),
                )
                .fill(fill)
                .stroke(egui::Stroke::new(1.5, colors::BUTTON_OUTLINE))
                .rounding(egui::Rounding::same(8.0))
                .min_size(egui::vec2(50.0, 48.0));

                if ui.add(button).clicked() {
                    picked_day = Some(day);
                }
                ui.add_space(2.0);
            }
        });
        if let Some(day) = picked_day {
            self.modal.progress_form.select_day(day);
        }

        ui.add_space(20.0);
        if shared::cancel_button(ui, "Cancel").clicked() {
            self.modal.hide_all_modals();
        }
    }

    /// Stage 2: units entry for the picked day.
    fn render_units_stage(&mut self, ui: &mut egui::Ui) {
        let day = self.modal.progress_form.selected_day;
        let label = format!(
            "Lessons completed on day {} ({}):",
            day.number(),
            day.abbrev()
        );

        let field_response = shared::render_number_field(
            ui,
            &label,
            &mut self.modal.progress_form.units_text,
            "e.g. 10",
            &self.modal.progress_form.units_error,
        );
        if field_response.changed() {
            self.modal.progress_form.validate();
        }

        // Handle Enter key
        if field_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.submit_progress_form();
        }

        ui.add_space(20.0);

        let mut submitted = false;
        let mut went_back = false;
        let mut cancelled = false;
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            if shared::cancel_button(ui, "Back").clicked() {
                went_back = true;
            }
            ui.add_space(12.0);
            let can_submit = self.modal.progress_form.can_submit();
            if shared::primary_button(ui, "Save Progress", can_submit).clicked() && can_submit {
                submitted = true;
            }
            ui.add_space(12.0);
            if shared::cancel_button(ui, "Cancel").clicked() {
                cancelled = true;
            }
        });

        if submitted {
            self.submit_progress_form();
        }
        if went_back {
            self.modal.progress_form.back_to_day_stage();
        }
        if cancelled {
            self.modal.hide_all_modals();
        }
    }

    /// Apply the units form if it validates, then close the dialog.
    fn submit_progress_form(&mut self) {
        if !self.modal.progress_form.validate() {
            return;
        }
        let Some(units) = self.modal.progress_form.units else {
            return;
        };
        let day = self.modal.progress_form.selected_day;

        if let Err(e) = self.backend.session_service.record_progress(day, units) {
            log::error!("Failed to save daily progress: {:#}", e);
            self.ui_state.set_error(format!("Could not save your progress: {}", e));
        }
        self.modal.hide_all_modals();
    }
}
