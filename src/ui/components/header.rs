//! # Header Module
//!
//! This module renders the application header and the user feedback strip.
//!
//! ## Key Functions:
//! - `render_header()` - Title bar at the top of the window
//! - `render_messages()` - Error banner shown when a save fails

use eframe::egui;

use crate::ui::app_state::GoalTrackerApp;
use crate::ui::components::styling::colors;

impl GoalTrackerApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(colors::CARD_BACKGROUND)
            .inner_margin(egui::Margin::symmetric(16.0, 10.0));

        frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Weekly Goal Tracker")
                            .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_DARK),
                    )
                    .selectable(false),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let session = self.backend.session_service.session();
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{} / {} lessons",
                                session.total_progress(),
                                session.weekly_goal
                            ))
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                });
            });
        });
    }

    /// Render the error banner, if a message is pending
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.ui_state.error_message.clone() else {
            return;
        };

        egui::Frame::none()
            .fill(egui::Color32::from_rgb(253, 236, 236))
            .stroke(egui::Stroke::new(1.0, colors::ERROR_RED))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(message)
                            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                            .color(colors::ERROR_RED),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Dismiss").clicked() {
                            self.ui_state.clear_messages();
                        }
                    });
                });
            });
        ui.add_space(4.0);
    }
}
