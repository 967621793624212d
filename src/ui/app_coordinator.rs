//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling the primary
//! update loop and overall application lifecycle.
//!
//! ## Key Functions:
//! - `eframe::App::update()` - Main application update loop (implements eframe::App trait)
//! - `eframe::App::on_exit()` - Final save when the window closes
//! - `render_action_row()` - The three buttons that open the dialogs
//!
//! ## Purpose:
//! This module serves as the central coordinator for the entire application, orchestrating:
//! - UI styling setup
//! - Input handling (ESC key, etc.)
//! - Main content rendering
//! - Modal management
//!
//! ## Application Flow:
//! 1. Set up tracker styling
//! 2. Handle global input (ESC key)
//! 3. Render header, messages, chart, and action buttons
//! 4. Render any active modal on top
//!
//! This is the main entry point that ties together all other UI modules.

use eframe::egui;

use crate::ui::app_state::GoalTrackerApp;
use crate::ui::components::styling::{colors, setup_tracker_style};

impl eframe::App for GoalTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Set up tracker styling
        setup_tracker_style(ctx);

        // Handle ESC key to dismiss whichever dialog is open
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.modal.has_active_modal() {
            self.modal.dismiss_active_modal();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_header(ui);
            ui.add_space(8.0);

            // Error messages
            self.render_messages(ui);

            // Main content area
            self.render_chart_section(ui);
            ui.add_space(12.0);
            self.render_action_row(ui);
        });

        // Render modals
        self.render_modals(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Last chance to flush the session before the process ends.
        if let Err(e) = self.backend.session_service.save() {
            log::error!("Failed to save session on exit: {:#}", e);
        }
    }
}

impl GoalTrackerApp {
    /// Draw the three action buttons below the chart
    fn render_action_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(130.0); // Left padding to center the row

            let goal_button = egui::Button::new(
                egui::RichText::new("Set Weekly Goal")
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .color(egui::Color32::WHITE),
            )
            .fill(colors::BUTTON_PRIMARY)
            .stroke(egui::Stroke::new(1.5, colors::BUTTON_OUTLINE))
            .rounding(egui::Rounding::same(10.0))
            .min_size(egui::vec2(180.0, 44.0));

            if ui.add(goal_button).clicked() {
                self.modal.open_goal_modal();
            }

            ui.add_space(16.0);

            let progress_button = egui::Button::new(
                egui::RichText::new("Update Daily Progress")
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .color(egui::Color32::WHITE),
            )
            .fill(colors::SUCCESS_GREEN)
            .stroke(egui::Stroke::new(1.5, colors::SUCCESS_GREEN))
            .rounding(egui::Rounding::same(10.0))
            .min_size(egui::vec2(210.0, 44.0));

            if ui.add(progress_button).clicked() {
                self.modal.open_progress_modal();
            }

            ui.add_space(16.0);

            let reset_button = egui::Button::new(
                egui::RichText::new("Reset Session")
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .color(colors::ERROR_RED),
            )
            .fill(egui::Color32::WHITE)
            .stroke(egui::Stroke::new(1.5, colors::ERROR_RED))
            .rounding(egui::Rounding::same(10.0))
            .min_size(egui::vec2(160.0, 44.0));

            if ui.add(reset_button).clicked() {
                self.modal.open_reset_confirm();
            }
        });
    }
}
