//! # Shared Modal Utilities
//!
//! This module contains the scaffolding common to all dialogs.
//!
//! ## Purpose:
//! - Consistent overlay, frame, and button styling
//! - Keep the individual dialog modules focused on their content
//!
//! The backdrop claims pointer input for the whole screen, so the action
//! row underneath stays inert while a dialog is open.

use eframe::egui;

use crate::ui::components::styling::colors;

/// Render a centered dialog frame over a darkened backdrop.
pub fn show_modal_frame(
    ctx: &egui::Context,
    id: &str,
    size: egui::Vec2,
    accent: egui::Color32,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            // Dark semi-transparent backdrop that swallows clicks
            let screen_rect = ctx.screen_rect();
            let _backdrop_response = ui.allocate_rect(screen_rect, egui::Sense::click());
            ui.painter().rect_filled(
                screen_rect,
                egui::Rounding::ZERO,
                egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
            );

            ui.allocate_ui_at_rect(screen_rect, |ui| {
                ui.centered_and_justified(|ui| {
                    egui::Frame::window(&ui.style())
                        .fill(egui::Color32::WHITE)
                        .stroke(egui::Stroke::new(3.0, accent))
                        .rounding(egui::Rounding::same(15.0))
                        .inner_margin(egui::Margin::same(20.0))
                        .show(ui, |ui| {
                            ui.set_min_size(size);
                            ui.set_max_size(size);
                            ui.vertical_centered(add_contents);
                        });
                });
            });
        });
}

/// Render a dialog title in the shared style.
pub fn render_modal_title(ui: &mut egui::Ui, title: &str, accent: egui::Color32) {
    ui.add_space(10.0);
    ui.label(
        egui::RichText::new(title)
            .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
            .strong()
            .color(accent),
    );
    ui.add_space(12.0);
}

/// Render a labelled single-line number field with its validation error.
pub fn render_number_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    placeholder: &str,
    error: &Option<String>,
) -> egui::Response {
    ui.label(
        egui::RichText::new(label)
            .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
            .color(colors::TEXT_DARK),
    );
    ui.add_space(5.0);

    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(placeholder)
            .desired_width(160.0)
            .font(egui::FontId::new(15.0, egui::FontFamily::Proportional)),
    );

    if let Some(error_message) = error {
        ui.add_space(3.0);
        ui.label(
            egui::RichText::new(error_message)
                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                .color(colors::ERROR_RED),
        );
    }

    response
}

/// Render a filled primary button, grayed out while disabled.
pub fn primary_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let fill = if enabled {
        colors::BUTTON_PRIMARY
    } else {
        colors::BUTTON_DISABLED
    };

    let button = egui::Button::new(
        egui::RichText::new(text)
            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
            .color(egui::Color32::WHITE),
    )
    .fill(fill)
    .stroke(egui::Stroke::new(2.0, fill))
    .rounding(egui::Rounding::same(10.0))
    .min_size(egui::vec2(130.0, 38.0));

    ui.add(button)
}

/// Render a gray cancel-style button.
pub fn cancel_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
            .color(egui::Color32::WHITE),
    )
    .fill(colors::BUTTON_CANCEL)
    .stroke(egui::Stroke::new(2.0, colors::BUTTON_CANCEL))
    .rounding(egui::Rounding::same(10.0))
    .min_size(egui::vec2(100.0, 38.0));

    ui.add(button)
}
