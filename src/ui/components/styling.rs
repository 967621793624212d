//! # Styling Module
//!
//! This module contains the styling setup and color constants for the
//! weekly goal tracker.
//!
//! ## Key Functions:
//! - `setup_tracker_style()` - Configure global egui styling
//! - `card_frame()` - Frame used for the chart card and content sections
//!
//! ## Purpose:
//! A single place for visual constants keeps the chart, buttons, and
//! dialogs consistent without scattering color literals through the
//! components.

use eframe::egui;

/// Setup application-wide styling.
pub fn setup_tracker_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = colors::WINDOW_BACKGROUND;
        style.visuals.window_fill = colors::WINDOW_BACKGROUND;
        style.visuals.button_frame = true;

        // In egui 0.28, text edits draw their background with extreme_bg_color
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(248, 248, 248);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Frame for white content cards.
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(16.0))
}

/// Color constants for the tracker theme
pub mod colors {
    use egui::Color32;

    // Window and cards
    pub const WINDOW_BACKGROUND: Color32 = Color32::from_rgb(237, 241, 245);
    pub const CARD_BACKGROUND: Color32 = Color32::WHITE;

    // Chart series
    pub const GOAL_LINE: Color32 = Color32::from_rgb(160, 160, 160);
    pub const PROGRESS_LINE: Color32 = Color32::from_rgb(100, 150, 255);

    // Text
    pub const TEXT_DARK: Color32 = Color32::from_rgb(60, 60, 60);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);

    // Feedback
    pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(34, 139, 34);
    pub const ERROR_RED: Color32 = Color32::from_rgb(220, 50, 50);

    // Buttons
    pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(100, 150, 255);
    pub const BUTTON_CANCEL: Color32 = Color32::from_rgb(120, 120, 120);
    pub const BUTTON_DISABLED: Color32 = Color32::from_rgb(180, 180, 180);
    pub const BUTTON_OUTLINE: Color32 = Color32::from_rgb(100, 150, 255);
}
