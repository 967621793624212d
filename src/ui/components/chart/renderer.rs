//! # Chart Renderer Module
//!
//! This module renders the weekly progress chart using egui_plot: the
//! cumulative progress line against the steady goal pace line, with day
//! labels on the x axis and a completion annotation once the goal is met.
//!
//! ## Key Functions:
//! - `render_chart_section()` - Heading plus plot inside a card
//! - `render_weekly_plot()` - The actual egui_plot rendering
//!
//! ## Purpose:
//! The chart is a passive display: zooming, panning and scrolling are
//! disabled, and it redraws from current session state every frame, so any
//! change made through the dialogs is visible immediately.

use eframe::egui;

use crate::backend::domain::models::day_of_week::DayOfWeek;
use crate::ui::app_state::GoalTrackerApp;
use crate::ui::components::chart::data_preparation::{prepare_weekly_chart_data, WeeklyChartData};
use crate::ui::components::styling::{self, colors};

/// Fixed height of the plot area.
const CHART_HEIGHT: f32 = 400.0;

impl GoalTrackerApp {
    /// Render the chart card: heading line plus the weekly plot.
    pub fn render_chart_section(&mut self, ui: &mut egui::Ui) {
        let session = self.backend.session_service.session();
        let data = prepare_weekly_chart_data(session);
        let heading = format!("Weekly Goal: {} lessons", session.weekly_goal);

        styling::card_frame().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(heading)
                            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_DARK),
                    )
                    .selectable(false),
                );
            });
            ui.add_space(4.0);
            self.render_weekly_plot(ui, &data);
        });
    }

    /// Render the two-series plot from prepared chart data.
    fn render_weekly_plot(&self, ui: &mut egui::Ui, data: &WeeklyChartData) {
        use egui_plot::{GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, Text};

        let goal_line = Line::new(PlotPoints::new(data.goal_line.clone()))
            .color(colors::GOAL_LINE)
            .width(2.0)
            .name("Goal");

        let progress_line = Line::new(PlotPoints::new(data.progress_line.clone()))
            .color(colors::PROGRESS_LINE)
            .width(2.0)
            .name("Progress");

        let goal_reached = data.goal_reached;
        let annotation_y = data.y_axis_max * 0.95;

        Plot::new("weekly_progress_chart")
            .height(CHART_HEIGHT)
            .width(ui.available_width())
            .show_axes([true, true])
            .show_grid([true, true])
            .include_y(0.0)
            .include_y(data.y_axis_max)
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show_x(false)
            .show_y(false)
            .show_background(false)
            .legend(Legend::default())
            .x_grid_spacer(|_input| {
                // One mark per day boundary, no fractional marks
                (0..=7)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(|mark, _range| {
                // Blank at 0, day abbreviations at 1..=7
                let rounded = mark.value.round();
                if (mark.value - rounded).abs() > 0.05 {
                    return String::new();
                }
                DayOfWeek::from_number(rounded as u32)
                    .map(|day| day.abbrev().to_string())
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.line(goal_line);
                plot_ui.line(progress_line);

                if goal_reached {
                    let annotation = Text::new(
                        PlotPoint::new(3.5, annotation_y),
                        egui::RichText::new("You completed your weekly goal!")
                            .size(16.0)
                            .strong(),
                    )
                    .color(colors::SUCCESS_GREEN)
                    .anchor(egui::Align2::CENTER_CENTER);
                    plot_ui.text(annotation);
                }
            });
    }
}
