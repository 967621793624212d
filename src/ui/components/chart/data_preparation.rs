//! # Chart Data Preparation
//!
//! This module turns a session into plot-ready series for the weekly
//! progress chart. It is deliberately free of egui types so the chart math
//! can be unit tested without a GUI context.

use crate::backend::domain::models::session::Session;

/// Plot-ready data for the weekly progress chart.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyChartData {
    /// Steady pace needed to hit the goal: 8 points at x = 0..=7, ending
    /// exactly at the weekly goal.
    pub goal_line: Vec<[f64; 2]>,
    /// Cumulative progress: 8 points at x = 0..=7, starting at 0.
    pub progress_line: Vec<[f64; 2]>,
    /// Upper y-axis bound with 10% headroom above the larger of goal and
    /// total progress.
    pub y_axis_max: f64,
    /// Whether the completion annotation should be shown.
    pub goal_reached: bool,
}

/// Prepare both chart series from the current session.
pub fn prepare_weekly_chart_data(session: &Session) -> WeeklyChartData {
    let goal = session.weekly_goal as f64;

    let goal_line: Vec<[f64; 2]> = (0..=7).map(|i| [i as f64, goal / 7.0 * i as f64]).collect();

    let mut progress_line = Vec::with_capacity(8);
    progress_line.push([0.0, 0.0]);
    // u64 accumulator: seven u32 day values can exceed u32::MAX
    let mut running_total = 0u64;
    for (i, units) in session.daily_progress.iter().enumerate() {
        running_total += u64::from(*units);
        progress_line.push([(i + 1) as f64, running_total as f64]);
    }

    let total = session.total_progress() as f64;
    let y_axis_max = if goal <= 0.0 && total <= 0.0 {
        // Nothing tracked yet; keep the axis from collapsing to zero height
        1.0
    } else {
        goal.max(total) * 1.1
    };

    WeeklyChartData {
        goal_line,
        progress_line,
        y_axis_max,
        goal_reached: session.goal_reached(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(weekly_goal: u32, daily_progress: [u32; 7]) -> Session {
        Session {
            weekly_goal,
            daily_progress,
        }
    }

    #[test]
    fn test_both_lines_have_eight_points() {
        let data = prepare_weekly_chart_data(&session(70, [10; 7]));
        assert_eq!(data.goal_line.len(), 8);
        assert_eq!(data.progress_line.len(), 8);
        for i in 0..=7 {
            assert_eq!(data.goal_line[i][0], i as f64);
            assert_eq!(data.progress_line[i][0], i as f64);
        }
    }

    #[test]
    fn test_steady_week_overlaps_goal_pace() {
        // Goal 70 at 10 a day tracks the pace line exactly
        let data = prepare_weekly_chart_data(&session(70, [10; 7]));

        let expected: Vec<f64> = (0..=7).map(|i| (i * 10) as f64).collect();
        for (i, expected_y) in expected.iter().enumerate() {
            assert!((data.goal_line[i][1] - expected_y).abs() < 1e-9);
            assert_eq!(data.progress_line[i][1], *expected_y);
        }
        assert!(data.goal_reached);
    }

    #[test]
    fn test_progress_line_starts_at_zero_and_ends_at_total() {
        let s = session(50, [3, 0, 7, 1, 0, 4, 2]);
        let data = prepare_weekly_chart_data(&s);

        assert_eq!(data.progress_line[0], [0.0, 0.0]);
        assert_eq!(data.progress_line[7][1], s.total_progress() as f64);
    }

    #[test]
    fn test_progress_line_is_monotonically_non_decreasing() {
        let data = prepare_weekly_chart_data(&session(50, [3, 0, 7, 1, 0, 4, 2]));

        for pair in data.progress_line.windows(2) {
            assert!(pair[1][1] >= pair[0][1]);
        }
    }

    #[test]
    fn test_goal_line_ends_exactly_at_goal() {
        for goal in [0, 1, 7, 70, 100, 12345] {
            let data = prepare_weekly_chart_data(&session(goal, [0; 7]));
            assert_eq!(data.goal_line[0][1], 0.0);
            assert_eq!(data.goal_line[7][1], goal as f64);
        }
    }

    #[test]
    fn test_y_axis_max_has_ten_percent_headroom_over_goal() {
        // Goal 100 with no progress keeps the goal line at 91% of the axis
        let data = prepare_weekly_chart_data(&session(100, [0; 7]));
        assert!((data.y_axis_max - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_y_axis_max_follows_progress_when_it_exceeds_goal() {
        let data = prepare_weekly_chart_data(&session(10, [20, 0, 0, 0, 0, 0, 0]));
        assert!((data.y_axis_max - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_y_axis_max_never_degenerates() {
        let data = prepare_weekly_chart_data(&Session::default());
        assert_eq!(data.y_axis_max, 1.0);
    }

    #[test]
    fn test_goal_reached_flag_at_boundary() {
        assert!(prepare_weekly_chart_data(&session(28, [4; 7])).goal_reached);
        assert!(!prepare_weekly_chart_data(&session(29, [4; 7])).goal_reached);
        // An empty session trivially meets a zero goal
        assert!(prepare_weekly_chart_data(&Session::default()).goal_reached);
    }

    #[test]
    fn test_progress_line_handles_sums_beyond_u32() {
        // Two max-size entries are accepted by the dialogs; the cumulative
        // curve must keep climbing instead of wrapping
        let data = prepare_weekly_chart_data(&session(70, [u32::MAX, u32::MAX, 0, 0, 0, 0, 0]));

        assert_eq!(data.progress_line[7][1], 2.0 * u32::MAX as f64);
        for pair in data.progress_line.windows(2) {
            assert!(pair[1][1] >= pair[0][1]);
        }
        assert!(data.goal_reached);
    }

    #[test]
    fn test_goal_line_points_are_evenly_spaced() {
        let data = prepare_weekly_chart_data(&session(7, [0; 7]));
        for pair in data.goal_line.windows(2) {
            assert!((pair[1][1] - pair[0][1] - 1.0).abs() < 1e-9);
        }
    }
}
