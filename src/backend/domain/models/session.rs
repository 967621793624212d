use serde::{Deserialize, Serialize};

/// One week of tracked progress against a numeric goal.
///
/// This is the entire persisted state of the application. The fixed-size
/// array keeps `daily_progress` at exactly seven entries; a data file with
/// any other arity (or negative values) fails deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Target number of units for the week.
    pub weekly_goal: u32,
    /// Units completed per day, Monday-first.
    pub daily_progress: [u32; 7],
}

impl Default for Session {
    fn default() -> Self {
        Self {
            weekly_goal: 0,
            daily_progress: [0; 7],
        }
    }
}

impl Session {
    /// Sum of the seven daily values. Summed in u64: seven u32 entries can
    /// exceed u32::MAX.
    pub fn total_progress(&self) -> u64 {
        self.daily_progress.iter().map(|&units| u64::from(units)).sum()
    }

    /// Whether cumulative progress has met or passed the weekly goal.
    pub fn goal_reached(&self) -> bool {
        self.total_progress() >= u64::from(self.weekly_goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_empty() {
        let session = Session::default();
        assert_eq!(session.weekly_goal, 0);
        assert_eq!(session.daily_progress, [0; 7]);
        assert_eq!(session.total_progress(), 0);
    }

    #[test]
    fn test_total_progress_sums_all_days() {
        let session = Session {
            weekly_goal: 50,
            daily_progress: [1, 2, 3, 4, 5, 6, 7],
        };
        assert_eq!(session.total_progress(), 28);
    }

    #[test]
    fn test_goal_reached_at_exact_total() {
        let session = Session {
            weekly_goal: 28,
            daily_progress: [1, 2, 3, 4, 5, 6, 7],
        };
        assert!(session.goal_reached());
    }

    #[test]
    fn test_goal_not_reached_below_total() {
        let session = Session {
            weekly_goal: 29,
            daily_progress: [1, 2, 3, 4, 5, 6, 7],
        };
        assert!(!session.goal_reached());
    }

    #[test]
    fn test_zero_goal_counts_as_reached() {
        assert!(Session::default().goal_reached());
    }

    #[test]
    fn test_total_progress_exceeding_u32_does_not_wrap() {
        // The entry dialogs accept any u32, so two max-size days are reachable
        let session = Session {
            weekly_goal: u32::MAX,
            daily_progress: [u32::MAX, u32::MAX, 0, 0, 0, 0, 0],
        };
        assert_eq!(session.total_progress(), 2 * u64::from(u32::MAX));
        assert!(session.goal_reached());
    }

    #[test]
    fn test_json_round_trip() {
        let session = Session {
            weekly_goal: 70,
            daily_progress: [10, 10, 10, 10, 10, 10, 10],
        };
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_wrong_arity_fails_to_deserialize() {
        let too_short = r#"{"weekly_goal": 10, "daily_progress": [1, 2, 3]}"#;
        assert!(serde_json::from_str::<Session>(too_short).is_err());

        let too_long = r#"{"weekly_goal": 10, "daily_progress": [1, 2, 3, 4, 5, 6, 7, 8]}"#;
        assert!(serde_json::from_str::<Session>(too_long).is_err());
    }

    #[test]
    fn test_negative_values_fail_to_deserialize() {
        let negative_goal = r#"{"weekly_goal": -5, "daily_progress": [0, 0, 0, 0, 0, 0, 0]}"#;
        assert!(serde_json::from_str::<Session>(negative_goal).is_err());

        let negative_day = r#"{"weekly_goal": 5, "daily_progress": [0, -1, 0, 0, 0, 0, 0]}"#;
        assert!(serde_json::from_str::<Session>(negative_day).is_err());
    }
}
