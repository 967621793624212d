use chrono::{Datelike, Local};

/// A day of the tracked week, Monday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, thiserror::Error)]
pub enum DayOfWeekError {
    #[error("Day must be between 1 and 7, got {0}")]
    OutOfRange(u32),
}

impl DayOfWeek {
    /// All seven days in Monday-first order.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Parse a 1-based day number (1 = Monday, 7 = Sunday).
    pub fn from_number(number: u32) -> Result<Self, DayOfWeekError> {
        match number {
            1 => Ok(DayOfWeek::Monday),
            2 => Ok(DayOfWeek::Tuesday),
            3 => Ok(DayOfWeek::Wednesday),
            4 => Ok(DayOfWeek::Thursday),
            5 => Ok(DayOfWeek::Friday),
            6 => Ok(DayOfWeek::Saturday),
            7 => Ok(DayOfWeek::Sunday),
            _ => Err(DayOfWeekError::OutOfRange(number)),
        }
    }

    /// 1-based day number (1 = Monday, 7 = Sunday).
    pub fn number(&self) -> u32 {
        match self {
            DayOfWeek::Monday => 1,
            DayOfWeek::Tuesday => 2,
            DayOfWeek::Wednesday => 3,
            DayOfWeek::Thursday => 4,
            DayOfWeek::Friday => 5,
            DayOfWeek::Saturday => 6,
            DayOfWeek::Sunday => 7,
        }
    }

    /// Zero-based index into a Monday-first array.
    pub fn index(&self) -> usize {
        (self.number() - 1) as usize
    }

    /// Two-letter label used on the chart axis and day picker.
    pub fn abbrev(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Mo",
            DayOfWeek::Tuesday => "Tu",
            DayOfWeek::Wednesday => "We",
            DayOfWeek::Thursday => "Th",
            DayOfWeek::Friday => "Fr",
            DayOfWeek::Saturday => "Sa",
            DayOfWeek::Sunday => "Su",
        }
    }

    /// Today's weekday from the local clock.
    pub fn today() -> Self {
        match Local::now().weekday() {
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
            chrono::Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number_accepts_all_valid_days() {
        for number in 1..=7 {
            let day = DayOfWeek::from_number(number).unwrap();
            assert_eq!(day.number(), number);
        }
    }

    #[test]
    fn test_from_number_rejects_out_of_range() {
        assert!(DayOfWeek::from_number(0).is_err());
        assert!(DayOfWeek::from_number(8).is_err());
        assert!(DayOfWeek::from_number(u32::MAX).is_err());
    }

    #[test]
    fn test_index_matches_monday_first_order() {
        for (expected_index, day) in DayOfWeek::ALL.iter().enumerate() {
            assert_eq!(day.index(), expected_index);
        }
    }

    #[test]
    fn test_abbrevs_are_monday_first() {
        let abbrevs: Vec<&str> = DayOfWeek::ALL.iter().map(|d| d.abbrev()).collect();
        assert_eq!(abbrevs, vec!["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);
    }

    #[test]
    fn test_today_is_a_valid_day() {
        let today = DayOfWeek::today();
        assert!((1..=7).contains(&today.number()));
    }
}
