//! Domain model types shared across services and the UI.

pub mod day_of_week;
pub mod session;

pub use day_of_week::{DayOfWeek, DayOfWeekError};
pub use session::Session;
