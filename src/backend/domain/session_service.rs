//! Session lifecycle and mutations for the weekly goal tracker.
//!
//! This module contains the core business logic for the tracked week:
//! loading or initializing the session at startup, applying user actions,
//! and persisting every change.
//!
//! ## Business Rules
//!
//! - A missing data file at startup is the first-run signal, not an error
//! - An existing but unreadable or malformed data file is an error; starting
//!   over would clobber the user's data on the next save
//! - Recording progress for a day replaces that day's value, so a mis-entry
//!   is corrected by entering the right number again
//! - Every mutation persists immediately

use anyhow::Result;
use log::info;

use crate::backend::domain::models::day_of_week::DayOfWeek;
use crate::backend::domain::models::session::Session;
use crate::backend::storage::json::SessionRepository;

/// Service owning the in-memory session and its persistence.
pub struct SessionService {
    repository: SessionRepository,
    session: Session,
    first_run: bool,
}

impl SessionService {
    /// Load the persisted session, or start fresh when no data file exists.
    pub fn new(repository: SessionRepository) -> Result<Self> {
        if repository.exists() {
            let session = repository.load()?;
            info!("Loaded session from {:?}", repository.data_file_path());
            Ok(Self {
                repository,
                session,
                first_run: false,
            })
        } else {
            info!(
                "No session file at {:?}, starting a fresh session",
                repository.data_file_path()
            );
            Ok(Self {
                repository,
                session: Session::default(),
                first_run: true,
            })
        }
    }

    /// Current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether this run started without a persisted session.
    pub fn is_first_run(&self) -> bool {
        self.first_run
    }

    /// Set the weekly goal, keeping daily progress, and persist.
    pub fn set_weekly_goal(&mut self, goal: u32) -> Result<()> {
        self.session.weekly_goal = goal;
        self.repository.save(&self.session)?;
        info!("Weekly goal set to {}", goal);
        Ok(())
    }

    /// Record the units completed on a day, replacing any previous value
    /// for that day, and persist.
    pub fn record_progress(&mut self, day: DayOfWeek, units: u32) -> Result<()> {
        self.session.daily_progress[day.index()] = units;
        self.repository.save(&self.session)?;
        info!("Recorded {} units for day {} ({})", units, day.number(), day.abbrev());
        Ok(())
    }

    /// Clear the goal and all daily progress, and persist.
    pub fn reset(&mut self) -> Result<()> {
        self.session = Session::default();
        self.repository.save(&self.session)?;
        info!("Session reset");
        Ok(())
    }

    /// Persist the current session unchanged. Used at shutdown.
    pub fn save(&self) -> Result<()> {
        self.repository.save(&self.session)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_service() -> (SessionService, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repository = SessionRepository::new(temp_dir.path());
        let service = SessionService::new(repository).expect("Failed to create service");
        (service, temp_dir)
    }

    #[test]
    fn test_first_run_starts_with_default_session() {
        let (service, _temp_dir) = setup_test_service();

        assert!(service.is_first_run());
        assert_eq!(service.session(), &Session::default());
    }

    #[test]
    fn test_first_run_does_not_write_a_file() {
        let (service, temp_dir) = setup_test_service();

        assert!(service.is_first_run());
        assert!(!SessionRepository::new(temp_dir.path()).exists());
    }

    #[test]
    fn test_second_run_loads_saved_session() {
        let (mut service, temp_dir) = setup_test_service();
        service.set_weekly_goal(70).unwrap();
        service.record_progress(DayOfWeek::Wednesday, 12).unwrap();

        // Create a new service instance (simulating app restart)
        let service2 = SessionService::new(SessionRepository::new(temp_dir.path())).unwrap();
        assert!(!service2.is_first_run());
        assert_eq!(service2.session().weekly_goal, 70);
        assert_eq!(service2.session().daily_progress[2], 12);
    }

    #[test]
    fn test_set_weekly_goal_keeps_daily_progress() {
        let (mut service, _temp_dir) = setup_test_service();

        service.record_progress(DayOfWeek::Monday, 5).unwrap();
        service.set_weekly_goal(40).unwrap();

        assert_eq!(service.session().weekly_goal, 40);
        assert_eq!(service.session().daily_progress[0], 5);
    }

    #[test]
    fn test_record_progress_overwrites_previous_value() {
        let (mut service, _temp_dir) = setup_test_service();

        service.record_progress(DayOfWeek::Friday, 10).unwrap();
        service.record_progress(DayOfWeek::Friday, 3).unwrap();

        assert_eq!(service.session().daily_progress[4], 3);
        assert_eq!(service.session().total_progress(), 3);
    }

    #[test]
    fn test_record_progress_targets_the_right_slot() {
        let (mut service, _temp_dir) = setup_test_service();

        service.record_progress(DayOfWeek::Sunday, 7).unwrap();

        let mut expected = [0u32; 7];
        expected[6] = 7;
        assert_eq!(service.session().daily_progress, expected);
    }

    #[test]
    fn test_mutations_persist_immediately() {
        let (mut service, temp_dir) = setup_test_service();

        service.set_weekly_goal(25).unwrap();

        let repo = SessionRepository::new(temp_dir.path());
        assert_eq!(repo.load().unwrap().weekly_goal, 25);
    }

    #[test]
    fn test_reset_clears_goal_and_progress() {
        let (mut service, temp_dir) = setup_test_service();
        service.set_weekly_goal(70).unwrap();
        service.record_progress(DayOfWeek::Tuesday, 9).unwrap();

        service.reset().unwrap();

        assert_eq!(service.session(), &Session::default());
        // The reset state is persisted, not just in memory
        let repo = SessionRepository::new(temp_dir.path());
        assert_eq!(repo.load().unwrap(), Session::default());
    }

    #[test]
    fn test_save_persists_without_mutating() {
        let (mut service, temp_dir) = setup_test_service();
        service.set_weekly_goal(15).unwrap();
        service.record_progress(DayOfWeek::Monday, 2).unwrap();
        let before = service.session().clone();

        service.save().unwrap();

        assert_eq!(service.session(), &before);
        let repo = SessionRepository::new(temp_dir.path());
        assert_eq!(repo.load().unwrap(), before);
    }

    #[test]
    fn test_save_on_first_run_ends_first_run_state() {
        let (service, temp_dir) = setup_test_service();
        assert!(service.is_first_run());

        // Exit save persists the defaults, so the next launch loads them
        service.save().unwrap();

        let service2 = SessionService::new(SessionRepository::new(temp_dir.path())).unwrap();
        assert!(!service2.is_first_run());
        assert_eq!(service2.session(), &Session::default());
    }

    #[test]
    fn test_malformed_file_fails_startup() {
        let temp_dir = TempDir::new().unwrap();
        let repository = SessionRepository::new(temp_dir.path());
        std::fs::write(repository.data_file_path(), "not a session").unwrap();

        let result = SessionService::new(repository);
        assert!(result.is_err());
    }
}
