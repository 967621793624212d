//! # Modal State Module
//!
//! This module contains all state related to modal dialogs and their
//! visibility.
//!
//! ## Responsibilities:
//! - Modal visibility flags
//! - The two-stage progress entry flow (pick a day, then enter units)
//! - Form input buffers and their validation
//!
//! ## Purpose:
//! Centralizing modal state keeps the dialog flows coordinated: at most one
//! dialog is ever visible, and cancelling always leaves session state
//! untouched.

use crate::backend::domain::models::day_of_week::DayOfWeek;

/// Stages of the progress entry flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEntryStage {
    /// Picking which day to record
    Day,
    /// Entering the units completed on the picked day
    Units,
}

/// One-button informational dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// First-run greeting; dismissing it leads into goal entry
    Welcome,
    /// Shown after a confirmed reset
    ResetComplete,
}

/// Form state for the weekly goal dialog
#[derive(Debug)]
pub struct GoalFormState {
    /// Goal input (as text for validation)
    pub goal_text: String,
    /// Parsed goal value, present only while the input is valid
    pub goal: Option<u32>,
    /// Validation error shown inline
    pub goal_error: Option<String>,
}

impl GoalFormState {
    pub fn new() -> Self {
        Self {
            goal_text: String::new(),
            goal: None,
            goal_error: None,
        }
    }

    pub fn clear(&mut self) {
        self.goal_text.clear();
        self.goal = None;
        self.goal_error = None;
    }

    /// Validate the input and return true if it parses.
    pub fn validate(&mut self) -> bool {
        match parse_units(&self.goal_text) {
            Ok(value) => {
                self.goal = Some(value);
                self.goal_error = None;
                true
            }
            Err(message) => {
                self.goal = None;
                self.goal_error = Some(message);
                false
            }
        }
    }

    /// Check if the form can be submitted.
    pub fn can_submit(&self) -> bool {
        !self.goal_text.trim().is_empty() && self.goal.is_some() && self.goal_error.is_none()
    }
}

/// Form state for the two-stage progress entry dialog
#[derive(Debug)]
pub struct ProgressFormState {
    /// Current stage of the flow
    pub stage: ProgressEntryStage,
    /// Day being recorded; starts on today's weekday
    pub selected_day: DayOfWeek,
    /// Units input (as text for validation)
    pub units_text: String,
    /// Parsed units value, present only while the input is valid
    pub units: Option<u32>,
    /// Validation error shown inline
    pub units_error: Option<String>,
}

impl ProgressFormState {
    pub fn new() -> Self {
        Self {
            stage: ProgressEntryStage::Day,
            selected_day: DayOfWeek::today(),
            units_text: String::new(),
            units: None,
            units_error: None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Pick a day and advance to the units stage.
    pub fn select_day(&mut self, day: DayOfWeek) {
        self.selected_day = day;
        self.stage = ProgressEntryStage::Units;
    }

    /// Return to the day stage, dropping any units input.
    pub fn back_to_day_stage(&mut self) {
        self.stage = ProgressEntryStage::Day;
        self.units_text.clear();
        self.units = None;
        self.units_error = None;
    }

    /// Validate the units input and return true if it parses.
    pub fn validate(&mut self) -> bool {
        match parse_units(&self.units_text) {
            Ok(value) => {
                self.units = Some(value);
                self.units_error = None;
                true
            }
            Err(message) => {
                self.units = None;
                self.units_error = Some(message);
                false
            }
        }
    }

    /// Check if the units form can be submitted.
    pub fn can_submit(&self) -> bool {
        self.stage == ProgressEntryStage::Units
            && !self.units_text.trim().is_empty()
            && self.units.is_some()
            && self.units_error.is_none()
    }
}

/// Parse a non-negative whole number from user input.
///
/// Signed or fractional input is rejected rather than clamped, so a typed
/// minus sign surfaces as a validation error instead of silently becoming
/// zero.
fn parse_units(text: &str) -> Result<u32, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("Please enter a number".to_string());
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| "Please enter a whole number (0 or more)".to_string())
}

/// Modal visibility and modal-specific state
#[derive(Debug)]
pub struct ModalState {
    /// Whether the weekly goal dialog is visible
    pub show_goal_modal: bool,

    /// Whether the progress entry dialog is visible
    pub show_progress_modal: bool,

    /// Whether the reset confirmation dialog is visible
    pub show_reset_confirm: bool,

    /// Informational notice currently shown, if any
    pub active_notice: Option<NoticeKind>,

    /// Weekly goal form state
    pub goal_form: GoalFormState,

    /// Progress entry form state
    pub progress_form: ProgressFormState,
}

impl ModalState {
    /// Create new modal state with all dialogs hidden
    pub fn new() -> Self {
        Self {
            show_goal_modal: false,
            show_progress_modal: false,
            show_reset_confirm: false,
            active_notice: None,
            goal_form: GoalFormState::new(),
            progress_form: ProgressFormState::new(),
        }
    }

    /// Whether any dialog is currently visible
    pub fn has_active_modal(&self) -> bool {
        self.show_goal_modal
            || self.show_progress_modal
            || self.show_reset_confirm
            || self.active_notice.is_some()
    }

    /// Hide all dialogs and drop any form input
    pub fn hide_all_modals(&mut self) {
        self.show_goal_modal = false;
        self.show_progress_modal = false;
        self.show_reset_confirm = false;
        self.active_notice = None;
        self.goal_form.clear();
        self.progress_form.clear();
    }

    /// Open the weekly goal dialog with a fresh form
    pub fn open_goal_modal(&mut self) {
        self.hide_all_modals();
        self.goal_form.clear();
        self.show_goal_modal = true;
    }

    /// Open the progress entry dialog at the day stage
    pub fn open_progress_modal(&mut self) {
        self.hide_all_modals();
        self.progress_form.clear();
        self.show_progress_modal = true;
    }

    /// Open the reset confirmation dialog
    pub fn open_reset_confirm(&mut self) {
        self.hide_all_modals();
        self.show_reset_confirm = true;
    }

    /// Show an informational notice
    pub fn show_notice(&mut self, notice: NoticeKind) {
        self.hide_all_modals();
        self.active_notice = Some(notice);
    }

    /// Dismiss the active dialog. The welcome notice leads into goal entry
    /// exactly like its OK button; every other dialog just closes.
    pub fn dismiss_active_modal(&mut self) {
        if self.active_notice == Some(NoticeKind::Welcome) {
            self.open_goal_modal();
        } else {
            self.hide_all_modals();
        }
    }
}
