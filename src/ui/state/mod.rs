//! UI-side state, kept free of egui types so it stays unit testable.

pub mod modal_state;
pub mod ui_state;

pub use modal_state::{
    GoalFormState, ModalState, NoticeKind, ProgressEntryStage, ProgressFormState,
};
pub use ui_state::UIState;
