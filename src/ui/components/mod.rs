//! # UI Components Module
//!
//! This module organizes all UI components for the goal tracker application.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `chart` - Weekly progress chart data preparation and rendering
//! - `header` - Application header with the progress readout
//! - `modals` - Modal dialogs and popup interfaces
//! - `styling` - Visual styling, colors, and theme management
//!
//! ## Architecture:
//! The components are organized to promote reusability and maintainability.
//! Each module has a clear responsibility and minimal dependencies on others.

pub mod chart;
pub mod header;
pub mod modals;
pub mod styling;

pub use styling::setup_tracker_style;
