//! Domain logic, independent of any UI concerns.

pub mod models;
pub mod session_service;

pub use session_service::SessionService;
