//! Storage layer for persisting session data.

pub mod json;
