//! Weekly progress chart: data preparation and rendering.

pub mod data_preparation;
pub mod renderer;
