//! Headless chart rendering

pub mod chart;

pub use chart::{render_chart, RenderConfig, RenderError};
