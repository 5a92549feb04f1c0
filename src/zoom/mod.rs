//! Zoom level model
//!
//! The discrete zoom ladder and the automatic fit-zoom policies built on it.

pub mod auto;
pub mod level;

pub use auto::AutoZoom;
pub use level::{random_level, ZoomLevel};
