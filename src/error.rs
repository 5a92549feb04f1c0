//! Crate error type
//!
//! Only boundary validation is recoverable: sizes and ratios coming from an
//! embedding shell are checked before they enter the engine. Programming
//! errors inside the engine (bad ladder index, non-positive radius) panic
//! instead of being clamped, so upstream coordinate bugs stay visible.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Canvas dimensions must be at least 1×1 image pixel
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    /// Dab spacing ratio must be positive
    #[error("invalid dab spacing ratio {0}")]
    InvalidSpacing(f64),

    /// The UI-thread inbox was dropped while background work was running
    #[error("UI thread inbox is gone")]
    UiThreadGone,
}
