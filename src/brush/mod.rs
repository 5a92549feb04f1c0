//! Brush dab placement
//!
//! A stroke is a continuous sequence of pointer positions; the rasterizer
//! wants discrete, evenly spaced stamp placements. This module converts one
//! into the other. Compositing the stamp onto pixels is the embedding
//! shell's business.

pub mod dabs;

pub use dabs::DabsStrategy;

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// A single brush stamp placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dab {
    /// Center X position, image space
    pub x: f64,
    /// Center Y position, image space
    pub y: f64,
    /// Stamp rotation in radians; the angle of travel for angle-aware
    /// brushes, 0 otherwise
    pub angle: f64,
}

/// Per-stroke dab placement configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DabsConfig {
    /// Dab center-to-center spacing as a fraction of the brush radius
    pub spacing_ratio: f64,
    /// Whether dabs rotate to follow the direction of travel
    pub angle_aware: bool,
    /// Whether the stamp must be rebuilt before each dab rather than once
    /// per stroke
    pub refresh_each_dab: bool,
}

impl DabsConfig {
    /// Validated configuration; the spacing ratio must be positive and
    /// finite
    pub fn new(spacing_ratio: f64, angle_aware: bool, refresh_each_dab: bool) -> Result<Self, Error> {
        if !(spacing_ratio > 0.0 && spacing_ratio.is_finite()) {
            return Err(Error::InvalidSpacing(spacing_ratio));
        }
        Ok(Self {
            spacing_ratio,
            angle_aware,
            refresh_each_dab,
        })
    }
}

impl Default for DabsConfig {
    fn default() -> Self {
        Self {
            spacing_ratio: 0.25,
            angle_aware: false,
            refresh_each_dab: false,
        }
    }
}
