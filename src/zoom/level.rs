//! The zoom ladder - fixed table of discrete zoom levels
//!
//! Zoom steps follow a geometric progression (factor sqrt(2) between
//! adjacent rungs) so repeated zoom-in/zoom-out actions feel perceptually
//! uniform. The percent values are reproduced literally; approximating them
//! would break visual parity of the derived rendering parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Percent value and display name for each rung, ordered ascending
const LADDER: [(f64, &str); 19] = [
    (12.5, "12.5%"),
    (17.677669529663688, "17.7%"),
    (25.0, "25%"),
    (35.35533905932738, "35.3%"),
    (50.0, "50%"),
    (70.71067811865476, "70.7%"),
    (100.0, "100%"),
    (141.4213562373095, "141.4%"),
    (200.0, "200%"),
    (282.842712474619, "282.8%"),
    (400.0, "400%"),
    (565.685424949238, "565.7%"),
    (800.0, "800%"),
    (1131.370849898476, "1131.4%"),
    (1600.0, "1600%"),
    (2262.741699796952, "2262.7%"),
    (3200.0, "3200%"),
    (4525.483399593904, "4525.5%"),
    (6400.0, "6400%"),
];

/// One rung of the zoom ladder
///
/// A `ZoomLevel` is an index into the fixed table; the derived values
/// (`view_scale`, grid visibility, stroke widths) are pure functions of the
/// percent value. The ladder is totally ordered and navigation saturates at
/// both ends.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct ZoomLevel(usize);

impl ZoomLevel {
    /// The 100% rung, the default for a fresh view
    pub const Z100: ZoomLevel = ZoomLevel(6);

    /// Number of rungs in the ladder
    pub const COUNT: usize = LADDER.len();

    /// The rung at `index`
    ///
    /// Panics on an out-of-range index; an invalid index is a programming
    /// error, not a recoverable condition.
    pub fn at(index: usize) -> Self {
        assert!(index < Self::COUNT, "zoom ladder index {index} out of range");
        ZoomLevel(index)
    }

    /// Index of this rung in the ladder
    pub fn index(&self) -> usize {
        self.0
    }

    /// The next rung up, saturating at the maximum
    pub fn zoom_in(&self) -> Self {
        ZoomLevel((self.0 + 1).min(Self::COUNT - 1))
    }

    /// The next rung down, saturating at the minimum
    pub fn zoom_out(&self) -> Self {
        ZoomLevel(self.0.saturating_sub(1))
    }

    /// Display scale as a percentage
    pub fn percent(&self) -> f64 {
        LADDER[self.0].0
    }

    /// Scale factor applied to image-space coordinates
    pub fn view_scale(&self) -> f64 {
        self.percent() / 100.0
    }

    /// Whether the view is magnified enough to draw a per-pixel grid
    pub fn allows_pixel_grid(&self) -> bool {
        self.percent() > 1500.0
    }

    /// Width of the outer selection stroke, compensated for zoom
    pub fn outer_stroke_width(&self) -> f64 {
        300.0 / self.percent()
    }

    /// Width of the inner selection stroke, compensated for zoom
    pub fn inner_stroke_width(&self) -> f64 {
        100.0 / self.percent()
    }

    /// Iterate over every rung, ascending
    pub fn all() -> impl Iterator<Item = ZoomLevel> {
        (0..Self::COUNT).map(ZoomLevel)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::Z100
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(LADDER[self.0].1)
    }
}

impl TryFrom<usize> for ZoomLevel {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < Self::COUNT {
            Ok(ZoomLevel(index))
        } else {
            Err(format!("zoom ladder index {index} out of range"))
        }
    }
}

impl From<ZoomLevel> for usize {
    fn from(level: ZoomLevel) -> usize {
        level.0
    }
}

/// A uniformly chosen rung, for randomized tests
pub fn random_level() -> ZoomLevel {
    let mut x = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x9e37_79b9_7f4a_7c15);
    // xorshift64; the seed only needs to vary between calls
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    ZoomLevel((x % ZoomLevel::COUNT as u64) as usize)
}
