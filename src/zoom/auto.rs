//! Automatic fit-zoom selection
//!
//! Picks the ladder rung that best fits a canvas into the available screen
//! area, used when a view opens or the user asks to fit the image.

use super::level::ZoomLevel;

/// Fit policy for automatic zoom selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoZoom {
    /// Fit the whole canvas into the available area
    FitSpace,
    /// Fit the canvas width only
    FitWidth,
    /// Fit the canvas height only
    FitHeight,
    /// 100%, one image pixel per screen pixel
    Actual,
}

impl AutoZoom {
    /// The largest ladder rung whose scale keeps the canvas within the
    /// available area under this policy
    ///
    /// With `allow_zoom_in` false the result is capped at 100%, so a small
    /// image is never enlarged just because there is room for it.
    pub fn calc_zoom(
        &self,
        im_width: u32,
        im_height: u32,
        available_width: f64,
        available_height: f64,
        allow_zoom_in: bool,
    ) -> ZoomLevel {
        assert!(im_width > 0 && im_height > 0, "canvas size must be nonzero");

        let horizontal = available_width / im_width as f64;
        let vertical = available_height / im_height as f64;
        let mut ideal = match self {
            AutoZoom::FitSpace => horizontal.min(vertical),
            AutoZoom::FitWidth => horizontal,
            AutoZoom::FitHeight => vertical,
            AutoZoom::Actual => 1.0,
        };
        if !allow_zoom_in {
            ideal = ideal.min(1.0);
        }

        let mut best = ZoomLevel::at(0);
        for level in ZoomLevel::all() {
            if level.view_scale() <= ideal + 1e-9 {
                best = level;
            }
        }
        best
    }
}
