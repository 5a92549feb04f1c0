//! Distance-based dab emission
//!
//! Converts drag input into dabs by accumulating traveled distance, so the
//! spacing along a stroke is exact no matter how the input is chunked (fast
//! vs. slow motion, variable polling rate). A naive one-dab-per-event
//! strategy produces gappy or clumped strokes at high or low input rates.

use super::{Dab, DabsConfig};
use crate::geometry::Point;

/// Per-stroke dab placement state
///
/// Created at drag start, discarded at drag end. Leftover distance below
/// one spacing step is carried over to the next input event, never dropped.
/// `last_point` tracks the most recently processed position (the latest dab
/// while consuming a segment, the segment end afterwards); together with
/// `carry_over_distance` it pins down exactly how far along the stroke the
/// next dab is due.
#[derive(Debug)]
pub struct DabsStrategy {
    config: DabsConfig,
    radius: f64,
    last_point: Point,
    carry_over_distance: f64,
}

impl DabsStrategy {
    /// A fresh strategy for one stroke
    ///
    /// Panics on a non-positive radius; the radius comes from brush
    /// settings that were validated long before a stroke starts.
    pub fn new(config: DabsConfig, radius: f64) -> Self {
        assert!(radius > 0.0, "brush radius must be positive");
        Self {
            config,
            radius,
            last_point: Point::default(),
            carry_over_distance: 0.0,
        }
    }

    /// Center-to-center spacing in image pixels at the current radius
    fn step(&self) -> f64 {
        self.config.spacing_ratio * self.radius
    }

    /// Whether the stamp must be set up again before every dab
    pub fn needs_stamp_refresh(&self) -> bool {
        self.config.refresh_each_dab
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Change the radius; affects subsequent placements only
    pub fn set_radius(&mut self, radius: f64) {
        assert!(radius > 0.0, "brush radius must be positive");
        self.radius = radius;
    }

    /// Begin a stroke: re-arm the state and place one dab at the start
    ///
    /// There is no direction of travel yet, so the first dab of even an
    /// angle-aware stroke has angle 0.
    pub fn on_drag_start(&mut self, x: f64, y: f64) -> Dab {
        self.last_point = Point::new(x, y);
        self.carry_over_distance = 0.0;
        Dab { x, y, angle: 0.0 }
    }

    /// Consume one drag movement and return the dabs it completes
    ///
    /// Dabs are placed every `spacing_ratio * radius` along the path from
    /// the last placed dab; distance not consumed by a dab is carried over
    /// to the next call.
    pub fn on_new_point(&mut self, x: f64, y: f64) -> Vec<Dab> {
        let target = Point::new(x, y);
        let step = self.step();
        let mut remaining = self.last_point.distance_to(target);
        let mut dabs = Vec::new();

        while self.carry_over_distance + remaining >= step {
            // the carried distance counts toward this dab's spacing
            let needed = step - self.carry_over_distance;
            let t = needed / remaining;
            let center = self.last_point.lerp(target, t);
            let angle = if self.config.angle_aware {
                self.last_point.angle_to(target)
            } else {
                0.0
            };
            dabs.push(Dab {
                x: center.x,
                y: center.y,
                angle,
            });
            remaining -= needed;
            self.carry_over_distance = 0.0;
            self.last_point = center;
        }

        // distance not consumed by a dab still counts as traveled; the next
        // event measures from the segment end, not from the last dab
        self.carry_over_distance += remaining;
        self.last_point = target;
        dabs
    }
}
