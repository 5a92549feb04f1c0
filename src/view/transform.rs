//! Component/image coordinate transform
//!
//! Each view maps between component (screen) space and image (canvas) space
//! through a scale plus a centering offset. The forward and inverse affine
//! forms are cached and rebuilt lazily; every mutator invalidates both
//! caches before returning, so a stale transform can never be observed.

use crate::geometry::{Affine, Point, Rect};

/// Lazily rebuilt affine, with an explicit dirty state
///
/// An explicit tag instead of "null means dirty" keeps every invalidation
/// site auditable.
#[derive(Debug, Clone, Copy)]
enum Cache {
    Dirty,
    Valid(Affine),
}

/// Mapping between component space and image space for one view
#[derive(Debug)]
pub struct ViewTransform {
    view_width: f64,
    view_height: f64,
    canvas_co_width: f64,
    canvas_co_height: f64,
    /// Top-left of the canvas within the view; negative when the zoomed
    /// canvas is larger than the view
    offset_x: f64,
    offset_y: f64,
    view_scale: f64,
    im_to_co: Cache,
    co_to_im: Cache,
}

impl ViewTransform {
    pub fn new() -> Self {
        Self {
            view_width: 0.0,
            view_height: 0.0,
            canvas_co_width: 0.0,
            canvas_co_height: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            view_scale: 1.0,
            im_to_co: Cache::Dirty,
            co_to_im: Cache::Dirty,
        }
    }

    /// The view (widget) was resized
    pub fn set_view_size(&mut self, width: f64, height: f64) {
        self.view_width = width;
        self.view_height = height;
        self.update_offset();
        self.invalidate();
    }

    /// The zoomed canvas size changed (zoom or canvas resize)
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_co_width = width;
        self.canvas_co_height = height;
        self.update_offset();
        self.invalidate();
    }

    /// The view scale changed; the offset is size-derived and untouched here
    pub fn set_scale(&mut self, scale: f64) {
        assert!(scale > 0.0, "view scale must be positive");
        self.view_scale = scale;
        self.invalidate();
    }

    /// Centers the canvas when the view is larger than it
    fn update_offset(&mut self) {
        self.offset_x = (self.view_width - self.canvas_co_width) / 2.0;
        self.offset_y = (self.view_height - self.canvas_co_height) / 2.0;
    }

    fn invalidate(&mut self) {
        self.im_to_co = Cache::Dirty;
        self.co_to_im = Cache::Dirty;
    }

    pub fn view_scale(&self) -> f64 {
        self.view_scale
    }

    pub fn canvas_offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    pub fn view_size(&self) -> (f64, f64) {
        (self.view_width, self.view_height)
    }

    pub fn component_x_to_image(&self, x: f64) -> f64 {
        (x - self.offset_x) / self.view_scale
    }

    pub fn component_y_to_image(&self, y: f64) -> f64 {
        (y - self.offset_y) / self.view_scale
    }

    pub fn image_x_to_component(&self, x: f64) -> f64 {
        self.offset_x + x * self.view_scale
    }

    pub fn image_y_to_component(&self, y: f64) -> f64 {
        self.offset_y + y * self.view_scale
    }

    pub fn component_to_image(&self, p: Point) -> Point {
        Point::new(self.component_x_to_image(p.x), self.component_y_to_image(p.y))
    }

    pub fn image_to_component(&self, p: Point) -> Point {
        Point::new(self.image_x_to_component(p.x), self.image_y_to_component(p.y))
    }

    /// Rect conversion; width/height scale without the offset
    pub fn component_to_image_rect(&self, r: Rect) -> Rect {
        Rect::new(
            self.component_x_to_image(r.x),
            self.component_y_to_image(r.y),
            r.width / self.view_scale,
            r.height / self.view_scale,
        )
    }

    /// Rect conversion; width/height scale without the offset
    pub fn image_to_component_rect(&self, r: Rect) -> Rect {
        Rect::new(
            self.image_x_to_component(r.x),
            self.image_y_to_component(r.y),
            r.width * self.view_scale,
            r.height * self.view_scale,
        )
    }

    /// Conversion against a caller-supplied scale with the current offset,
    /// used to record a zoom anchor under the outgoing zoom level
    pub fn component_to_image_with_scale(&self, p: Point, scale: f64) -> Point {
        Point::new((p.x - self.offset_x) / scale, (p.y - self.offset_y) / scale)
    }

    /// Inverse of [`Self::component_to_image_with_scale`]
    pub fn image_to_component_with_scale(&self, p: Point, scale: f64) -> Point {
        Point::new(self.offset_x + p.x * scale, self.offset_y + p.y * scale)
    }

    /// The cached image-to-component affine: translate(offset), then scale
    pub fn forward_transform(&mut self) -> Affine {
        if let Cache::Valid(t) = self.im_to_co {
            return t;
        }
        let t = Affine::identity()
            .translate(self.offset_x, self.offset_y)
            .scale(self.view_scale, self.view_scale);
        self.im_to_co = Cache::Valid(t);
        t
    }

    /// The cached component-to-image affine: scale(1/s), then translate(-offset)
    pub fn inverse_transform(&mut self) -> Affine {
        if let Cache::Valid(t) = self.co_to_im {
            return t;
        }
        let s = 1.0 / self.view_scale;
        let t = Affine::identity()
            .scale(s, s)
            .translate(-self.offset_x, -self.offset_y);
        self.co_to_im = Cache::Valid(t);
        t
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point, b: Point, tolerance: f64) {
        assert!(
            (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance,
            "{a:?} != {b:?}"
        );
    }

    fn transform_at(view: (f64, f64), canvas_co: (f64, f64), scale: f64) -> ViewTransform {
        let mut t = ViewTransform::new();
        t.set_view_size(view.0, view.1);
        t.set_canvas_size(canvas_co.0, canvas_co.1);
        t.set_scale(scale);
        t
    }

    #[test]
    fn test_offset_centers_smaller_canvas() {
        let t = transform_at((800.0, 600.0), (500.0, 400.0), 1.0);
        assert_eq!(t.canvas_offset(), (150.0, 100.0));
    }

    #[test]
    fn test_offset_goes_negative_for_larger_canvas() {
        let t = transform_at((800.0, 600.0), (1000.0, 1000.0), 1.0);
        assert_eq!(t.canvas_offset(), (-100.0, -200.0));
    }

    #[test]
    fn test_point_round_trip() {
        for &scale in &[0.125, 0.5, 1.0, 1.414213562373095, 16.0] {
            let t = transform_at((800.0, 600.0), (1000.0 * scale, 700.0 * scale), scale);
            for &p in &[
                Point::new(0.0, 0.0),
                Point::new(123.456, 789.012),
                Point::new(-50.0, 1200.0),
            ] {
                let back = t.image_to_component(t.component_to_image(p));
                let tolerance = 1e-9 * (1.0 + p.x.abs().max(p.y.abs()));
                assert_close(back, p, tolerance);
            }
        }
    }

    #[test]
    fn test_rect_size_scales_without_offset() {
        let t = transform_at((800.0, 600.0), (400.0, 400.0), 2.0);
        let r = t.image_to_component_rect(Rect::new(10.0, 10.0, 50.0, 25.0));
        assert_eq!(r.width, 100.0);
        assert_eq!(r.height, 50.0);

        let back = t.component_to_image_rect(r);
        assert_close(Point::new(back.width, back.height), Point::new(50.0, 25.0), 1e-9);
    }

    #[test]
    fn test_cached_transforms_match_scalar_helpers() {
        let mut t = transform_at((800.0, 600.0), (250.0, 250.0), 2.5);
        let p = Point::new(40.0, 70.0);

        let forward = t.forward_transform().apply(p);
        assert_close(forward, t.image_to_component(p), 1e-12);

        let inverse = t.inverse_transform().apply(forward);
        assert_close(inverse, p, 1e-9);
    }

    #[test]
    fn test_mutators_invalidate_both_caches() {
        let mut t = transform_at((800.0, 600.0), (400.0, 400.0), 1.0);
        let before = t.forward_transform();
        let _ = t.inverse_transform();

        t.set_scale(2.0);
        let after = t.forward_transform();
        assert_ne!(before, after);
        // the rebuilt inverse must undo the rebuilt forward
        let p = Point::new(33.0, 44.0);
        assert_close(t.inverse_transform().apply(after.apply(p)), p, 1e-9);

        let before = after;
        t.set_view_size(900.0, 600.0);
        assert_ne!(before, t.forward_transform());

        let before = t.forward_transform();
        t.set_canvas_size(500.0, 500.0);
        assert_ne!(before, t.forward_transform());
    }

    #[test]
    fn test_with_scale_variants_use_current_offset() {
        let t = transform_at((800.0, 600.0), (1000.0, 1000.0), 1.0);
        let anchor = Point::new(400.0, 300.0);
        let im = t.component_to_image_with_scale(anchor, 1.0);
        assert_eq!(im, Point::new(500.0, 500.0));

        let back = t.image_to_component_with_scale(im, 2.0);
        assert_eq!(back, Point::new(900.0, 800.0));
    }
}
