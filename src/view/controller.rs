//! View/canvas controller
//!
//! Owns one canvas, one coordinate transform and one zoom level, and reacts
//! to resize and zoom events. Zoom changes re-center the viewport so the
//! image content under the anchor (mouse position, or viewport center) stays
//! under it after the scale change.

use crate::error::Error;
use crate::exec::UiThread;
use crate::geometry::{Point, Rect, Region};
use crate::view::canvas::Canvas;
use crate::view::events::{ViewEvent, ViewSink, Viewport};
use crate::view::transform::ViewTransform;
use crate::zoom::{AutoZoom, ZoomLevel};
use std::marker::PhantomData;

/// Component-space pixel-grid line positions covering the visible area
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    /// x positions of vertical lines, one per image-pixel column boundary
    pub vertical: Vec<f64>,
    /// y positions of horizontal lines, one per image-pixel row boundary
    pub horizontal: Vec<f64>,
}

/// One open image view
///
/// Constructed with a [`UiThread`] token and `!Send`: all state transitions
/// run on the claiming thread, which is what makes the lock-free interior
/// sound.
#[derive(Debug)]
pub struct View {
    canvas: Canvas,
    transform: ViewTransform,
    zoom_level: ZoomLevel,
    _not_send: PhantomData<*const ()>,
}

impl View {
    /// A view of the given canvas at 100%
    ///
    /// The transform knows the canvas size immediately; the view size
    /// arrives with the first [`Self::on_resize`].
    pub fn new(canvas: Canvas, _ui: &UiThread) -> Self {
        let mut transform = ViewTransform::new();
        transform.set_canvas_size(canvas.co_width() as f64, canvas.co_height() as f64);
        Self {
            canvas,
            transform,
            zoom_level: ZoomLevel::Z100,
            _not_send: PhantomData,
        }
    }

    pub fn zoom_level(&self) -> ZoomLevel {
        self.zoom_level
    }

    pub fn view_scale(&self) -> f64 {
        self.transform.view_scale()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    /// Mutable access, for the lazily rebuilt cached affines
    pub fn transform_mut(&mut self) -> &mut ViewTransform {
        &mut self.transform
    }

    /// The view widget was resized; the zoom level never changes here
    pub fn on_resize(&mut self, width: f64, height: f64, sink: &mut impl ViewSink) {
        self.transform.set_view_size(width, height);
        sink.emit(ViewEvent::Repaint);
    }

    /// External collaborators changed the canvas image-pixel size
    pub fn canvas_size_changed(
        &mut self,
        im_width: u32,
        im_height: u32,
        sink: &mut impl ViewSink,
    ) -> Result<(), Error> {
        self.canvas.resize(im_width, im_height, self.transform.view_scale())?;
        self.transform
            .set_canvas_size(self.canvas.co_width() as f64, self.canvas.co_height() as f64);
        sink.emit(ViewEvent::Repaint);
        Ok(())
    }

    /// Step one rung up the ladder, anchored at `anchor` (or the viewport
    /// center); a no-op at the top
    pub fn zoom_in(
        &mut self,
        anchor: Option<Point>,
        viewport: &impl Viewport,
        sink: &mut impl ViewSink,
    ) {
        self.set_zoom(self.zoom_level.zoom_in(), false, anchor, viewport, sink);
    }

    /// Step one rung down the ladder; a no-op at the bottom
    pub fn zoom_out(
        &mut self,
        anchor: Option<Point>,
        viewport: &impl Viewport,
        sink: &mut impl ViewSink,
    ) {
        self.set_zoom(self.zoom_level.zoom_out(), false, anchor, viewport, sink);
    }

    /// Jump to a specific ladder rung, centered on the viewport
    pub fn set_zoom_at_center(
        &mut self,
        level: ZoomLevel,
        viewport: &impl Viewport,
        sink: &mut impl ViewSink,
    ) {
        self.set_zoom(level, false, None, viewport, sink);
    }

    /// The best-fitting rung for the current viewport, applied forcibly
    pub fn zoom_to_fit(
        &mut self,
        auto_zoom: AutoZoom,
        viewport: &impl Viewport,
        sink: &mut impl ViewSink,
    ) {
        let visible = viewport.visible_rect();
        let best = auto_zoom.calc_zoom(
            self.canvas.im_width(),
            self.canvas.im_height(),
            visible.width,
            visible.height,
            true,
        );
        self.set_zoom(best, true, None, viewport, sink);
    }

    /// Change the zoom level, keeping the image content under the anchor in
    /// place
    ///
    /// Idempotent when `level` is already active and `force` is false. The
    /// anchor's image-space position is recorded before any mutation, then
    /// re-projected through the fully recomputed transform; the viewport is
    /// asked to scroll so the re-projected point sits where the anchor was.
    pub fn set_zoom(
        &mut self,
        level: ZoomLevel,
        force: bool,
        anchor: Option<Point>,
        viewport: &impl Viewport,
        sink: &mut impl ViewSink,
    ) {
        let old_level = self.zoom_level;
        if old_level == level && !force {
            return;
        }

        let visible = viewport.visible_rect();
        let origin = anchor.unwrap_or_else(|| visible.center());
        let image_origin = self
            .transform
            .component_to_image_with_scale(origin, old_level.view_scale());

        self.zoom_level = level;
        let new_scale = level.view_scale();
        self.canvas.change_zooming(new_scale);
        self.transform.set_scale(new_scale);
        self.transform
            .set_canvas_size(self.canvas.co_width() as f64, self.canvas.co_height() as f64);

        let new_origin = self
            .transform
            .image_to_component_with_scale(image_origin, new_scale);
        let area = Rect::centered_at(new_origin, visible.width, visible.height);

        tracing::debug!("[View] zoom {old_level} -> {level}");
        sink.emit(ViewEvent::ScrollToVisible(area));
        sink.emit(ViewEvent::Repaint);
        sink.emit(ViewEvent::ZoomChanged(level));
    }

    /// Request a repaint of the component-space region covering an
    /// image-space stroke segment
    ///
    /// `thickness` is in image pixels (it derives from the brush radius) and
    /// is scaled into component space here, exactly like the coordinates.
    pub fn update_region(
        &mut self,
        start: Point,
        end: Point,
        thickness: f64,
        sink: &mut impl ViewSink,
    ) {
        let start_co = self.transform.image_to_component(start);
        let end_co = self.transform.image_to_component(end);

        let (left, right) = if end_co.x < start_co.x {
            (end_co.x, start_co.x)
        } else {
            (start_co.x, end_co.x)
        };
        let (top, bottom) = if end_co.y < start_co.y {
            (end_co.y, start_co.y)
        } else {
            (start_co.y, end_co.y)
        };

        let thickness_co = (self.transform.view_scale() * thickness).ceil() as i32;
        let mut region = Region::new(
            left.floor() as i32,
            top.floor() as i32,
            right.ceil() as i32,
            bottom.ceil() as i32,
        );
        region.left -= thickness_co;
        region.top -= thickness_co;
        region.right += thickness_co;
        region.bottom += thickness_co;

        sink.emit(ViewEvent::RepaintRegion(region));
    }

    /// Component-space grid line positions for the visible area, one line
    /// per image pixel; `None` unless the zoom level allows the pixel grid
    pub fn pixel_grid_lines(&self, viewport: &impl Viewport) -> Option<PixelGrid> {
        if !self.zoom_level.allows_pixel_grid() {
            return None;
        }

        let scale = self.transform.view_scale();
        let (offset_x, offset_y) = self.transform.canvas_offset();
        let visible = viewport.visible_rect();

        let vertical = grid_lines(
            offset_x,
            scale,
            visible.x,
            visible.x + visible.width,
            self.canvas.im_width(),
        );
        let horizontal = grid_lines(
            offset_y,
            scale,
            visible.y,
            visible.y + visible.height,
            self.canvas.im_height(),
        );
        Some(PixelGrid {
            vertical,
            horizontal,
        })
    }
}

/// Line positions `offset + m * scale` for whole image pixels `m` falling
/// inside both the visible span and the canvas
fn grid_lines(offset: f64, scale: f64, span_start: f64, span_end: f64, im_extent: u32) -> Vec<f64> {
    let first = ((span_start - offset) / scale).ceil().max(0.0) as i64;
    let last_visible = ((span_end - offset) / scale).floor() as i64;
    let last = last_visible.min(im_extent as i64);
    (first..=last).map(|m| offset + m as f64 * scale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::events::{EventBuffer, FixedViewport};

    fn view_800x600_canvas_1000(ui: &UiThread) -> (View, FixedViewport, EventBuffer) {
        let canvas = Canvas::new(1000, 1000).expect("valid size");
        let mut view = View::new(canvas, ui);
        let mut sink = EventBuffer::new();
        view.on_resize(800.0, 600.0, &mut sink);
        sink.drain();
        (view, FixedViewport(Rect::new(0.0, 0.0, 800.0, 600.0)), sink)
    }

    #[test]
    fn test_resize_centers_canvas_and_repaints() {
        let ui = UiThread::claim();
        let canvas = Canvas::new(500, 400).expect("valid size");
        let mut view = View::new(canvas, &ui);
        let mut sink = EventBuffer::new();

        view.on_resize(800.0, 600.0, &mut sink);
        assert_eq!(view.transform().canvas_offset(), (150.0, 100.0));
        assert_eq!(sink.drain(), vec![ViewEvent::Repaint]);
        assert_eq!(view.zoom_level(), ZoomLevel::Z100);
    }

    #[test]
    fn test_anchor_preserving_zoom_in() {
        let ui = UiThread::claim();
        let (mut view, viewport, mut sink) = view_800x600_canvas_1000(&ui);

        let anchor = Point::new(400.0, 300.0);
        let image_before = view.transform().component_to_image(anchor);
        assert_eq!(image_before, Point::new(500.0, 500.0));

        view.zoom_in(Some(anchor), &viewport, &mut sink);
        assert_eq!(view.zoom_level(), ZoomLevel::Z100.zoom_in());

        let back = view.transform().image_to_component(image_before);
        assert!(
            (back.x - anchor.x).abs() <= 1.0 && (back.y - anchor.y).abs() <= 1.0,
            "anchor drifted to {back:?}"
        );
    }

    #[test]
    fn test_zoom_emits_scroll_repaint_and_selector_events() {
        let ui = UiThread::claim();
        let (mut view, viewport, mut sink) = view_800x600_canvas_1000(&ui);

        view.zoom_in(None, &viewport, &mut sink);
        let events = sink.drain();
        assert_eq!(events.len(), 3);

        match &events[0] {
            ViewEvent::ScrollToVisible(area) => {
                // viewport-sized, centered on the re-projected center
                assert_eq!(area.width, 800.0);
                assert_eq!(area.height, 600.0);
                let center = area.center();
                assert!((center.x - 400.0).abs() <= 1.0);
                assert!((center.y - 300.0).abs() <= 1.0);
            }
            other => panic!("expected ScrollToVisible, got {other:?}"),
        }
        assert_eq!(events[1], ViewEvent::Repaint);
        assert_eq!(
            events[2],
            ViewEvent::ZoomChanged(ZoomLevel::Z100.zoom_in())
        );
    }

    #[test]
    fn test_set_zoom_is_idempotent_without_force() {
        let ui = UiThread::claim();
        let (mut view, viewport, mut sink) = view_800x600_canvas_1000(&ui);

        view.set_zoom(ZoomLevel::Z100, false, None, &viewport, &mut sink);
        assert!(sink.is_empty());

        view.set_zoom(ZoomLevel::Z100, true, None, &viewport, &mut sink);
        assert_eq!(sink.drain().len(), 3);
    }

    #[test]
    fn test_zoom_saturates_quietly_at_the_ladder_ends() {
        let ui = UiThread::claim();
        let (mut view, viewport, mut sink) = view_800x600_canvas_1000(&ui);

        view.set_zoom(
            ZoomLevel::at(ZoomLevel::COUNT - 1),
            false,
            None,
            &viewport,
            &mut sink,
        );
        sink.drain();

        view.zoom_in(None, &viewport, &mut sink);
        assert!(sink.is_empty(), "saturated zoom_in must be a no-op");
        assert_eq!(view.zoom_level(), ZoomLevel::at(ZoomLevel::COUNT - 1));
    }

    #[test]
    fn test_repeated_zoom_round_trip_does_not_drift() {
        let ui = UiThread::claim();
        let (mut view, viewport, mut sink) = view_800x600_canvas_1000(&ui);

        let probe = Point::new(400.0, 300.0);
        let image_before = view.transform().component_to_image(probe);

        for steps in 1..6 {
            for _ in 0..steps {
                view.zoom_in(None, &viewport, &mut sink);
            }
            for _ in 0..steps {
                view.zoom_out(None, &viewport, &mut sink);
            }
            assert_eq!(view.zoom_level(), ZoomLevel::Z100);
            let image_after = view.transform().component_to_image(probe);
            assert!(
                (image_after.x - image_before.x).abs() < 1e-6
                    && (image_after.y - image_before.y).abs() < 1e-6,
                "drift after {steps} round trips: {image_after:?}"
            );
        }
        sink.drain();
    }

    #[test]
    fn test_random_walk_returns_to_consistent_state() {
        let ui = UiThread::claim();
        let (mut view, viewport, mut sink) = view_800x600_canvas_1000(&ui);

        for _ in 0..25 {
            let target = crate::zoom::random_level();
            view.set_zoom(target, false, None, &viewport, &mut sink);
            assert_eq!(view.zoom_level(), target);
            assert_eq!(view.view_scale(), target.view_scale());
        }
        view.set_zoom(ZoomLevel::Z100, false, None, &viewport, &mut sink);
        let probe = Point::new(123.0, 456.0);
        let there_and_back = view
            .transform()
            .image_to_component(view.transform().component_to_image(probe));
        assert!((there_and_back.x - probe.x).abs() < 1e-9);
        assert!((there_and_back.y - probe.y).abs() < 1e-9);
        sink.drain();
    }

    #[test]
    fn test_zoom_to_fit_picks_largest_fitting_rung() {
        let ui = UiThread::claim();
        let (mut view, viewport, mut sink) = view_800x600_canvas_1000(&ui);

        view.zoom_to_fit(AutoZoom::FitSpace, &viewport, &mut sink);
        assert_eq!(view.zoom_level().percent(), 50.0);
        assert_eq!(view.canvas().co_width(), 500);
    }

    #[test]
    fn test_canvas_size_changed_rederives_zoomed_size() {
        let ui = UiThread::claim();
        let (mut view, viewport, mut sink) = view_800x600_canvas_1000(&ui);
        view.set_zoom(ZoomLevel::Z100.zoom_in().zoom_in(), true, None, &viewport, &mut sink);
        sink.drain();

        view.canvas_size_changed(500, 250, &mut sink).expect("valid size");
        assert_eq!(view.canvas().co_width(), 1000);
        assert_eq!(view.canvas().co_height(), 500);
        assert_eq!(sink.drain(), vec![ViewEvent::Repaint]);

        assert!(view.canvas_size_changed(0, 10, &mut sink).is_err());
    }

    #[test]
    fn test_update_region_covers_scaled_stroke_segment() {
        let ui = UiThread::claim();
        let canvas = Canvas::new(100, 100).expect("valid size");
        let mut view = View::new(canvas, &ui);
        let viewport = FixedViewport(Rect::new(0.0, 0.0, 800.0, 600.0));
        let mut sink = EventBuffer::new();
        view.on_resize(800.0, 600.0, &mut sink);
        view.set_zoom(ZoomLevel::Z100.zoom_in().zoom_in(), false, None, &viewport, &mut sink);
        sink.drain();
        assert_eq!(view.view_scale(), 2.0);
        assert_eq!(view.transform().canvas_offset(), (300.0, 200.0));

        // segment given end-before-start must still normalize
        view.update_region(Point::new(20.0, 15.0), Point::new(10.0, 10.0), 5.0, &mut sink);
        let events = sink.drain();
        assert_eq!(
            events,
            vec![ViewEvent::RepaintRegion(Region::new(310, 210, 350, 240))]
        );
    }

    #[test]
    fn test_pixel_grid_respects_threshold_and_geometry() {
        let ui = UiThread::claim();
        let canvas = Canvas::new(10, 10).expect("valid size");
        let mut view = View::new(canvas, &ui);
        let viewport = FixedViewport(Rect::new(0.0, 0.0, 800.0, 600.0));
        let mut sink = EventBuffer::new();
        view.on_resize(800.0, 600.0, &mut sink);

        assert!(view.pixel_grid_lines(&viewport).is_none());

        let z1600 = ZoomLevel::at(14);
        assert_eq!(z1600.percent(), 1600.0);
        view.set_zoom(z1600, false, None, &viewport, &mut sink);
        sink.drain();

        let grid = view.pixel_grid_lines(&viewport).expect("grid allowed at 1600%");
        // 10 image pixels -> 11 boundaries, 16 px apart, starting at the offset
        assert_eq!(grid.vertical.len(), 11);
        assert_eq!(grid.vertical[0], 320.0);
        assert_eq!(grid.vertical[1] - grid.vertical[0], 16.0);
        assert_eq!(grid.horizontal.len(), 11);
        assert_eq!(grid.horizontal[0], 220.0);
    }
}
