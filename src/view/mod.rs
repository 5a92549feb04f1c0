//! View/canvas engine
//!
//! One `View` per open image: it owns the canvas dimensions, the
//! component/image coordinate transform and the active zoom level, and
//! turns resize/zoom input into scroll and repaint events for the
//! embedding shell.

pub mod canvas;
pub mod controller;
pub mod events;
pub mod transform;

pub use canvas::Canvas;
pub use controller::{PixelGrid, View};
pub use events::{EventBuffer, FixedViewport, ViewEvent, ViewSink, Viewport};
pub use transform::ViewTransform;
