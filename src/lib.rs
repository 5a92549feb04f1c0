//! rasterview - view/canvas engine for raster image editors
//!
//! The pieces of an image editor that sit between pointer/window events and
//! pixel compositing:
//!
//! - [`zoom`]: the discrete zoom ladder (geometric, sqrt(2) steps) and
//!   automatic fit-zoom selection
//! - [`view`]: per-view coordinate transform between component (screen) and
//!   image (canvas) space, with cached affines, and the controller that
//!   keeps the anchor point stable across zoom changes
//! - [`brush`]: spacing-driven resampling of drag input into brush dabs
//! - [`exec`]: the single-UI-thread contract and background-result
//!   marshaling
//!
//! The engine never paints, scrolls or touches pixels itself; it emits
//! [`view::ViewEvent`]s and queries a [`view::Viewport`], and the embedding
//! shell does the rest.

pub mod brush;
pub mod error;
pub mod exec;
pub mod geometry;
pub mod view;
pub mod zoom;

pub use brush::{Dab, DabsConfig, DabsStrategy};
pub use error::Error;
pub use exec::UiThread;
pub use geometry::{Affine, Point, Rect, Region};
pub use view::{Canvas, View, ViewEvent, ViewSink, Viewport, ViewTransform};
pub use zoom::{AutoZoom, ZoomLevel};
