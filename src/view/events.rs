//! View event and collaborator contracts
//!
//! The engine never paints or scrolls by itself; it emits events for the
//! embedding shell and queries the shell for the visible area. Events are
//! fire-and-forget and may be coalesced by the consumer (several repaint
//! requests before the next paint collapse into one).

use crate::geometry::{Rect, Region};
use crate::zoom::ZoomLevel;
use serde::{Deserialize, Serialize};

/// Events emitted by the view controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// Scroll the viewport so this component-space rectangle is visible
    ScrollToVisible(Rect),
    /// Repaint the whole view
    Repaint,
    /// Repaint only this component-space region
    RepaintRegion(Region),
    /// The active zoom level changed; zoom selector UIs mirror it
    ZoomChanged(ZoomLevel),
}

/// Receives view events; implemented by the embedding shell
pub trait ViewSink {
    fn emit(&mut self, event: ViewEvent);
}

/// Query side of the viewport: current scroll position and dimensions
pub trait Viewport {
    /// The part of the view currently visible through the scroll pane,
    /// in component space
    fn visible_rect(&self) -> Rect;
}

/// A `ViewSink` backed by a plain buffer, for shells that poll
#[derive(Debug, Default)]
pub struct EventBuffer {
    events: Vec<ViewEvent>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all buffered events, leaving the buffer empty
    pub fn drain(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }
}

impl ViewSink for EventBuffer {
    fn emit(&mut self, event: ViewEvent) {
        self.events.push(event);
    }
}

/// A fixed viewport, for tests and headless embedding
#[derive(Debug, Clone, Copy)]
pub struct FixedViewport(pub Rect);

impl Viewport for FixedViewport {
    fn visible_rect(&self) -> Rect {
        self.0
    }
}
