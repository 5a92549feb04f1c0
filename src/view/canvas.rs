//! Canvas size bookkeeping
//!
//! The canvas has one true size in image pixels and a derived size in
//! component (screen) pixels at the current zoom. External collaborators
//! (crop, resize, rotate) own the image-pixel size; the view engine only
//! re-derives the zoomed size from it.

use crate::error::Error;

/// Pixel dimensions of the bitmap being edited, plus the zoomed size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    im_width: u32,
    im_height: u32,
    co_width: u32,
    co_height: u32,
}

impl Canvas {
    /// A canvas of the given image-pixel size, at 100% zoom
    ///
    /// Zero dimensions are rejected here, before they can enter the
    /// controller.
    pub fn new(im_width: u32, im_height: u32) -> Result<Self, Error> {
        if im_width == 0 || im_height == 0 {
            return Err(Error::InvalidCanvasSize {
                width: im_width,
                height: im_height,
            });
        }
        Ok(Self {
            im_width,
            im_height,
            co_width: im_width,
            co_height: im_height,
        })
    }

    /// Re-derive the component-space size for a new view scale
    pub fn change_zooming(&mut self, view_scale: f64) {
        assert!(view_scale > 0.0, "view scale must be positive");
        self.co_width = (self.im_width as f64 * view_scale).round() as u32;
        self.co_height = (self.im_height as f64 * view_scale).round() as u32;
    }

    /// Adopt a new image-pixel size (crop/resize happened externally)
    pub fn resize(&mut self, im_width: u32, im_height: u32, view_scale: f64) -> Result<(), Error> {
        if im_width == 0 || im_height == 0 {
            return Err(Error::InvalidCanvasSize {
                width: im_width,
                height: im_height,
            });
        }
        self.im_width = im_width;
        self.im_height = im_height;
        self.change_zooming(view_scale);
        Ok(())
    }

    /// Width in image pixels
    pub fn im_width(&self) -> u32 {
        self.im_width
    }

    /// Height in image pixels
    pub fn im_height(&self) -> u32 {
        self.im_height
    }

    /// Width in component pixels at the current zoom
    pub fn co_width(&self) -> u32 {
        self.co_width
    }

    /// Height in component pixels at the current zoom
    pub fn co_height(&self) -> u32 {
        self.co_height
    }
}
