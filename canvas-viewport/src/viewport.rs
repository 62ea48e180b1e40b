//! The visible window onto the document.

use serde::{Deserialize, Serialize};

use crate::Point;

/// Pan offset, zoom scale and size of the visible window.
///
/// `x`/`y` are the screen position of the canvas origin, so a canvas point
/// `p` is drawn at `p * scale + (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Pan offset X in screen pixels.
    pub x: f32,
    /// Pan offset Y in screen pixels.
    pub y: f32,
    /// Zoom factor (1.0 = 100%).
    pub scale: f32,
    /// Container width in pixels.
    pub width: f32,
    /// Container height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport at pan `(0, 0)` with the given size and scale.
    #[must_use]
    pub const fn new(width: f32, height: f32, scale: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale,
            width,
            height,
        }
    }

    /// Geometric center of the viewport in screen space.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Current pan offset.
    #[must_use]
    pub const fn pan_offset(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0, 1.0)
    }
}
