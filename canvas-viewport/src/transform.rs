//! Screen/canvas coordinate conversion and visibility queries.

use crate::{CanvasManager, Point, Rect};

impl CanvasManager {
    /// Convert a screen point to canvas coordinates.
    #[must_use]
    pub fn screen_to_canvas(&self, screen_x: f32, screen_y: f32) -> Point {
        let vp = &self.viewport;
        Point::new((screen_x - vp.x) / vp.scale, (screen_y - vp.y) / vp.scale)
    }

    /// Convert a canvas point to screen coordinates.
    #[must_use]
    pub fn canvas_to_screen(&self, canvas_x: f32, canvas_y: f32) -> Point {
        let vp = &self.viewport;
        Point::new(canvas_x * vp.scale + vp.x, canvas_y * vp.scale + vp.y)
    }

    /// Check if a canvas point is inside the visible window.
    #[must_use]
    pub fn is_point_visible(&self, x: f32, y: f32) -> bool {
        let screen = self.canvas_to_screen(x, y);
        Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height)
            .contains_point(screen.x, screen.y)
    }

    /// Check if any part of a canvas rectangle is inside the visible window.
    #[must_use]
    pub fn is_rect_visible(&self, rect: &Rect) -> bool {
        self.visible_area().intersects(rect)
    }

    /// The visible window expressed in canvas coordinates.
    #[must_use]
    pub fn visible_area(&self) -> Rect {
        let top_left = self.screen_to_canvas(0.0, 0.0);
        Rect::new(
            top_left.x,
            top_left.y,
            self.viewport.width / self.viewport.scale,
            self.viewport.height / self.viewport.scale,
        )
    }

    /// Zoom as a rounded percentage (1.0 = 100).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn zoom_percentage(&self) -> u32 {
        (self.viewport.scale * 100.0).round().max(0.0) as u32
    }

    /// Camera box for the minimap at the configured minimap scale.
    #[must_use]
    pub fn minimap_viewport(&self) -> Rect {
        self.minimap_viewport_scaled(self.config.minimap_scale)
    }

    /// Camera box for a minimap drawn at `minimap_scale` of canvas size.
    #[must_use]
    pub fn minimap_viewport_scaled(&self, minimap_scale: f32) -> Rect {
        let area = self.visible_area();
        Rect::new(
            area.x * minimap_scale,
            area.y * minimap_scale,
            area.width * minimap_scale,
            area.height * minimap_scale,
        )
    }
}
