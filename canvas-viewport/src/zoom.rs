//! Zoom and pan operations.
//!
//! Every operation returns the resulting [`Viewport`]. Zoom requests outside
//! the configured range are clamped, never rejected.

use crate::{Bounds, CanvasManager, Point, Rect, Viewport};

/// Content extents at or below this size do not constrain a fit.
const MIN_FIT_EXTENT: f32 = 1e-6;

/// How a fit positions content vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FitAxis {
    /// Scale by the tighter of both axes, center on both.
    Both,
    /// Scale by width only, center horizontally, align top to the padding.
    Width,
}

impl CanvasManager {
    /// Zoom in by one step around `center`, or the viewport center.
    pub fn zoom_in(&mut self, center: Option<Point>) -> Viewport {
        self.set_zoom(self.viewport.scale + self.config.zoom_step, center)
    }

    /// Zoom out by one step around `center`, or the viewport center.
    pub fn zoom_out(&mut self, center: Option<Point>) -> Viewport {
        self.set_zoom(self.viewport.scale - self.config.zoom_step, center)
    }

    /// Set the zoom factor, keeping the canvas point under `center` fixed.
    ///
    /// `center` is in screen space and defaults to the viewport center.
    /// Non-finite requests are ignored.
    pub fn set_zoom(&mut self, scale: f32, center: Option<Point>) -> Viewport {
        if !scale.is_finite() {
            tracing::warn!("Ignoring non-finite zoom request: {scale}");
            return self.viewport;
        }

        let center = center.unwrap_or_else(|| self.viewport.center());
        let old_scale = self.viewport.scale;
        let new_scale = self.config.clamp_scale(scale);

        if old_scale.is_finite() && old_scale > 0.0 {
            let ratio = new_scale / old_scale;
            self.viewport.x = center.x - (center.x - self.viewport.x) * ratio;
            self.viewport.y = center.y - (center.y - self.viewport.y) * ratio;
        }
        self.viewport.scale = new_scale;

        tracing::debug!("Zoom {old_scale} -> {new_scale}");
        self.viewport
    }

    /// Return to 100% around the viewport center.
    pub fn reset_zoom(&mut self) -> Viewport {
        let center = self.viewport.center();
        self.set_zoom(1.0, Some(center))
    }

    /// Change the zoom limits. A reversed pair is swapped.
    ///
    /// The current scale is re-clamped around the viewport center.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ViewportError::InvalidConfig`] if the limits are not
    /// finite or not positive.
    pub fn set_zoom_limits(&mut self, min_zoom: f32, max_zoom: f32) -> crate::ViewportResult<()> {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        let mut config = self.config;
        config.min_zoom = min_zoom;
        config.max_zoom = max_zoom;
        config.validate()?;

        self.config = config;
        self.set_zoom(self.viewport.scale, None);
        Ok(())
    }

    /// Fit the content bounds into the container with the default padding.
    pub fn fit_to_screen(&mut self) -> Viewport {
        self.fit_to_screen_padded(self.config.fit_padding)
    }

    /// Fit the content bounds into the container and center them.
    ///
    /// No-op if bounds have not been calculated or set.
    pub fn fit_to_screen_padded(&mut self, padding: f32) -> Viewport {
        match self.bounds {
            Some(bounds) => self.fit(bounds, padding, FitAxis::Both),
            None => self.viewport,
        }
    }

    /// Fit the content width into the container with the default padding.
    pub fn fit_to_width(&mut self) -> Viewport {
        self.fit_to_width_padded(self.config.fit_padding)
    }

    /// Scale so the content width fills the container, ignoring height.
    ///
    /// Content is centered horizontally and its top edge sits at `padding`.
    /// No-op if bounds have not been calculated or set.
    pub fn fit_to_width_padded(&mut self, padding: f32) -> Viewport {
        match self.bounds {
            Some(bounds) => self.fit(bounds, padding, FitAxis::Width),
            None => self.viewport,
        }
    }

    /// Fit an arbitrary canvas area into the container with the default padding.
    pub fn zoom_to_area(&mut self, area: Rect) -> Viewport {
        self.zoom_to_area_padded(area, self.config.area_padding)
    }

    /// Fit an arbitrary canvas area into the container and center it.
    pub fn zoom_to_area_padded(&mut self, area: Rect, padding: f32) -> Viewport {
        self.fit(Bounds::from(area), padding, FitAxis::Both)
    }

    /// Move the view by a screen-space delta.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) -> Viewport {
        self.viewport.x += delta_x;
        self.viewport.y += delta_y;
        tracing::trace!("Pan by ({delta_x}, {delta_y})");
        self.viewport
    }

    /// Set the pan offset.
    pub fn set_pan(&mut self, x: f32, y: f32) -> Viewport {
        self.viewport.x = x;
        self.viewport.y = y;
        tracing::trace!("Pan set to ({x}, {y})");
        self.viewport
    }

    /// Pan so that canvas point `(x, y)` sits at the viewport center.
    pub fn center_on(&mut self, x: f32, y: f32) -> Viewport {
        let center = self.viewport.center();
        self.viewport.x = center.x - x * self.viewport.scale;
        self.viewport.y = center.y - y * self.viewport.scale;
        self.viewport
    }

    fn fit(&mut self, content: Bounds, padding: f32, axis: FitAxis) -> Viewport {
        if !padding.is_finite() || padding < 0.0 {
            tracing::warn!("Ignoring fit with invalid padding: {padding}");
            return self.viewport;
        }
        let extents = [content.min_x, content.min_y, content.width, content.height];
        if extents.iter().any(|v| !v.is_finite()) {
            tracing::warn!("Ignoring fit for non-finite content {:?}", content);
            return self.viewport;
        }

        let available_width = self.viewport.width - padding * 2.0;
        let available_height = self.viewport.height - padding * 2.0;

        let width_ratio =
            (content.width > MIN_FIT_EXTENT).then(|| available_width / content.width);
        let height_ratio = (axis == FitAxis::Both && content.height > MIN_FIT_EXTENT)
            .then(|| available_height / content.height);

        let scale = match (width_ratio, height_ratio) {
            (Some(w), Some(h)) => w.min(h),
            (Some(r), None) | (None, Some(r)) => r,
            (None, None) => {
                tracing::warn!("Fit requested for zero-size content, keeping current scale");
                self.viewport.scale
            }
        };
        if scale <= 0.0 {
            tracing::warn!("Padding {padding} leaves no room to fit content");
        }
        // f32::clamp passes NaN through
        let scale = if scale.is_finite() { scale } else { 1.0 };
        let scale = self.config.clamp_scale(scale);

        self.viewport.scale = scale;
        self.viewport.x =
            (self.viewport.width - content.width * scale) / 2.0 - content.min_x * scale;
        self.viewport.y = match axis {
            FitAxis::Both => {
                (self.viewport.height - content.height * scale) / 2.0 - content.min_y * scale
            }
            FitAxis::Width => padding - content.min_y * scale,
        };

        tracing::debug!("Fit {:?} content at scale {scale}", axis);
        self.viewport
    }
}
