//! Viewport configuration.
//!
//! Zoom limits and the default paddings used by the fit operations. A
//! config can be built in code or loaded from the editor's settings JSON:
//!
//! ```
//! use canvas_viewport::ViewportConfig;
//!
//! let config: ViewportConfig = serde_json::from_str(r#"{"maxZoom": 8.0}"#).unwrap();
//! assert!((config.max_zoom - 8.0).abs() < f32::EPSILON);
//! assert!((config.min_zoom - 0.1).abs() < f32::EPSILON);
//! ```

use serde::{Deserialize, Serialize};

use crate::{ViewportError, ViewportResult};

/// Default minimum zoom factor.
pub const DEFAULT_MIN_ZOOM: f32 = 0.1;

/// Default maximum zoom factor.
pub const DEFAULT_MAX_ZOOM: f32 = 5.0;

/// Default step applied by zoom in/out.
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;

/// Default padding (pixels) for fit-to-screen and fit-to-width.
pub const DEFAULT_FIT_PADDING: f32 = 50.0;

/// Default padding (pixels) for zoom-to-area.
pub const DEFAULT_AREA_PADDING: f32 = 20.0;

/// Default scale of the minimap relative to canvas space.
pub const DEFAULT_MINIMAP_SCALE: f32 = 0.1;

/// Configuration for a [`CanvasManager`](crate::CanvasManager).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewportConfig {
    /// Lowest allowed zoom factor.
    pub min_zoom: f32,
    /// Highest allowed zoom factor.
    pub max_zoom: f32,
    /// Amount added or removed by a single zoom in/out.
    pub zoom_step: f32,
    /// Padding used by fit-to-screen and fit-to-width.
    pub fit_padding: f32,
    /// Padding used by zoom-to-area.
    pub area_padding: f32,
    /// Minimap scale used by the minimap camera box.
    pub minimap_scale: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            fit_padding: DEFAULT_FIT_PADDING,
            area_padding: DEFAULT_AREA_PADDING,
            minimap_scale: DEFAULT_MINIMAP_SCALE,
        }
    }
}

impl ViewportConfig {
    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::InvalidConfig`] describing the first bad field.
    pub fn validate(&self) -> ViewportResult<()> {
        let fields = [
            ("minZoom", self.min_zoom),
            ("maxZoom", self.max_zoom),
            ("zoomStep", self.zoom_step),
            ("fitPadding", self.fit_padding),
            ("areaPadding", self.area_padding),
            ("minimapScale", self.minimap_scale),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ViewportError::InvalidConfig(format!("{name} must be finite")));
        }

        if self.min_zoom <= 0.0 {
            return Err(ViewportError::InvalidConfig(
                "minZoom must be greater than zero".to_string(),
            ));
        }
        if self.min_zoom > self.max_zoom {
            return Err(ViewportError::InvalidConfig(format!(
                "minZoom ({}) exceeds maxZoom ({})",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.zoom_step <= 0.0 {
            return Err(ViewportError::InvalidConfig(
                "zoomStep must be greater than zero".to_string(),
            ));
        }
        if self.fit_padding < 0.0 || self.area_padding < 0.0 {
            return Err(ViewportError::InvalidConfig(
                "paddings must not be negative".to_string(),
            ));
        }
        if self.minimap_scale <= 0.0 {
            return Err(ViewportError::InvalidConfig(
                "minimapScale must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Clamp a scale into `[min_zoom, max_zoom]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        scale.clamp(self.min_zoom, self.max_zoom)
    }
}
