//! WebAssembly bindings for canvas-viewport.
//!
//! Exposes [`CanvasManager`] to the browser editor. Structured values cross
//! the boundary as JSON strings; errors as `String`. Every zoom and pan call
//! returns the resulting viewport.

use wasm_bindgen::prelude::*;

use crate::{CanvasManager, Page, Point, Rect, Viewport};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();
}

fn point(x: Option<f32>, y: Option<f32>) -> Option<Point> {
    match (x, y) {
        (Some(x), Some(y)) => Some(Point::new(x, y)),
        _ => None,
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn viewport_json(viewport: Viewport) -> Result<String, String> {
    to_json(&viewport)
}

/// Canvas manager instance for WASM.
#[wasm_bindgen]
pub struct WasmCanvasManager {
    manager: CanvasManager,
}

#[wasm_bindgen]
impl WasmCanvasManager {
    /// Create a manager for a container of the given size.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(container_width: f32, container_height: f32, initial_scale: Option<f32>) -> Self {
        Self {
            manager: CanvasManager::new(
                container_width,
                container_height,
                initial_scale.unwrap_or(1.0),
            ),
        }
    }

    /// Current viewport as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = getViewportJson)]
    pub fn get_viewport_json(&self) -> Result<String, String> {
        to_json(&self.manager.viewport())
    }

    /// Zoom in one step around `(cx, cy)` or the viewport center.
    ///
    /// # Errors
    ///
    /// Returns an error string if the viewport cannot be serialized.
    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&mut self, cx: Option<f32>, cy: Option<f32>) -> Result<String, String> {
        viewport_json(self.manager.zoom_in(point(cx, cy)))
    }

    /// Zoom out one step around `(cx, cy)` or the viewport center.
    ///
    /// # Errors
    ///
    /// Returns an error string if the viewport cannot be serialized.
    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&mut self, cx: Option<f32>, cy: Option<f32>) -> Result<String, String> {
        viewport_json(self.manager.zoom_out(point(cx, cy)))
    }

    /// Set the zoom factor around `(cx, cy)` or the viewport center.
    ///
    /// # Errors
    ///
    /// Returns an error string if the viewport cannot be serialized.
    #[wasm_bindgen(js_name = setZoom)]
    pub fn set_zoom(
        &mut self,
        scale: f32,
        cx: Option<f32>,
        cy: Option<f32>,
    ) -> Result<String, String> {
        viewport_json(self.manager.set_zoom(scale, point(cx, cy)))
    }

    /// Return to 100%.
    ///
    /// # Errors
    ///
    /// Returns an error string if the viewport cannot be serialized.
    #[wasm_bindgen(js_name = resetZoom)]
    pub fn reset_zoom(&mut self) -> Result<String, String> {
        viewport_json(self.manager.reset_zoom())
    }

    /// Fit content bounds into the container.
    ///
    /// # Errors
    ///
    /// Returns an error string if the viewport cannot be serialized.
    #[wasm_bindgen(js_name = fitToScreen)]
    pub fn fit_to_screen(&mut self, padding: Option<f32>) -> Result<String, String> {
        viewport_json(match padding {
            Some(p) => self.manager.fit_to_screen_padded(p),
            None => self.manager.fit_to_screen(),
        })
    }

    /// Fit content width into the container.
    ///
    /// # Errors
    ///
    /// Returns an error string if the viewport cannot be serialized.
    #[wasm_bindgen(js_name = fitToWidth)]
    pub fn fit_to_width(&mut self, padding: Option<f32>) -> Result<String, String> {
        viewport_json(match padding {
            Some(p) => self.manager.fit_to_width_padded(p),
            None => self.manager.fit_to_width(),
        })
    }

    /// Fit a canvas area into the container.
    ///
    /// # Errors
    ///
    /// Returns an error string if the viewport cannot be serialized.
    #[wasm_bindgen(js_name = zoomToArea)]
    pub fn zoom_to_area(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        padding: Option<f32>,
    ) -> Result<String, String> {
        let area = Rect::new(x, y, width, height);
        viewport_json(match padding {
            Some(p) => self.manager.zoom_to_area_padded(area, p),
            None => self.manager.zoom_to_area(area),
        })
    }

    /// Pan by a screen-space delta.
    ///
    /// # Errors
    ///
    /// Returns an error string if the viewport cannot be serialized.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) -> Result<String, String> {
        viewport_json(self.manager.pan(delta_x, delta_y))
    }

    /// Set the pan offset.
    ///
    /// # Errors
    ///
    /// Returns an error string if the viewport cannot be serialized.
    #[wasm_bindgen(js_name = setPan)]
    pub fn set_pan(&mut self, x: f32, y: f32) -> Result<String, String> {
        viewport_json(self.manager.set_pan(x, y))
    }

    /// Center the view on a canvas point.
    ///
    /// # Errors
    ///
    /// Returns an error string if the viewport cannot be serialized.
    #[wasm_bindgen(js_name = centerOn)]
    pub fn center_on(&mut self, x: f32, y: f32) -> Result<String, String> {
        viewport_json(self.manager.center_on(x, y))
    }

    /// Calculate content bounds from a JSON array of `{x, y, width, height}`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the shapes cannot be parsed.
    #[wasm_bindgen(js_name = calculateBoundsJson)]
    pub fn calculate_bounds_json(&mut self, shapes_json: &str) -> Result<String, String> {
        let shapes: Vec<Rect> = serde_json::from_str(shapes_json).map_err(|e| e.to_string())?;
        to_json(&self.manager.calculate_bounds(&shapes))
    }

    /// Convert a screen point to canvas coordinates as `[x, y]`.
    #[wasm_bindgen(js_name = screenToCanvas)]
    #[must_use]
    pub fn screen_to_canvas(&self, x: f32, y: f32) -> Vec<f32> {
        let p = self.manager.screen_to_canvas(x, y);
        vec![p.x, p.y]
    }

    /// Convert a canvas point to screen coordinates as `[x, y]`.
    #[wasm_bindgen(js_name = canvasToScreen)]
    #[must_use]
    pub fn canvas_to_screen(&self, x: f32, y: f32) -> Vec<f32> {
        let p = self.manager.canvas_to_screen(x, y);
        vec![p.x, p.y]
    }

    /// Check if a canvas point is visible.
    #[wasm_bindgen(js_name = isPointVisible)]
    #[must_use]
    pub fn is_point_visible(&self, x: f32, y: f32) -> bool {
        self.manager.is_point_visible(x, y)
    }

    /// Zoom as a rounded percentage.
    #[wasm_bindgen(js_name = getZoomPercentage)]
    #[must_use]
    pub fn get_zoom_percentage(&self) -> u32 {
        self.manager.zoom_percentage()
    }

    /// Minimap camera box as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = getMinimapViewportJson)]
    pub fn get_minimap_viewport_json(&self, minimap_scale: Option<f32>) -> Result<String, String> {
        let rect = match minimap_scale {
            Some(scale) => self.manager.minimap_viewport_scaled(scale),
            None => self.manager.minimap_viewport(),
        };
        to_json(&rect)
    }

    /// Resize the container.
    #[wasm_bindgen(js_name = updateContainerSize)]
    pub fn update_container_size(&mut self, width: f32, height: f32) {
        self.manager.update_container_size(width, height);
    }

    /// Append a page.
    ///
    /// # Errors
    ///
    /// Returns an error string if the id is already present.
    #[wasm_bindgen(js_name = addPage)]
    pub fn add_page(&mut self, id: &str, name: &str, width: f32, height: f32) -> Result<(), String> {
        self.manager
            .add_page(Page::new(id, name, width, height))
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    /// Remove a page.
    #[wasm_bindgen(js_name = removePage)]
    pub fn remove_page(&mut self, id: &str) -> bool {
        self.manager.remove_page(id)
    }

    /// Make a page active.
    #[wasm_bindgen(js_name = setActivePage)]
    pub fn set_active_page(&mut self, id: &str) -> bool {
        self.manager.set_active_page(id)
    }

    /// Active page as JSON (`null` when there are no pages).
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = getActivePageJson)]
    pub fn get_active_page_json(&self) -> Result<String, String> {
        to_json(&self.manager.active_page())
    }

    /// All pages as JSON, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = getPagesJson)]
    pub fn get_pages_json(&self) -> Result<String, String> {
        to_json(&self.manager.pages())
    }

    /// Move a page to a new position.
    #[wasm_bindgen(js_name = reorderPage)]
    pub fn reorder_page(&mut self, id: &str, new_order: usize) -> bool {
        self.manager.reorder_page(id, new_order)
    }

    /// Serialize the view state.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<String, String> {
        self.manager.to_json().map_err(|e| e.to_string())
    }

    /// Restore a manager from serialized view state.
    ///
    /// # Errors
    ///
    /// Returns an error string if the JSON cannot be parsed.
    #[wasm_bindgen(js_name = fromJSON)]
    pub fn from_json(
        json: &str,
        container_width: f32,
        container_height: f32,
    ) -> Result<WasmCanvasManager, String> {
        CanvasManager::from_json(json, container_width, container_height)
            .map(|manager| Self { manager })
            .map_err(|e| e.to_string())
    }
}
