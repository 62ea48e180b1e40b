//! The canvas manager: viewport, content bounds and pages of one editor view.

use serde::{Deserialize, Serialize};

use crate::{
    Bounds, Page, PageRegistry, Rect, Viewport, ViewportConfig, ViewportError, ViewportResult,
};

/// Viewport, content bounds and page registry of a single editor view.
///
/// The zoom/pan engine lives in [`crate::zoom`] and the coordinate
/// transforms in [`crate::transform`]; both are methods on this type.
///
/// # Example
///
/// ```
/// use canvas_viewport::{CanvasManager, Page};
///
/// let mut manager = CanvasManager::new(800.0, 600.0, 1.0);
/// manager.add_page(Page::a4("p1", "Page 1")).unwrap();
/// manager.add_page(Page::a4("p2", "Page 2")).unwrap();
///
/// assert!(manager.remove_page("p1"));
/// assert_eq!(manager.active_page().map(|p| p.id.as_str()), Some("p2"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasManager {
    pub(crate) config: ViewportConfig,
    pub(crate) container_width: f32,
    pub(crate) container_height: f32,
    pub(crate) viewport: Viewport,
    pub(crate) bounds: Option<Bounds>,
    pages: PageRegistry,
}

/// Serialized view state of a [`CanvasManager`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasSnapshot {
    /// Viewport at snapshot time.
    pub viewport: Viewport,
    /// Content bounds, if they had been set.
    #[serde(default)]
    pub bounds: Option<Bounds>,
    /// Pages in display order.
    #[serde(default)]
    pub pages: Vec<Page>,
    /// Id of the active page.
    #[serde(default)]
    pub active_page: Option<String>,
}

impl CanvasManager {
    /// Create a manager for a container of the given size.
    ///
    /// The viewport starts at pan `(0, 0)` with `initial_scale`. The scale is
    /// taken as given; zoom operations clamp it from then on.
    #[must_use]
    pub fn new(container_width: f32, container_height: f32, initial_scale: f32) -> Self {
        Self::build(
            container_width,
            container_height,
            initial_scale,
            ViewportConfig::default(),
        )
    }

    /// Create a manager with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::InvalidConfig`] if the configuration is invalid.
    pub fn with_config(
        container_width: f32,
        container_height: f32,
        initial_scale: f32,
        config: ViewportConfig,
    ) -> ViewportResult<Self> {
        config.validate()?;
        Ok(Self::build(
            container_width,
            container_height,
            initial_scale,
            config,
        ))
    }

    fn build(width: f32, height: f32, scale: f32, config: ViewportConfig) -> Self {
        Self {
            config,
            container_width: width,
            container_height: height,
            viewport: Viewport::new(width, height, scale),
            bounds: None,
            pages: PageRegistry::new(),
        }
    }

    /// Current viewport.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Content bounds, if calculated or set.
    #[must_use]
    pub const fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Container size as `(width, height)`.
    #[must_use]
    pub const fn container_size(&self) -> (f32, f32) {
        (self.container_width, self.container_height)
    }

    /// Resize the container. Content is not re-fitted.
    pub fn update_container_size(&mut self, width: f32, height: f32) {
        self.container_width = width;
        self.container_height = height;
        self.viewport.width = width;
        self.viewport.height = height;
        tracing::debug!("Container resized to {width}x{height}");
    }

    // ------------------------------------------------------------------
    // Bounds
    // ------------------------------------------------------------------

    /// Compute and store the bounding box of the given shapes.
    ///
    /// With no shapes, the bounds cover the whole container at the origin.
    pub fn calculate_bounds(&mut self, shapes: &[Rect]) -> Bounds {
        let bounds = Bounds::enclosing(shapes)
            .unwrap_or_else(|| Bounds::from_size(self.container_width, self.container_height));
        self.bounds = Some(bounds);
        bounds
    }

    /// Set the content bounds directly.
    pub fn update_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
    }

    /// Forget the content bounds. Fit operations become no-ops.
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    // ------------------------------------------------------------------
    // Pages
    // ------------------------------------------------------------------

    /// Append a page. The first page added becomes active.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::DuplicatePage`] if the id is already present.
    pub fn add_page(&mut self, page: Page) -> ViewportResult<&Page> {
        self.pages.add(page)
    }

    /// Remove a page. Returns `false` if it was not found.
    pub fn remove_page(&mut self, page_id: &str) -> bool {
        self.pages.remove(page_id)
    }

    /// Make a page active. Returns `false` if the id is unknown.
    pub fn set_active_page(&mut self, page_id: &str) -> bool {
        self.pages.set_active(page_id)
    }

    /// The active page, or `None` when there are no pages.
    #[must_use]
    pub fn active_page(&self) -> Option<&Page> {
        self.pages.active()
    }

    /// All pages in ascending `order`.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        self.pages.pages()
    }

    /// Move a page to a new position. Returns `false` if the id is unknown.
    pub fn reorder_page(&mut self, page_id: &str, new_order: usize) -> bool {
        self.pages.reorder(page_id, new_order)
    }

    /// Look up a page by id.
    #[must_use]
    pub fn page(&self, page_id: &str) -> Option<&Page> {
        self.pages.get(page_id)
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if the document has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Rename a page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::PageNotFound`] if the id is unknown.
    pub fn rename_page(&mut self, page_id: &str, name: impl Into<String>) -> ViewportResult<()> {
        self.pages.rename(page_id, name)
    }

    /// Change a page's dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::PageNotFound`] if the id is unknown.
    pub fn resize_page(&mut self, page_id: &str, width: f32, height: f32) -> ViewportResult<()> {
        self.pages.resize(page_id, width, height)
    }

    /// Replace or clear a page's thumbnail.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::PageNotFound`] if the id is unknown.
    pub fn set_page_thumbnail(
        &mut self,
        page_id: &str,
        thumbnail: Option<String>,
    ) -> ViewportResult<()> {
        self.pages.set_thumbnail(page_id, thumbnail)
    }

    /// Activate the next page. Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        self.pages.next()
    }

    /// Activate the previous page. Returns `false` on the first page.
    pub fn previous_page(&mut self) -> bool {
        self.pages.previous()
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    /// Capture viewport, bounds, pages and active page.
    #[must_use]
    pub fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot {
            viewport: self.viewport,
            bounds: self.bounds,
            pages: self.pages.pages().to_vec(),
            active_page: self.pages.active_id().map(str::to_string),
        }
    }

    /// Rebuild a manager from a snapshot for a container of the given size.
    ///
    /// The viewport size always follows the container, not the snapshot.
    /// Page orders are renumbered densely and a dangling active page falls
    /// back to the first page.
    #[must_use]
    pub fn from_snapshot(
        snapshot: CanvasSnapshot,
        container_width: f32,
        container_height: f32,
        config: ViewportConfig,
    ) -> Self {
        let mut viewport = snapshot.viewport;
        viewport.width = container_width;
        viewport.height = container_height;
        if viewport.scale.is_finite() {
            viewport.scale = config.clamp_scale(viewport.scale);
        } else {
            tracing::warn!("Snapshot scale is not finite, resetting to 1.0");
            viewport.scale = config.clamp_scale(1.0);
        }

        let pages = PageRegistry::from_pages(snapshot.pages, snapshot.active_page);
        tracing::debug!(
            "Restored canvas view: scale {}, {} pages",
            viewport.scale,
            pages.len()
        );

        Self {
            config,
            container_width,
            container_height,
            viewport,
            bounds: snapshot.bounds,
            pages,
        }
    }

    /// Serialize the view state to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> ViewportResult<String> {
        serde_json::to_string(&self.snapshot()).map_err(ViewportError::Serialization)
    }

    /// Restore a manager from JSON produced by [`Self::to_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(
        json: &str,
        container_width: f32,
        container_height: f32,
    ) -> ViewportResult<Self> {
        Self::from_json_with_config(
            json,
            container_width,
            container_height,
            ViewportConfig::default(),
        )
    }

    /// Restore a manager from JSON with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the JSON cannot
    /// be parsed.
    pub fn from_json_with_config(
        json: &str,
        container_width: f32,
        container_height: f32,
        config: ViewportConfig,
    ) -> ViewportResult<Self> {
        config.validate()?;
        let snapshot: CanvasSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(
            snapshot,
            container_width,
            container_height,
            config,
        ))
    }
}

impl Default for CanvasManager {
    fn default() -> Self {
        Self::new(800.0, 600.0, 1.0)
    }
}
