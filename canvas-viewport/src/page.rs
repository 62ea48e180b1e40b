//! Pages of a multi-page document and the registry that orders them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ViewportError, ViewportResult};

/// A4 width in millimetres.
pub const A4_WIDTH_MM: f32 = 210.0;

/// A4 height in millimetres.
pub const A4_HEIGHT_MM: f32 = 297.0;

/// One page/sheet of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Page width.
    pub width: f32,
    /// Page height.
    pub height: f32,
    /// Zero-based display position. Assigned by the registry.
    pub order: usize,
    /// Optional thumbnail (data URI or image URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl Page {
    /// Create a page. Its `order` is assigned when added to a registry.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width,
            height,
            order: 0,
            thumbnail: None,
        }
    }

    /// Create an A4 portrait page (210 × 297 mm).
    #[must_use]
    pub fn a4(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, A4_WIDTH_MM, A4_HEIGHT_MM)
    }

    /// Create a page with a freshly generated UUID id.
    #[must_use]
    pub fn with_generated_id(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self::new(Uuid::new_v4().to_string(), name, width, height)
    }

    /// Set the thumbnail.
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }
}

/// Ordered collection of pages with an active-page pointer.
///
/// Pages are stored in display order and `order` always equals the page's
/// index, so orders form a dense `0..N-1` sequence. The active page is
/// `None` exactly when the registry is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRegistry {
    pages: Vec<Page>,
    active: Option<String>,
}

impl PageRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from pages in arbitrary order.
    ///
    /// Pages are sorted by their stored `order` (ties keep input order) and
    /// renumbered densely. Later duplicates of an id are dropped. If `active`
    /// does not name a known page, the first page becomes active.
    #[must_use]
    pub fn from_pages(mut pages: Vec<Page>, active: Option<String>) -> Self {
        pages.sort_by_key(|p| p.order);
        let mut registry = Self::new();
        for page in pages {
            if registry.contains(&page.id) {
                tracing::warn!("Dropping duplicate page id on restore: {}", page.id);
                continue;
            }
            registry.pages.push(page);
        }
        registry.renumber();

        registry.active = match active {
            Some(id) if registry.contains(&id) => Some(id),
            Some(id) => {
                tracing::warn!("Active page {id} missing from snapshot, using first page");
                registry.first_id()
            }
            None => registry.first_id(),
        };
        registry
    }

    /// Append a page at the end. The first page added becomes active.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::DuplicatePage`] if the id is already present.
    pub fn add(&mut self, mut page: Page) -> ViewportResult<&Page> {
        if self.contains(&page.id) {
            return Err(ViewportError::DuplicatePage(page.id));
        }
        let index = self.pages.len();
        page.order = index;
        if self.active.is_none() {
            self.active = Some(page.id.clone());
        }
        tracing::debug!("Added page {} at order {index}", page.id);
        self.pages.push(page);
        Ok(&self.pages[index])
    }

    /// Remove a page by id. Returns `false` if it was not found.
    ///
    /// Remaining pages are renumbered. If the removed page was active, the
    /// page now at order 0 becomes active.
    pub fn remove(&mut self, page_id: &str) -> bool {
        let Some(index) = self.index_of(page_id) else {
            return false;
        };
        self.pages.remove(index);
        self.renumber();

        if self.active.as_deref() == Some(page_id) {
            self.active = self.first_id();
        }
        tracing::debug!(
            "Removed page {page_id}, active is now {:?}",
            self.active.as_deref()
        );
        true
    }

    /// Make a page active. Returns `false` if the id is unknown.
    pub fn set_active(&mut self, page_id: &str) -> bool {
        if !self.contains(page_id) {
            return false;
        }
        self.active = Some(page_id.to_string());
        tracing::debug!("Active page set to {page_id}");
        true
    }

    /// The active page, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Page> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    /// Id of the active page, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// All pages in ascending `order`.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Move a page to `new_order`, shifting the pages in between by one.
    ///
    /// `new_order` is clamped to the last valid position. Returns `false` if
    /// the id is unknown.
    pub fn reorder(&mut self, page_id: &str, new_order: usize) -> bool {
        let Some(from) = self.index_of(page_id) else {
            return false;
        };
        let to = new_order.min(self.pages.len() - 1);
        if from != to {
            let page = self.pages.remove(from);
            self.pages.insert(to, page);
            self.renumber();
        }
        tracing::debug!("Reordered page {page_id} from {from} to {to}");
        true
    }

    /// Look up a page by id.
    #[must_use]
    pub fn get(&self, page_id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == page_id)
    }

    /// Mutable lookup. `order` must not be changed through this reference.
    fn get_mut(&mut self, page_id: &str) -> ViewportResult<&mut Page> {
        self.pages
            .iter_mut()
            .find(|p| p.id == page_id)
            .ok_or_else(|| ViewportError::PageNotFound(page_id.to_string()))
    }

    /// Rename a page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::PageNotFound`] if the id is unknown.
    pub fn rename(&mut self, page_id: &str, name: impl Into<String>) -> ViewportResult<()> {
        self.get_mut(page_id)?.name = name.into();
        Ok(())
    }

    /// Change a page's dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::PageNotFound`] if the id is unknown.
    pub fn resize(&mut self, page_id: &str, width: f32, height: f32) -> ViewportResult<()> {
        let page = self.get_mut(page_id)?;
        page.width = width;
        page.height = height;
        Ok(())
    }

    /// Replace or clear a page's thumbnail.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::PageNotFound`] if the id is unknown.
    pub fn set_thumbnail(&mut self, page_id: &str, thumbnail: Option<String>) -> ViewportResult<()> {
        self.get_mut(page_id)?.thumbnail = thumbnail;
        Ok(())
    }

    /// Activate the page after the active one. Returns `false` at the end.
    pub fn next(&mut self) -> bool {
        self.step_active(1)
    }

    /// Activate the page before the active one. Returns `false` at the start.
    pub fn previous(&mut self) -> bool {
        self.step_active(-1)
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if the registry has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Check if a page id is registered.
    #[must_use]
    pub fn contains(&self, page_id: &str) -> bool {
        self.index_of(page_id).is_some()
    }

    fn step_active(&mut self, delta: isize) -> bool {
        let Some(current) = self.active.as_deref().and_then(|id| self.index_of(id)) else {
            return false;
        };
        let Some(target) = current.checked_add_signed(delta) else {
            return false;
        };
        match self.pages.get(target) {
            Some(page) => {
                self.active = Some(page.id.clone());
                true
            }
            None => false,
        }
    }

    fn index_of(&self, page_id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.id == page_id)
    }

    fn first_id(&self) -> Option<String> {
        self.pages.first().map(|p| p.id.clone())
    }

    fn renumber(&mut self) {
        for (i, page) in self.pages.iter_mut().enumerate() {
            page.order = i;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders(registry: &PageRegistry) -> Vec<usize> {
        registry.pages().iter().map(|p| p.order).collect()
    }

    fn ids(registry: &PageRegistry) -> Vec<&str> {
        registry.pages().iter().map(|p| p.id.as_str()).collect()
    }

    fn registry_with(ids: &[&str]) -> PageRegistry {
        let mut registry = PageRegistry::new();
        for id in ids {
            registry.add(Page::a4(*id, *id)).expect("unique id");
        }
        registry
    }

    #[test]
    fn test_first_page_becomes_active() {
        let mut registry = PageRegistry::new();
        assert!(registry.active().is_none());

        registry.add(Page::a4("p1", "Page 1")).expect("add");
        let added = registry.add(Page::a4("p2", "Page 2")).expect("add");
        assert_eq!(added.id, "p2");
        assert_eq!(added.order, 1);

        assert_eq!(registry.active_id(), Some("p1"));
        assert_eq!(orders(&registry), vec![0, 1]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = registry_with(&["p1"]);
        let err = registry.add(Page::a4("p1", "Again")).expect_err("duplicate");
        assert!(matches!(err, ViewportError::DuplicatePage(id) if id == "p1"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_active_moves_to_first() {
        let mut registry = registry_with(&["p1", "p2", "p3"]);
        assert!(registry.remove("p1"));
        assert_eq!(registry.active_id(), Some("p2"));
        assert_eq!(orders(&registry), vec![0, 1]);
    }

    #[test]
    fn test_remove_inactive_keeps_active() {
        let mut registry = registry_with(&["p1", "p2", "p3"]);
        assert!(registry.set_active("p3"));
        assert!(registry.remove("p2"));
        assert_eq!(registry.active_id(), Some("p3"));
        assert_eq!(ids(&registry), vec!["p1", "p3"]);
        assert_eq!(orders(&registry), vec![0, 1]);
    }

    #[test]
    fn test_remove_last_page_clears_active() {
        let mut registry = registry_with(&["p1"]);
        assert!(registry.remove("p1"));
        assert!(registry.active().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_unknown() {
        let mut registry = registry_with(&["p1"]);
        assert!(!registry.remove("nope"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_set_active_unknown() {
        let mut registry = registry_with(&["p1"]);
        assert!(!registry.set_active("nope"));
        assert_eq!(registry.active_id(), Some("p1"));
    }

    #[test]
    fn test_reorder_forward_and_back() {
        let mut registry = registry_with(&["a", "b", "c", "d"]);

        assert!(registry.reorder("a", 2));
        assert_eq!(ids(&registry), vec!["b", "c", "a", "d"]);
        assert_eq!(orders(&registry), vec![0, 1, 2, 3]);

        assert!(registry.reorder("d", 0));
        assert_eq!(ids(&registry), vec!["d", "b", "c", "a"]);
        assert_eq!(orders(&registry), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_reorder_out_of_range_clamps() {
        let mut registry = registry_with(&["a", "b", "c"]);
        assert!(registry.reorder("a", 42));
        assert_eq!(ids(&registry), vec!["b", "c", "a"]);
        assert_eq!(orders(&registry), vec![0, 1, 2]);
    }

    #[test]
    fn test_reorder_unknown() {
        let mut registry = registry_with(&["a"]);
        assert!(!registry.reorder("z", 0));
    }

    #[test]
    fn test_next_previous() {
        let mut registry = registry_with(&["a", "b"]);
        assert!(!registry.previous());
        assert!(registry.next());
        assert_eq!(registry.active_id(), Some("b"));
        assert!(!registry.next());
        assert!(registry.previous());
        assert_eq!(registry.active_id(), Some("a"));

        let mut empty = PageRegistry::new();
        assert!(!empty.next());
    }

    #[test]
    fn test_edit_helpers() {
        let mut registry = registry_with(&["a"]);
        registry.rename("a", "Cover").expect("rename");
        registry.resize("a", 297.0, 210.0).expect("resize");
        registry
            .set_thumbnail("a", Some("data:image/png;base64,AAAA".to_string()))
            .expect("thumbnail");

        let page = registry.get("a").expect("page");
        assert_eq!(page.name, "Cover");
        assert!((page.width - 297.0).abs() < f32::EPSILON);
        assert!(page.thumbnail.is_some());

        assert!(matches!(
            registry.rename("missing", "x"),
            Err(ViewportError::PageNotFound(_))
        ));
    }

    #[test]
    fn test_from_pages_normalizes() {
        let mut a = Page::a4("a", "A");
        a.order = 7;
        let mut b = Page::a4("b", "B");
        b.order = 3;
        let registry = PageRegistry::from_pages(vec![a, b], Some("ghost".to_string()));

        assert_eq!(ids(&registry), vec!["b", "a"]);
        assert_eq!(orders(&registry), vec![0, 1]);
        assert_eq!(registry.active_id(), Some("b"));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Page::with_generated_id("A", 100.0, 100.0);
        let b = Page::with_generated_id("B", 100.0, 100.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_thumbnail_skipped_when_absent() {
        let json = serde_json::to_string(&Page::a4("p1", "Page 1")).expect("serialize");
        assert!(!json.contains("thumbnail"));
        let page: Page = serde_json::from_str(&json).expect("parse");
        assert!(page.thumbnail.is_none());
    }
}
