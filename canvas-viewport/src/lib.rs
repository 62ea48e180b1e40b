//! # Canvas Viewport
//!
//! Viewport, zoom/pan and page model for the A4 document designer.
//! Compiles to WASM so the browser editor and native tooling share one
//! implementation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                CanvasManager                │
//! ├─────────────────────────────────────────────┤
//! │  Zoom/Pan Engine   │  Coordinate Transform  │
//! │  - Zoom to point   │  - Screen <-> canvas   │
//! │  - Fit / area      │  - Visibility          │
//! │  - Pan / center    │  - Minimap camera      │
//! ├─────────────────────────────────────────────┤
//! │  Viewport State    │  Page Registry         │
//! │  - Bounds          │  - Dense ordering      │
//! │  - Zoom limits     │  - Active page         │
//! ├─────────────────────────────────────────────┤
//! │           JSON snapshot / restore           │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bounds;
pub mod config;
pub mod error;
pub mod geometry;
pub mod manager;
pub mod page;
pub mod transform;
pub mod viewport;
pub mod zoom;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use bounds::Bounds;
pub use config::ViewportConfig;
pub use error::{ViewportError, ViewportResult};
pub use geometry::{Point, Rect};
pub use manager::{CanvasManager, CanvasSnapshot};
pub use page::{Page, PageRegistry, A4_HEIGHT_MM, A4_WIDTH_MM};
pub use viewport::Viewport;

/// Canvas viewport version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
