//! Brand gallery
//!
//! Facade over the workspace crates:
//! - [`domain`]: asset, category, filter and signal types
//! - [`catalog`]: built-in assets and lookup helpers
//! - [`controls`]: event bus, format/sort controls and the gallery view

pub use brand_gallery_catalog as catalog;
pub use brand_gallery_controls as controls;
pub use brand_gallery_core as domain;
