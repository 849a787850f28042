//! Core domain models and types for the brand gallery
//!
//! This crate contains the data structures that describe brand assets
//! (logos, favicons, colors, fonts), their categories, the filter vocabulary
//! used by the gallery controls, and the typed signals exchanged between them.

pub mod asset;
pub mod category;
pub mod error;
pub mod event;
pub mod filter;
pub mod types;

// Re-exports for convenience
pub use asset::{Asset, AssetBuilder, AssetType, AssetVariant, ColorValues};
pub use category::Category;
pub use error::{GalleryError, Result};
pub use event::{EventKind, GalleryEvent};
pub use filter::{normalize_format, FilterState, SortOption, ALL_FORMATS};
pub use types::{AssetId, Tags};
