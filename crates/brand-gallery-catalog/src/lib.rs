//! Asset catalog for the brand gallery
//!
//! This crate holds the built-in brand assets and answers queries over them:
//! - `AssetRepository`, the read-only lookup seam
//! - `StaticCatalog`, the in-memory implementation over the built-in data
//! - Free lookup helpers (`get_all_assets`, `get_asset_by_id`, ...) over a
//!   process-wide catalog
//! - View queries that apply a `FilterState` (search, format, sort)
//!
//! # Example
//!
//! ```rust
//! use brand_gallery_catalog::{apply_filter, get_all_assets, search_assets};
//! use brand_gallery_core::{FilterState, SortOption};
//!
//! assert_eq!(search_assets("blue")[0].name, "Primary Blue");
//!
//! let state = FilterState::new().with_format("PNG").with_sort(SortOption::SizeDesc);
//! let visible = apply_filter(get_all_assets(), &state);
//! assert_eq!(visible[0].id.as_str(), "apple-touch-icon");
//! ```

pub mod data;
pub mod query;
pub mod repository;
pub mod static_catalog;

// Re-exports for convenience
pub use query::{apply_filter, distinct_formats, parse_size_label, sort_assets};
pub use repository::AssetRepository;
pub use static_catalog::{
    get_all_assets, get_asset_by_id, get_assets_by_type, get_assets_by_type_name, get_categories,
    search_assets, StaticCatalog,
};
