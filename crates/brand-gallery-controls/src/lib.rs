//! Headless gallery controls and the bus they talk over
//!
//! Controls never reference each other or the view that consumes their
//! output. They share an [`EventBus`] handed to them at construction:
//!
//! - [`FormatFilter`] publishes `format-filter-change` and answers
//!   `reset-format-filter`
//! - [`SortOptions`] publishes `sort-option-change`
//! - [`GalleryView`] listens to both, re-queries the catalog and publishes
//!   the composite `filterchange`
//!
//! # Example
//!
//! ```rust
//! use brand_gallery_catalog::StaticCatalog;
//! use brand_gallery_controls::{EventBus, FormatFilter, FormatFilterConfig, GalleryView, SortOptions};
//! use brand_gallery_core::{AssetType, SortOption};
//! use std::rc::Rc;
//!
//! let bus = Rc::new(EventBus::new());
//! let view = GalleryView::mount(Rc::clone(&bus), Rc::new(StaticCatalog::new()), Some(AssetType::Favicon));
//! let formats = FormatFilter::mount(Rc::clone(&bus), view.available_formats(), FormatFilterConfig::default());
//! let sort = SortOptions::new(Rc::clone(&bus), view.scope());
//!
//! formats.select("PNG").unwrap();
//! sort.select(SortOption::SizeAsc).unwrap();
//!
//! let ids: Vec<String> = view.visible_assets().into_iter().map(|a| a.id.to_string()).collect();
//! assert_eq!(ids, ["favicon-16", "favicon-32", "apple-touch-icon"]);
//! ```

pub mod bus;
pub mod error;
pub mod format_filter;
pub mod gallery_view;
pub mod sort_options;

// Re-exports for convenience
pub use bus::{EventBus, Subscription};
pub use error::{ControlError, ControlResult};
pub use format_filter::{FormatFilter, FormatFilterConfig, FormatOption, ALL_FORMATS_LABEL};
pub use gallery_view::GalleryView;
pub use sort_options::SortOptions;
