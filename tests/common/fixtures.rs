//! Test fixtures
//!
//! Small hand-built catalogs for tests that should not depend on the
//! built-in data.

use brand_gallery::catalog::StaticCatalog;
use brand_gallery::domain::{Asset, AssetType, Category, ColorValues};

/// A logo with a size label and one tag
pub fn create_test_logo(id: &str, name: &str, size: &str) -> Asset {
    Asset::builder(id, name, AssetType::Logo, "SVG", format!("/test/{}.svg", id))
        .file_size(size)
        .tags(["test"])
        .build()
        .unwrap()
}

/// A color asset, which never carries a size
pub fn create_test_color(id: &str, name: &str, hex: &str) -> Asset {
    Asset::builder(id, name, AssetType::Color, "Color", format!("/test/{}.svg", id))
        .color_values(ColorValues::new(hex, "rgb(0, 0, 0)", "hsl(0, 0%, 0%)"))
        .build()
        .unwrap()
}

/// Catalog of two logos and one color, declared color first
pub fn create_small_catalog() -> StaticCatalog {
    StaticCatalog::from_assets(
        vec![
            create_test_color("ink", "Ink", "#111111"),
            create_test_logo("wordmark", "Wordmark", "4KB"),
            create_test_logo("badge", "Badge", "512B"),
        ],
        vec![Category::for_type(AssetType::Logo, "Logos", "Test logos", "ImageIcon")],
    )
}
