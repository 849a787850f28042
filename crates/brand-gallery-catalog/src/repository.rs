//! Repository trait abstraction for asset lookup
//!
//! The gallery only ever reads its catalog. `AssetRepository` is the seam a
//! real backing store would plug into; the built-in implementation is
//! [`StaticCatalog`](crate::StaticCatalog).

use brand_gallery_core::{Asset, AssetType, Category};

/// Read-only access to brand assets
///
/// No method fails: a missing asset is `None` and an empty result is an empty
/// `Vec`. Every call returns owned data that callers may modify freely.
pub trait AssetRepository {
    /// All assets in catalog order (logo, favicon, color, font)
    fn list(&self) -> Vec<Asset>;

    /// Assets of one type, in declaration order
    fn list_by_type(&self, asset_type: AssetType) -> Vec<Asset> {
        self.list()
            .into_iter()
            .filter(|a| a.asset_type == asset_type)
            .collect()
    }

    /// First asset with the given id
    fn get_by_id(&self, id: &str) -> Option<Asset> {
        self.list().into_iter().find(|a| a.id == *id)
    }

    /// Assets whose name, description or any tag contains `query`,
    /// ignoring case; an empty query returns everything
    fn search(&self, query: &str) -> Vec<Asset> {
        self.list()
            .into_iter()
            .filter(|a| a.matches_query(query))
            .collect()
    }

    /// Navigation categories
    fn categories(&self) -> Vec<Category>;
}
