//! In-memory catalog backed by the built-in data
//!
//! Besides the [`StaticCatalog`] type this module exposes free functions over a
//! process-wide instance, mirroring the lookup helpers a view would call.

use brand_gallery_core::{Asset, AssetType, Category};
use once_cell::sync::Lazy;
use tracing::{debug, instrument};

use crate::data;
use crate::repository::AssetRepository;

static CATALOG: Lazy<StaticCatalog> = Lazy::new(StaticCatalog::new);

/// Fixed catalog grouped by asset type
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    logos: Vec<Asset>,
    favicons: Vec<Asset>,
    colors: Vec<Asset>,
    fonts: Vec<Asset>,
    categories: Vec<Category>,
}

impl StaticCatalog {
    /// Create a catalog holding the built-in brand assets
    pub fn new() -> Self {
        Self {
            logos: data::logo_assets(),
            favicons: data::favicon_assets(),
            colors: data::color_assets(),
            fonts: data::font_assets(),
            categories: data::categories(),
        }
    }

    /// Create a catalog from arbitrary assets
    ///
    /// Assets are grouped by type; declaration order within a type is kept.
    pub fn from_assets(assets: impl IntoIterator<Item = Asset>, categories: Vec<Category>) -> Self {
        let mut catalog = Self {
            logos: Vec::new(),
            favicons: Vec::new(),
            colors: Vec::new(),
            fonts: Vec::new(),
            categories,
        };
        for asset in assets {
            catalog.group_mut(asset.asset_type).push(asset);
        }
        catalog
    }

    fn group(&self, asset_type: AssetType) -> &[Asset] {
        match asset_type {
            AssetType::Logo => &self.logos,
            AssetType::Favicon => &self.favicons,
            AssetType::Color => &self.colors,
            AssetType::Font => &self.fonts,
        }
    }

    fn group_mut(&mut self, asset_type: AssetType) -> &mut Vec<Asset> {
        match asset_type {
            AssetType::Logo => &mut self.logos,
            AssetType::Favicon => &mut self.favicons,
            AssetType::Color => &mut self.colors,
            AssetType::Font => &mut self.fonts,
        }
    }

    /// Total number of assets
    pub fn len(&self) -> usize {
        AssetType::ALL.iter().map(|t| self.group(*t).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetRepository for StaticCatalog {
    fn list(&self) -> Vec<Asset> {
        AssetType::ALL
            .iter()
            .flat_map(|t| self.group(*t).iter().cloned())
            .collect()
    }

    fn list_by_type(&self, asset_type: AssetType) -> Vec<Asset> {
        self.group(asset_type).to_vec()
    }

    fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }
}

/// Assets of one type from the built-in catalog
#[instrument(fields(asset_type = %asset_type))]
pub fn get_assets_by_type(asset_type: AssetType) -> Vec<Asset> {
    let assets = CATALOG.list_by_type(asset_type);
    debug!(count = assets.len(), "Listed assets by type");
    assets
}

/// Like [`get_assets_by_type`] but takes the type name; unknown names yield
/// an empty list
pub fn get_assets_by_type_name(name: &str) -> Vec<Asset> {
    match name.parse::<AssetType>() {
        Ok(asset_type) => get_assets_by_type(asset_type),
        Err(_) => {
            debug!(name, "Unknown asset type, returning no assets");
            Vec::new()
        }
    }
}

/// Every built-in asset in catalog order
pub fn get_all_assets() -> Vec<Asset> {
    CATALOG.list()
}

/// Built-in asset by id
#[instrument]
pub fn get_asset_by_id(id: &str) -> Option<Asset> {
    let asset = CATALOG.get_by_id(id);
    if asset.is_none() {
        debug!("Asset not found");
    }
    asset
}

/// Case-insensitive search across the built-in catalog
#[instrument]
pub fn search_assets(query: &str) -> Vec<Asset> {
    let assets = CATALOG.search(query);
    debug!(count = assets.len(), "Searched assets");
    assets
}

/// Navigation categories of the built-in catalog
pub fn get_categories() -> Vec<Category> {
    CATALOG.categories()
}
