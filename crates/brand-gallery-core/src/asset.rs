//! Core asset types and metadata structures
//!
//! This module defines the `Asset` record shown in the gallery and the
//! category-specific payloads it can carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GalleryError, Result};
use crate::types::{AssetId, Tags};

/// Kinds of brand assets held by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Logo artwork, usually with alternate renditions
    Logo,
    /// Website favicon
    Favicon,
    /// Palette color
    Color,
    /// Web font
    Font,
}

impl AssetType {
    /// Every asset type, in catalog order
    pub const ALL: [AssetType; 4] = [
        AssetType::Logo,
        AssetType::Favicon,
        AssetType::Color,
        AssetType::Font,
    ];

    /// Get the string representation of the asset type
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Logo => "logo",
            AssetType::Favicon => "favicon",
            AssetType::Color => "color",
            AssetType::Font => "font",
        }
    }

    /// Identifier of the category that groups this type
    pub fn category_id(&self) -> &'static str {
        match self {
            AssetType::Logo => "logos",
            AssetType::Favicon => "favicons",
            AssetType::Color => "colors",
            AssetType::Font => "fonts",
        }
    }

    /// Whether assets of this type have a meaningful file size
    pub fn has_size(&self) -> bool {
        !matches!(self, AssetType::Color)
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "logo" => Ok(AssetType::Logo),
            "favicon" => Ok(AssetType::Favicon),
            "color" => Ok(AssetType::Color),
            "font" => Ok(AssetType::Font),
            _ => Err(GalleryError::InvalidAssetType(s.to_string())),
        }
    }
}

/// Hex/RGB/HSL renderings of a palette color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorValues {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
}

impl ColorValues {
    pub fn new(hex: impl Into<String>, rgb: impl Into<String>, hsl: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            rgb: rgb.into(),
            hsl: hsl.into(),
        }
    }
}

/// Alternate rendition of an asset (e.g. a large PNG of an SVG logo)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetVariant {
    pub name: String,
    pub path: String,
    pub preview_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

impl AssetVariant {
    /// Create a variant whose preview is the file itself
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: name.into(),
            preview_url: path.clone(),
            path,
            dimensions: None,
        }
    }

    /// Set the dimensions label
    pub fn with_dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.dimensions = Some(dimensions.into());
        self
    }
}

/// One downloadable brand artifact
///
/// `asset_type` decides which payload fields carry meaning: `color_values`
/// only for colors, `font_weights`/`font_styles` only for fonts. The builder
/// enforces this on `build()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique identifier
    pub id: AssetId,

    /// Display name
    pub name: String,

    /// Path of the downloadable file
    pub path: String,

    /// Asset type
    #[serde(rename = "type")]
    pub asset_type: AssetType,

    /// Format label, e.g. "SVG", "PNG", "WOFF2" or "Color"
    pub format: String,

    /// File size label, e.g. "20KB"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,

    /// Dimensions label, e.g. "240x80"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,

    /// Path of the preview image
    pub preview_url: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Tags,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_values: Option<ColorValues>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub font_weights: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub font_styles: Vec<String>,

    /// Alternate renditions, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<AssetVariant>,
}

impl Asset {
    /// Create a builder for constructing assets
    pub fn builder(
        id: impl Into<AssetId>,
        name: impl Into<String>,
        asset_type: AssetType,
        format: impl Into<String>,
        path: impl Into<String>,
    ) -> AssetBuilder {
        AssetBuilder::new(id, name, asset_type, format, path)
    }

    /// Validate the asset
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(GalleryError::ValidationError(
                "Asset id cannot be empty".to_string(),
            ));
        }
        if self.name.is_empty() {
            return Err(GalleryError::ValidationError(format!(
                "Asset {} has an empty name",
                self.id
            )));
        }
        if self.color_values.is_some() && self.asset_type != AssetType::Color {
            return Err(GalleryError::ValidationError(format!(
                "Asset {} carries color values but is a {}",
                self.id, self.asset_type
            )));
        }
        if (!self.font_weights.is_empty() || !self.font_styles.is_empty())
            && self.asset_type != AssetType::Font
        {
            return Err(GalleryError::ValidationError(format!(
                "Asset {} carries font weights or styles but is a {}",
                self.id, self.asset_type
            )));
        }
        Ok(())
    }

    /// Case-insensitive substring match against name, description and tags
    ///
    /// An empty query matches every asset.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Asset({}, {}, {})", self.id, self.name, self.asset_type)
    }
}

/// Builder for constructing Asset instances
pub struct AssetBuilder {
    asset: Asset,
}

impl AssetBuilder {
    /// Create a new asset builder; the preview defaults to the asset path
    pub fn new(
        id: impl Into<AssetId>,
        name: impl Into<String>,
        asset_type: AssetType,
        format: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        let path = path.into();
        Self {
            asset: Asset {
                id: id.into(),
                name: name.into(),
                preview_url: path.clone(),
                path,
                asset_type,
                format: format.into(),
                file_size: None,
                dimensions: None,
                tags: Vec::new(),
                description: None,
                color_values: None,
                font_weights: Vec::new(),
                font_styles: Vec::new(),
                variants: Vec::new(),
            },
        }
    }

    pub fn file_size(mut self, size: impl Into<String>) -> Self {
        self.asset.file_size = Some(size.into());
        self
    }

    pub fn dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.asset.dimensions = Some(dimensions.into());
        self
    }

    /// Set a preview path different from the asset path
    pub fn preview_url(mut self, url: impl Into<String>) -> Self {
        self.asset.preview_url = url.into();
        self
    }

    /// Add multiple tags
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.asset.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.asset.description = Some(desc.into());
        self
    }

    pub fn color_values(mut self, values: ColorValues) -> Self {
        self.asset.color_values = Some(values);
        self
    }

    pub fn font_weights<I, S>(mut self, weights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.asset.font_weights.extend(weights.into_iter().map(Into::into));
        self
    }

    pub fn font_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.asset.font_styles.extend(styles.into_iter().map(Into::into));
        self
    }

    /// Append a variant
    pub fn variant(mut self, variant: AssetVariant) -> Self {
        self.asset.variants.push(variant);
        self
    }

    /// Build the asset with validation
    pub fn build(self) -> Result<Asset> {
        self.asset.validate()?;
        Ok(self.asset)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> Asset {
        self.asset
    }
}
