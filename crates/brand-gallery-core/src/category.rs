//! Top-level asset groupings shown in gallery navigation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::asset::AssetType;

/// A navigation category (Logos, Favicons, Colors, Fonts)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier, e.g. `logos`
    pub id: String,

    /// Display name
    pub name: String,

    pub description: String,

    /// Icon reference understood by the rendering layer
    pub icon: String,

    /// Navigation path, e.g. `/logos`
    pub path: String,
}

impl Category {
    /// Create a category for an asset type; id and path derive from the type
    pub fn for_type(
        asset_type: AssetType,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        let id = asset_type.category_id();
        Self {
            id: id.to_string(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            path: format!("/{}", id),
        }
    }

    /// Asset type grouped under this category, if the id is a known one
    pub fn asset_type(&self) -> Option<AssetType> {
        AssetType::ALL
            .into_iter()
            .find(|t| t.category_id() == self.id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_type_derives_id_and_path() {
        let category = Category::for_type(AssetType::Font, "Fonts", "Company fonts", "TypeIcon");
        assert_eq!(category.id, "fonts");
        assert_eq!(category.path, "/fonts");
        assert_eq!(category.asset_type(), Some(AssetType::Font));
    }

    #[test]
    fn test_unknown_category_has_no_type() {
        let category = Category {
            id: "icons".to_string(),
            name: "Icons".to_string(),
            description: String::new(),
            icon: "ImageIcon".to_string(),
            path: "/icons".to_string(),
        };
        assert_eq!(category.asset_type(), None);
    }
}
