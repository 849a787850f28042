//! Core type definitions

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Asset identifier, a human-readable slug such as `logo-brand`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Create an AssetId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for AssetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for AssetId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Type alias for tags (free-form labels used by search)
pub type Tags = Vec<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_id_display() {
        let id = AssetId::new("logo-brand");
        assert_eq!(id.to_string(), "logo-brand");
        assert_eq!(id.as_str(), "logo-brand");
    }

    #[test]
    fn test_asset_id_compares_with_str() {
        let id = AssetId::from("favicon-ico");
        assert!(id == *"favicon-ico");
        assert!(!id.is_empty());
        assert!(AssetId::new("").is_empty());
    }

    #[test]
    fn test_asset_id_serializes_as_plain_string() {
        let id = AssetId::new("primary-font");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"primary-font\"");
    }
}
