//! Error types for the brand gallery

use thiserror::Error;

/// Result type alias for gallery operations
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Main error type for gallery domain operations
///
/// Catalog lookups never produce these: a missing asset is `None` and an
/// unknown category is an empty list. They surface only when a caller parses
/// untrusted strings into the closed vocabularies or builds an asset by hand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// Asset type outside logo/favicon/color/font
    #[error("Invalid asset type: {0}")]
    InvalidAssetType(String),

    /// Sort key outside the closed set
    #[error("Invalid sort option: {0}")]
    InvalidSortOption(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Serialization/Deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::SerializationError(err.to_string())
    }
}
