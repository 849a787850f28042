//! Control-layer error types

use brand_gallery_core::{AssetType, GalleryError, SortOption};
use thiserror::Error;

/// Result type alias for control operations
pub type ControlResult<T> = std::result::Result<T, ControlError>;

/// Errors raised when a control is asked to do something its UI could not
///
/// A rejected selection never publishes anything.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// Format value not among the control's options
    #[error("Unknown format option: {0}")]
    UnknownFormat(String),

    /// Sort option hidden for the control's category
    #[error("Sort option {sort} is not offered for {category} assets")]
    SortUnavailable {
        sort: SortOption,
        category: AssetType,
    },

    /// Domain parsing error
    #[error(transparent)]
    Gallery(#[from] GalleryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ControlError::SortUnavailable {
            sort: SortOption::SizeAsc,
            category: AssetType::Color,
        };
        assert_eq!(err.to_string(), "Sort option size-asc is not offered for color assets");
    }

    #[test]
    fn test_from_gallery_error() {
        let err: ControlError = GalleryError::InvalidSortOption("date".to_string()).into();
        assert_eq!(err.to_string(), "Invalid sort option: date");
    }
}
