//! Filter and sort vocabulary shared by the controls and the gallery view

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GalleryError, Result};

/// Selector value meaning "no format filter"
pub const ALL_FORMATS: &str = "all";

/// Map the "all" sentinel to the empty string; other values pass through
pub fn normalize_format(value: &str) -> String {
    if value == ALL_FORMATS {
        String::new()
    } else {
        value.to_string()
    }
}

/// Sort orders offered by the sort control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Name (A-Z)
    #[default]
    NameAsc,
    /// Name (Z-A)
    NameDesc,
    /// Size (Small to Large)
    SizeAsc,
    /// Size (Large to Small)
    SizeDesc,
}

impl SortOption {
    /// Every sort option, in display order
    pub const ALL: [SortOption; 4] = [
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::SizeAsc,
        SortOption::SizeDesc,
    ];

    /// Wire key, e.g. `size-desc`
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::SizeAsc => "size-asc",
            SortOption::SizeDesc => "size-desc",
        }
    }

    /// Label shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "Name (A-Z)",
            SortOption::NameDesc => "Name (Z-A)",
            SortOption::SizeAsc => "Size (Small to Large)",
            SortOption::SizeDesc => "Size (Large to Small)",
        }
    }

    pub fn is_size_based(&self) -> bool {
        matches!(self, SortOption::SizeAsc | SortOption::SizeDesc)
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortOption::NameDesc | SortOption::SizeDesc)
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| GalleryError::InvalidSortOption(s.to_string()))
    }
}

/// The combined view filter a gallery reassembles from individual signals
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search, empty for none
    pub search: String,

    /// Selected format label, empty for all formats
    pub format: String,

    pub sort: SortOption,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the format, normalizing the "all" sentinel
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = normalize_format(format);
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Whether any format restriction is active
    pub fn has_format(&self) -> bool {
        !self.format.is_empty()
    }

    /// True when nothing narrows or reorders the default view
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
