//! Signals exchanged between gallery controls and views
//!
//! Each signal has a stable kebab-case name which doubles as the `type` tag of
//! its JSON form, e.g. `{"type":"format-filter-change","format":"SVG"}`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::filter::{FilterState, SortOption};

/// A named, typed notification published on the event bus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GalleryEvent {
    /// The format filter changed; empty means all formats
    FormatFilterChange { format: String },

    /// The sort order changed
    SortOptionChange { sort: SortOption },

    /// Format controls must revert to their default and re-broadcast it
    ResetFormatFilter,

    /// Composite filter state assembled by a gallery view
    #[serde(rename = "filterchange")]
    FilterChange(FilterState),
}

impl GalleryEvent {
    pub fn format_filter_change(format: impl Into<String>) -> Self {
        GalleryEvent::FormatFilterChange {
            format: format.into(),
        }
    }

    pub fn sort_option_change(sort: SortOption) -> Self {
        GalleryEvent::SortOptionChange { sort }
    }

    /// Subscription key of this event
    pub fn kind(&self) -> EventKind {
        match self {
            GalleryEvent::FormatFilterChange { .. } => EventKind::FormatFilterChange,
            GalleryEvent::SortOptionChange { .. } => EventKind::SortOptionChange,
            GalleryEvent::ResetFormatFilter => EventKind::ResetFormatFilter,
            GalleryEvent::FilterChange(_) => EventKind::FilterChange,
        }
    }

    pub fn event_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Encode as the JSON wire shape
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from the JSON wire shape
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for GalleryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryEvent::FormatFilterChange { format } => {
                write!(f, "{}(format={:?})", self.event_name(), format)
            }
            GalleryEvent::SortOptionChange { sort } => {
                write!(f, "{}(sort={})", self.event_name(), sort)
            }
            GalleryEvent::ResetFormatFilter => write!(f, "{}", self.event_name()),
            GalleryEvent::FilterChange(state) => write!(
                f,
                "{}(search={:?}, format={:?}, sort={})",
                self.event_name(),
                state.search,
                state.format,
                state.sort
            ),
        }
    }
}

/// Event names subscribers register for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    FormatFilterChange,
    SortOptionChange,
    ResetFormatFilter,
    FilterChange,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::FormatFilterChange => "format-filter-change",
            EventKind::SortOptionChange => "sort-option-change",
            EventKind::ResetFormatFilter => "reset-format-filter",
            EventKind::FilterChange => "filterchange",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
