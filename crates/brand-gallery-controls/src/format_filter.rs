//! Format selector control
//!
//! Offers "All Formats" plus one entry per supplied format. A selection is
//! published as `format-filter-change`, with the "all" sentinel normalized to
//! the empty string. While mounted the control also answers
//! `reset-format-filter` by publishing the all-formats signal again.

use brand_gallery_core::{normalize_format, EventKind, GalleryEvent, ALL_FORMATS};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, info, warn};

use crate::bus::{EventBus, Subscription};
use crate::error::{ControlError, ControlResult};

/// Label of the sentinel entry
pub const ALL_FORMATS_LABEL: &str = "All Formats";

/// Behavior switches for [`FormatFilter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatFilterConfig {
    /// Whether a reset also moves the visible selection back to "All Formats"
    pub reset_clears_selection: bool,
}

impl Default for FormatFilterConfig {
    fn default() -> Self {
        Self {
            reset_clears_selection: true,
        }
    }
}

/// One selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOption {
    /// Value reported on selection (`all` for the sentinel)
    pub value: String,
    pub label: String,
}

impl FormatOption {
    fn all() -> Self {
        Self {
            value: ALL_FORMATS.to_string(),
            label: ALL_FORMATS_LABEL.to_string(),
        }
    }

    fn format(format: String) -> Self {
        Self {
            label: format.clone(),
            value: format,
        }
    }
}

/// Headless format selector bound to an [`EventBus`]
///
/// Dropping the control unmounts it.
pub struct FormatFilter {
    bus: Rc<EventBus>,
    options: Vec<FormatOption>,
    selection: Rc<RefCell<String>>,
    subscription: Option<Subscription>,
}

impl FormatFilter {
    /// Mount a selector offering `formats` in the given order
    ///
    /// Duplicates are kept; callers wanting distinct entries pass distinct
    /// values (see `brand_gallery_catalog::distinct_formats`).
    pub fn mount<I, S>(bus: Rc<EventBus>, formats: I, config: FormatFilterConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<FormatOption> = std::iter::once(FormatOption::all())
            .chain(formats.into_iter().map(|f| FormatOption::format(f.into())))
            .collect();
        let selection = Rc::new(RefCell::new(ALL_FORMATS.to_string()));

        let subscription = {
            let weak_bus: Weak<EventBus> = Rc::downgrade(&bus);
            let selection = Rc::clone(&selection);
            bus.subscribe(EventKind::ResetFormatFilter, move |_| {
                if config.reset_clears_selection {
                    *selection.borrow_mut() = ALL_FORMATS.to_string();
                }
                if let Some(bus) = weak_bus.upgrade() {
                    bus.publish(GalleryEvent::format_filter_change(""));
                }
            })
        };

        info!(options = options.len(), "Format filter mounted");

        Self {
            bus,
            options,
            selection,
            subscription: Some(subscription),
        }
    }

    /// Entries in display order, "All Formats" first
    pub fn options(&self) -> &[FormatOption] {
        &self.options
    }

    /// Value of the visibly selected entry (`all` when nothing is narrowed)
    pub fn selected(&self) -> String {
        self.selection.borrow().clone()
    }

    /// Visible selection as a filter value (empty for all formats)
    pub fn selected_format(&self) -> String {
        normalize_format(&self.selection.borrow())
    }

    /// Select an entry by value and publish the normalized format
    ///
    /// Values match ignoring ASCII case; the entry's own spelling is what gets
    /// selected and published.
    pub fn select(&self, value: &str) -> ControlResult<()> {
        let Some(option) = self
            .options
            .iter()
            .find(|o| o.value.eq_ignore_ascii_case(value))
        else {
            warn!(value, "Rejected unknown format option");
            return Err(ControlError::UnknownFormat(value.to_string()));
        };

        *self.selection.borrow_mut() = option.value.clone();
        let format = normalize_format(&option.value);
        debug!(format = %format, "Format selected");
        self.bus.publish(GalleryEvent::format_filter_change(format));
        Ok(())
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stop listening for resets; safe to call more than once
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.bus.unsubscribe(subscription);
            info!("Format filter unmounted");
        }
    }
}

impl Drop for FormatFilter {
    fn drop(&mut self) {
        self.unmount();
    }
}
