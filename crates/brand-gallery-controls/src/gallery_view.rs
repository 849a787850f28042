//! Gallery view: the subscriber side of the filter controls
//!
//! The view listens for `format-filter-change` and `sort-option-change`,
//! folds them together with its own search text into a [`FilterState`],
//! re-queries the repository and publishes the composite `filterchange`
//! signal after every change.

use brand_gallery_catalog::{apply_filter, distinct_formats, AssetRepository};
use brand_gallery_core::{Asset, AssetType, EventKind, FilterState, GalleryEvent};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, info};

use crate::bus::{EventBus, Subscription};

struct ViewState {
    repository: Rc<dyn AssetRepository>,
    scope: Option<AssetType>,
    filter: RefCell<FilterState>,
    visible: RefCell<Vec<Asset>>,
    bus: Weak<EventBus>,
}

impl ViewState {
    fn source(&self) -> Vec<Asset> {
        match self.scope {
            Some(asset_type) => self.repository.list_by_type(asset_type),
            None => self.repository.list(),
        }
    }

    fn refresh(&self) {
        let state = self.filter.borrow().clone();
        let visible = apply_filter(self.source(), &state);
        debug!(count = visible.len(), "Gallery refreshed");
        *self.visible.borrow_mut() = visible;
    }

    fn update(&self, change: impl FnOnce(&mut FilterState)) {
        change(&mut *self.filter.borrow_mut());
        self.refresh();
        let state = self.filter.borrow().clone();
        if let Some(bus) = self.bus.upgrade() {
            bus.publish(GalleryEvent::FilterChange(state));
        }
    }
}

/// A gallery listing bound to an [`EventBus`] and an [`AssetRepository`]
///
/// Dropping the view unsubscribes it.
pub struct GalleryView {
    state: Rc<ViewState>,
    bus: Rc<EventBus>,
    subscriptions: Vec<Subscription>,
}

impl GalleryView {
    /// Mount a view over the whole catalog, or one asset type when `scope`
    /// is set
    pub fn mount(
        bus: Rc<EventBus>,
        repository: Rc<dyn AssetRepository>,
        scope: Option<AssetType>,
    ) -> Self {
        let state = Rc::new(ViewState {
            repository,
            scope,
            filter: RefCell::new(FilterState::default()),
            visible: RefCell::new(Vec::new()),
            bus: Rc::downgrade(&bus),
        });
        state.refresh();

        let format_sub = {
            let state = Rc::downgrade(&state);
            bus.subscribe(EventKind::FormatFilterChange, move |event| {
                if let (Some(state), GalleryEvent::FormatFilterChange { format }) =
                    (state.upgrade(), event)
                {
                    state.update(|f| f.format = format.clone());
                }
            })
        };
        let sort_sub = {
            let state = Rc::downgrade(&state);
            bus.subscribe(EventKind::SortOptionChange, move |event| {
                if let (Some(state), GalleryEvent::SortOptionChange { sort }) =
                    (state.upgrade(), event)
                {
                    state.update(|f| f.sort = *sort);
                }
            })
        };

        info!(scope = ?scope, "Gallery view mounted");

        Self {
            state,
            bus,
            subscriptions: vec![format_sub, sort_sub],
        }
    }

    /// Current combined filter
    pub fn filter_state(&self) -> FilterState {
        self.state.filter.borrow().clone()
    }

    /// Assets currently shown, filtered and sorted
    pub fn visible_assets(&self) -> Vec<Asset> {
        self.state.visible.borrow().clone()
    }

    /// Distinct format labels in this view's scope, for a format selector
    pub fn available_formats(&self) -> Vec<String> {
        distinct_formats(&self.state.source())
    }

    pub fn scope(&self) -> Option<AssetType> {
        self.state.scope
    }

    /// Change the search text and publish the new composite state
    pub fn set_search(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.update(|f| f.search = query);
    }

    /// Clear the search and ask format controls to reset
    ///
    /// The format itself is cleared by the controls' rebroadcast, so without a
    /// mounted format control only the search is cleared.
    pub fn reset_filters(&self) {
        self.state.update(|f| f.search.clear());
        self.bus.publish(GalleryEvent::ResetFormatFilter);
    }

    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn unmount(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        for subscription in self.subscriptions.drain(..) {
            self.bus.unsubscribe(subscription);
        }
        info!("Gallery view unmounted");
    }
}

impl Drop for GalleryView {
    fn drop(&mut self) {
        self.unmount();
    }
}
