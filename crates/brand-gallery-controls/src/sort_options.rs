//! Sort order selector control

use brand_gallery_core::{AssetType, GalleryError, GalleryEvent, SortOption};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, warn};

use crate::bus::EventBus;
use crate::error::{ControlError, ControlResult};

/// Headless sort selector bound to an [`EventBus`]
///
/// Name orders are always offered. Size orders are hidden when the category
/// hint is `color`, since colors carry no file size.
pub struct SortOptions {
    bus: Rc<EventBus>,
    category: Option<AssetType>,
    options: Vec<SortOption>,
    selected: Cell<SortOption>,
}

impl SortOptions {
    pub fn new(bus: Rc<EventBus>, category: Option<AssetType>) -> Self {
        let offers_size = category.map_or(true, |c| c.has_size());
        let options = SortOption::ALL
            .into_iter()
            .filter(|o| offers_size || !o.is_size_based())
            .collect();

        Self {
            bus,
            category,
            options,
            selected: Cell::new(SortOption::default()),
        }
    }

    /// Preselect `sort` without publishing
    ///
    /// Falls back to the default when `sort` is not offered here.
    pub fn with_default(self, sort: SortOption) -> Self {
        if self.offers(sort) {
            self.selected.set(sort);
        } else {
            warn!(sort = %sort, "Default sort not offered for this category, keeping name-asc");
        }
        self
    }

    pub fn category(&self) -> Option<AssetType> {
        self.category
    }

    /// Offered options in display order
    pub fn options(&self) -> &[SortOption] {
        &self.options
    }

    pub fn offers(&self, sort: SortOption) -> bool {
        self.options.contains(&sort)
    }

    pub fn selected(&self) -> SortOption {
        self.selected.get()
    }

    /// Select `sort` and publish `sort-option-change`
    pub fn select(&self, sort: SortOption) -> ControlResult<()> {
        if !self.offers(sort) {
            warn!(sort = %sort, "Rejected unavailable sort option");
            return match self.category {
                Some(category) => Err(ControlError::SortUnavailable { sort, category }),
                None => Err(ControlError::Gallery(GalleryError::InvalidSortOption(
                    sort.to_string(),
                ))),
            };
        }

        self.selected.set(sort);
        debug!(sort = %sort, "Sort selected");
        self.bus.publish(GalleryEvent::sort_option_change(sort));
        Ok(())
    }

    /// Select by wire key, e.g. `size-desc`
    pub fn select_key(&self, key: &str) -> ControlResult<()> {
        let sort: SortOption = key.parse()?;
        self.select(sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::testing::Recorder;
    use brand_gallery_core::EventKind;

    fn keys(control: &SortOptions) -> Vec<&'static str> {
        control.options().iter().map(|o| o.as_str()).collect()
    }

    #[test]
    fn test_color_hides_size_options() {
        let control = SortOptions::new(Rc::new(EventBus::new()), Some(AssetType::Color));
        assert_eq!(keys(&control), vec!["name-asc", "name-desc"]);
    }

    #[test]
    fn test_logo_and_no_category_offer_everything() {
        for category in [Some(AssetType::Logo), None] {
            let control = SortOptions::new(Rc::new(EventBus::new()), category);
            assert_eq!(
                keys(&control),
                vec!["name-asc", "name-desc", "size-asc", "size-desc"]
            );
        }
    }

    #[test]
    fn test_default_selection() {
        let control = SortOptions::new(Rc::new(EventBus::new()), None);
        assert_eq!(control.selected(), SortOption::NameAsc);
    }

    #[test]
    fn test_select_size_desc_publishes_once() {
        let bus = Rc::new(EventBus::new());
        let recorder = Recorder::attach(&bus, EventKind::SortOptionChange);
        let control = SortOptions::new(Rc::clone(&bus), Some(AssetType::Logo));

        control.select_key("size-desc").unwrap();

        assert_eq!(
            recorder.events(),
            vec![GalleryEvent::sort_option_change(SortOption::SizeDesc)]
        );
        assert_eq!(control.selected(), SortOption::SizeDesc);
    }

    #[test]
    fn test_hidden_option_rejected() {
        let bus = Rc::new(EventBus::new());
        let recorder = Recorder::attach(&bus, EventKind::SortOptionChange);
        let control = SortOptions::new(Rc::clone(&bus), Some(AssetType::Color));

        let err = control.select(SortOption::SizeAsc).unwrap_err();

        assert_eq!(
            err,
            ControlError::SortUnavailable {
                sort: SortOption::SizeAsc,
                category: AssetType::Color
            }
        );
        assert!(recorder.events().is_empty());
        assert_eq!(control.selected(), SortOption::NameAsc);
    }

    #[test]
    fn test_no_category_accepts_every_option() {
        let bus = Rc::new(EventBus::new());
        let recorder = Recorder::attach(&bus, EventKind::SortOptionChange);
        let control = SortOptions::new(Rc::clone(&bus), None);

        for sort in SortOption::ALL {
            control.select(sort).unwrap();
        }
        assert_eq!(recorder.events().len(), SortOption::ALL.len());
        assert_eq!(control.selected(), SortOption::SizeDesc);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let control = SortOptions::new(Rc::new(EventBus::new()), None);
        let err = control.select_key("newest").unwrap_err();
        assert_eq!(
            err,
            ControlError::Gallery(GalleryError::InvalidSortOption("newest".to_string()))
        );
    }

    #[test]
    fn test_with_default() {
        let bus = Rc::new(EventBus::new());
        let fonts = SortOptions::new(Rc::clone(&bus), Some(AssetType::Font))
            .with_default(SortOption::SizeDesc);
        assert_eq!(fonts.selected(), SortOption::SizeDesc);

        let colors = SortOptions::new(bus, Some(AssetType::Color)).with_default(SortOption::SizeDesc);
        assert_eq!(colors.selected(), SortOption::NameAsc);
    }
}
