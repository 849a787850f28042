//! End-to-end tests for the controls, the event bus and the gallery view

mod common;

use brand_gallery::catalog::StaticCatalog;
use brand_gallery::controls::{
    ControlError, FormatFilter, FormatFilterConfig, GalleryView, SortOptions,
};
use brand_gallery::domain::{AssetType, EventKind, FilterState, GalleryEvent, SortOption};
use common::fixtures::create_small_catalog;
use common::{new_bus, EventLog};
use std::rc::Rc;

fn visible_ids(view: &GalleryView) -> Vec<String> {
    view.visible_assets()
        .into_iter()
        .map(|a| a.id.to_string())
        .collect()
}

#[test]
fn test_format_selection_reaches_view() {
    let bus = new_bus();
    let changes = EventLog::attach(&bus, EventKind::FilterChange);
    let view = GalleryView::mount(Rc::clone(&bus), Rc::new(StaticCatalog::new()), None);
    let filter = FormatFilter::mount(
        Rc::clone(&bus),
        view.available_formats(),
        FormatFilterConfig::default(),
    );

    filter.select("PNG").unwrap();

    assert_eq!(
        visible_ids(&view),
        vec!["apple-touch-icon", "favicon-16", "favicon-32"]
    );
    assert_eq!(
        changes.events(),
        vec![GalleryEvent::FilterChange(FilterState::new().with_format("PNG"))]
    );
}

#[test]
fn test_reset_rebroadcasts_empty_format_once() {
    let bus = new_bus();
    let formats = EventLog::attach(&bus, EventKind::FormatFilterChange);
    let view = GalleryView::mount(Rc::clone(&bus), Rc::new(StaticCatalog::new()), None);
    let filter = FormatFilter::mount(
        Rc::clone(&bus),
        view.available_formats(),
        FormatFilterConfig::default(),
    );

    filter.select("SVG").unwrap();
    view.set_search("logo");
    view.reset_filters();

    assert_eq!(
        formats.events(),
        vec![
            GalleryEvent::format_filter_change("SVG"),
            GalleryEvent::format_filter_change(""),
        ]
    );
    assert_eq!(filter.selected(), "all");
    assert!(view.filter_state().is_default());
    assert_eq!(view.visible_assets().len(), 16);
}

#[test]
fn test_reset_can_keep_visible_selection() {
    let bus = new_bus();
    let view = GalleryView::mount(Rc::clone(&bus), Rc::new(StaticCatalog::new()), None);
    let filter = FormatFilter::mount(
        Rc::clone(&bus),
        view.available_formats(),
        FormatFilterConfig {
            reset_clears_selection: false,
        },
    );

    filter.select("SVG").unwrap();
    bus.publish(GalleryEvent::ResetFormatFilter);

    assert_eq!(filter.selected(), "SVG");
    assert!(view.filter_state().format.is_empty());
}

#[test]
fn test_lowercase_format_selects_catalog_label() {
    let bus = new_bus();
    let view = GalleryView::mount(Rc::clone(&bus), Rc::new(StaticCatalog::new()), None);
    let filter = FormatFilter::mount(
        Rc::clone(&bus),
        view.available_formats(),
        FormatFilterConfig::default(),
    );

    filter.select("woff2").unwrap();

    assert_eq!(filter.selected(), "WOFF2");
    assert_eq!(view.filter_state().format, "WOFF2");
    assert_eq!(view.visible_assets().len(), 3);
}

#[test]
fn test_unknown_format_publishes_nothing() {
    let bus = new_bus();
    let formats = EventLog::attach(&bus, EventKind::FormatFilterChange);
    let filter = FormatFilter::mount(Rc::clone(&bus), ["SVG"], FormatFilterConfig::default());

    let err = filter.select("GIF").unwrap_err();

    assert_eq!(err, ControlError::UnknownFormat("GIF".to_string()));
    assert_eq!(formats.len(), 0);
    assert_eq!(filter.selected(), "all");
}

#[test]
fn test_size_desc_publishes_once_and_orders_view() {
    let bus = new_bus();
    let sorts = EventLog::attach(&bus, EventKind::SortOptionChange);
    let view = GalleryView::mount(
        Rc::clone(&bus),
        Rc::new(StaticCatalog::new()),
        Some(AssetType::Logo),
    );
    let sort = SortOptions::new(Rc::clone(&bus), view.scope());

    sort.select(SortOption::SizeDesc).unwrap();

    assert_eq!(sorts.len(), 1);
    assert_eq!(
        visible_ids(&view),
        vec!["logo-dark", "logo-boxed", "logo-monochrome", "logo-brand"]
    );
}

#[test]
fn test_color_sort_control_leaves_view_untouched() {
    let bus = new_bus();
    let changes = EventLog::attach(&bus, EventKind::FilterChange);
    let view = GalleryView::mount(
        Rc::clone(&bus),
        Rc::new(StaticCatalog::new()),
        Some(AssetType::Color),
    );
    let sort = SortOptions::new(Rc::clone(&bus), Some(AssetType::Color));

    assert!(sort.select_key("size-asc").is_err());
    sort.select_key("name-desc").unwrap();

    assert_eq!(
        visible_ids(&view),
        vec![
            "secondary-color",
            "primary-color",
            "neutral-light",
            "neutral-dark",
            "accent-color",
        ]
    );
    assert_eq!(changes.len(), 1);
}

#[test]
fn test_view_over_custom_repository() {
    let bus = new_bus();
    let view = GalleryView::mount(Rc::clone(&bus), Rc::new(create_small_catalog()), None);
    let sort = SortOptions::new(Rc::clone(&bus), None);

    sort.select(SortOption::SizeAsc).unwrap();
    assert_eq!(visible_ids(&view), vec!["badge", "wordmark", "ink"]);

    view.set_search("ink");
    assert_eq!(visible_ids(&view), vec!["ink"]);
}

#[test]
fn test_dropping_controls_releases_listeners() {
    let bus = new_bus();
    {
        let view = GalleryView::mount(Rc::clone(&bus), Rc::new(StaticCatalog::new()), None);
        let _filter = FormatFilter::mount(
            Rc::clone(&bus),
            view.available_formats(),
            FormatFilterConfig::default(),
        );
        assert_eq!(bus.total_listeners(), 3);
    }
    assert_eq!(bus.total_listeners(), 0);

    // Nothing left to rebroadcast the reset
    let formats = EventLog::attach(&bus, EventKind::FormatFilterChange);
    assert_eq!(bus.publish(GalleryEvent::ResetFormatFilter), 0);
    assert_eq!(formats.len(), 0);
}

#[test]
fn test_detached_log_stops_recording() {
    let bus = new_bus();
    let log = EventLog::attach(&bus, EventKind::SortOptionChange);
    bus.publish(GalleryEvent::sort_option_change(SortOption::NameDesc));
    assert_eq!(log.len(), 1);

    log.detach(&bus);
    assert_eq!(bus.listener_count(EventKind::SortOptionChange), 0);
}

#[test]
fn test_signals_use_dom_event_names() {
    let events = [
        (
            GalleryEvent::format_filter_change("PNG"),
            "format-filter-change",
        ),
        (
            GalleryEvent::sort_option_change(SortOption::SizeAsc),
            "sort-option-change",
        ),
        (GalleryEvent::ResetFormatFilter, "reset-format-filter"),
        (GalleryEvent::FilterChange(FilterState::new()), "filterchange"),
    ];
    for (event, name) in events {
        assert_eq!(event.event_name(), name);
        let json: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        assert_eq!(json["type"], name);
    }
}
