//! View queries: turning a `FilterState` into the list a gallery shows

use brand_gallery_core::{Asset, FilterState, SortOption};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use tracing::debug;

static SIZE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*(B|KB|MB|GB)\s*$").expect("size label pattern is valid")
});

/// Parse a file-size label such as `292B`, `20KB` or `1.5MB` into bytes
///
/// Units are binary (1KB = 1024B). Returns `None` for anything else.
pub fn parse_size_label(label: &str) -> Option<u64> {
    let caps = SIZE_LABEL.captures(label)?;
    let value: f64 = caps[1].parse().ok()?;
    let multiplier = match caps[2].to_ascii_uppercase().as_str() {
        "B" => 1.0,
        "KB" => 1024.0,
        "MB" => 1024.0 * 1024.0,
        "GB" => 1024.0 * 1024.0 * 1024.0,
        _ => return None,
    };
    Some((value * multiplier).round() as u64)
}

/// Size of an asset in bytes, when its label is parsable
pub fn asset_size_bytes(asset: &Asset) -> Option<u64> {
    asset.file_size.as_deref().and_then(parse_size_label)
}

/// Format labels in first-seen order, duplicates removed
pub fn distinct_formats(assets: &[Asset]) -> Vec<String> {
    let mut formats: Vec<String> = Vec::new();
    for asset in assets {
        if !formats.iter().any(|f| f == &asset.format) {
            formats.push(asset.format.clone());
        }
    }
    formats
}

/// Narrow and order `assets` according to `state`
///
/// Search works as in [`AssetRepository::search`](crate::AssetRepository::search).
/// The format filter compares labels ignoring ASCII case; an empty format
/// keeps everything. Sorting is stable. For size orders, assets without a
/// parsable size go last in both directions.
pub fn apply_filter(assets: Vec<Asset>, state: &FilterState) -> Vec<Asset> {
    let mut visible: Vec<Asset> = assets
        .into_iter()
        .filter(|a| state.search.is_empty() || a.matches_query(&state.search))
        .filter(|a| !state.has_format() || a.format.eq_ignore_ascii_case(&state.format))
        .collect();

    sort_assets(&mut visible, state.sort);
    debug!(
        count = visible.len(),
        search = %state.search,
        format = %state.format,
        sort = %state.sort,
        "Applied filter"
    );
    visible
}

/// Stable in-place sort by the given option
pub fn sort_assets(assets: &mut Vec<Asset>, sort: SortOption) {
    match sort {
        SortOption::NameAsc => assets.sort_by(|a, b| compare_names(a, b)),
        SortOption::NameDesc => assets.sort_by(|a, b| compare_names(b, a)),
        SortOption::SizeAsc | SortOption::SizeDesc => {
            let descending = sort.is_descending();
            let mut keyed: Vec<(Option<u64>, Asset)> = assets
                .drain(..)
                .map(|a| (asset_size_bytes(&a), a))
                .collect();
            keyed.sort_by(|(x, _), (y, _)| compare_sizes(*x, *y, descending));
            assets.extend(keyed.into_iter().map(|(_, a)| a));
        }
    }
}

fn compare_names(a: &Asset, b: &Asset) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn compare_sizes(x: Option<u64>, y: Option<u64>, descending: bool) -> Ordering {
    match (x, y) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
