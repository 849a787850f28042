//! Brand gallery command-line driver
//!
//! Runs the headless gallery (catalog, bus, controls, view) for one query and
//! prints the result as JSON on stdout.

mod config;
mod telemetry;

use anyhow::{Context, Result};
use brand_gallery_catalog::{
    distinct_formats, get_all_assets, get_asset_by_id, get_assets_by_type, get_categories,
    search_assets, StaticCatalog,
};
use brand_gallery_controls::{EventBus, FormatFilter, GalleryView, SortOptions};
use brand_gallery_core::{AssetType, SortOption};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::rc::Rc;
use tracing::{debug, info};

use config::AppConfig;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration directory
    #[arg(short, long, env = "CONFIG_DIR", default_value = "config")]
    config_dir: String,

    /// Environment (development, production, etc.)
    #[arg(short, long, env = "ENVIRONMENT", default_value = "development")]
    environment: String,

    /// Log level
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List navigation categories
    Categories,

    /// List assets through the gallery controls
    List {
        /// Restrict to one asset type (logo, favicon, color, font)
        #[arg(long = "type")]
        asset_type: Option<AssetType>,

        /// Format label to filter on, or "all" (case-insensitive)
        #[arg(long)]
        format: Option<String>,

        /// Sort key (name-asc, name-desc, size-asc, size-desc)
        #[arg(long)]
        sort: Option<SortOption>,

        /// Free-text search
        #[arg(long)]
        search: Option<String>,
    },

    /// Search names, descriptions and tags
    Search { query: String },

    /// Show one asset by id
    Show { id: String },

    /// List distinct format labels
    Formats {
        #[arg(long = "type")]
        asset_type: Option<AssetType>,
    },
}

fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = AppConfig::load_or_default(&args.config_dir, &args.environment);
    if let Some(log_level) = args.log_level {
        config.logging.level = log_level;
    }

    telemetry::init_with_config(telemetry::TelemetryConfig::from(&config.logging));

    info!(environment = %args.environment, "Starting brand gallery");
    debug!(?config, "Configuration loaded");

    match args.command {
        Command::Categories => print_json(&get_categories()),
        Command::List {
            asset_type,
            format,
            sort,
            search,
        } => run_list(&config, asset_type, format, sort, search),
        Command::Search { query } => print_json(&search_assets(&query)),
        Command::Show { id } => {
            let asset = get_asset_by_id(&id).with_context(|| format!("Asset not found: {}", id))?;
            print_json(&asset)
        }
        Command::Formats { asset_type } => {
            let assets = match asset_type {
                Some(asset_type) => get_assets_by_type(asset_type),
                None => get_all_assets(),
            };
            print_json(&distinct_formats(&assets))
        }
    }
}

/// Mount a view and its controls on a fresh bus, drive them, print the view
fn run_list(
    config: &AppConfig,
    asset_type: Option<AssetType>,
    format: Option<String>,
    sort: Option<SortOption>,
    search: Option<String>,
) -> Result<()> {
    let bus = Rc::new(EventBus::new());
    let view = GalleryView::mount(Rc::clone(&bus), Rc::new(StaticCatalog::new()), asset_type);
    let format_filter = FormatFilter::mount(
        Rc::clone(&bus),
        view.available_formats(),
        config.gallery.format_filter(),
    );
    let sort_options =
        SortOptions::new(Rc::clone(&bus), asset_type).with_default(config.gallery.default_sort);

    sort_options
        .select(sort.unwrap_or(sort_options.selected()))
        .context("Invalid sort option")?;
    if let Some(format) = format {
        format_filter
            .select(&format)
            .with_context(|| format!("Format {} not available", format))?;
    }
    if let Some(search) = search {
        view.set_search(search);
    }

    print_json(&view.visible_assets())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{}", json);
    Ok(())
}
