//! Built-in brand asset data
//!
//! The gallery ships with a fixed catalog compiled into the binary. Each
//! function builds a fresh copy of one category's assets in display order.

use brand_gallery_core::{Asset, AssetType, AssetVariant, Category, ColorValues};

/// The four navigation categories
pub fn categories() -> Vec<Category> {
    vec![
        Category::for_type(
            AssetType::Logo,
            "Logos",
            "Company logos in various formats and orientations",
            "ImageIcon",
        ),
        Category::for_type(
            AssetType::Favicon,
            "Favicons",
            "Website favicons in different sizes and formats",
            "FileIcon",
        ),
        Category::for_type(
            AssetType::Color,
            "Colors",
            "Brand color palette with hex, RGB, and HSL values",
            "PaletteIcon",
        ),
        Category::for_type(
            AssetType::Font,
            "Fonts",
            "Company fonts in various weights and styles",
            "TypeIcon",
        ),
    ]
}

fn png_variants(stem: &str, large: &str, small: &str) -> [AssetVariant; 2] {
    [
        AssetVariant::new("PNG (Large)", format!("/assets/logos/{}-large.png", stem))
            .with_dimensions(large),
        AssetVariant::new("PNG (Small)", format!("/assets/logos/{}-small.png", stem))
            .with_dimensions(small),
    ]
}

#[allow(clippy::too_many_arguments)]
fn logo(
    id: &str,
    name: &str,
    file: &str,
    size: &str,
    dimensions: &str,
    tags: &[&str],
    description: &str,
    variants: [AssetVariant; 2],
) -> Asset {
    let [large, small] = variants;
    Asset::builder(id, name, AssetType::Logo, "SVG", format!("/assets/logos/{}", file))
        .file_size(size)
        .dimensions(dimensions)
        .tags(tags.iter().copied())
        .description(description)
        .variant(large)
        .variant(small)
        .build_unchecked()
}

pub fn logo_assets() -> Vec<Asset> {
    vec![
        logo(
            "logo-brand",
            "Brand Logo",
            "logo-brand.svg",
            "292B",
            "240x240",
            &["brand", "color", "primary"],
            "Primary brand logo for use on light backgrounds",
            png_variants("primary-logo", "1200x400", "600x200"),
        ),
        logo(
            "logo-monochrome",
            "Monochrome Logo",
            "logo-mono.svg",
            "20KB",
            "240x80",
            &["monochrome", "black", "secondary"],
            "Monochrome logo for use on colored backgrounds",
            png_variants("monochrome-logo", "1200x400", "600x200"),
        ),
        logo(
            "logo-dark",
            "Dark Logo",
            "logo-dark.svg",
            "22KB",
            "120x160",
            &["dark", "white"],
            "White logo for use in dark mode",
            png_variants("vertical-logo", "600x800", "300x400"),
        ),
        logo(
            "logo-boxed",
            "Boxed Logo",
            "logo-boxed.svg",
            "22KB",
            "120x160",
            &["vertical", "color", "stacked"],
            "Brand logo boxed in white",
            png_variants("vertical-logo", "600x800", "300x400"),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn favicon(
    id: &str,
    name: &str,
    file: &str,
    format: &str,
    size: &str,
    dimensions: &str,
    tags: &[&str],
    description: &str,
) -> Asset {
    Asset::builder(id, name, AssetType::Favicon, format, format!("/assets/favicons/{}", file))
        .file_size(size)
        .dimensions(dimensions)
        .tags(tags.iter().copied())
        .description(description)
        .build_unchecked()
}

pub fn favicon_assets() -> Vec<Asset> {
    vec![
        favicon(
            "favicon-ico",
            "Favicon ICO",
            "favicon.ico",
            "ICO",
            "16KB",
            "Multiple sizes",
            &["ico", "standard"],
            "Standard ICO favicon with multiple sizes embedded",
        ),
        favicon(
            "favicon-16",
            "Favicon 16x16",
            "favicon-16x16.png",
            "PNG",
            "1KB",
            "16x16",
            &["png", "small"],
            "Small 16x16 favicon for older browsers",
        ),
        favicon(
            "favicon-32",
            "Favicon 32x32",
            "favicon-32x32.png",
            "PNG",
            "2KB",
            "32x32",
            &["png", "medium"],
            "Medium 32x32 favicon for modern browsers",
        ),
        favicon(
            "apple-touch-icon",
            "Apple Touch Icon",
            "apple-touch-icon.png",
            "PNG",
            "6KB",
            "180x180",
            &["apple", "touch", "ios"],
            "Apple Touch Icon for iOS devices",
        ),
    ]
}

fn color(id: &str, name: &str, file: &str, tags: &[&str], description: &str, values: ColorValues) -> Asset {
    Asset::builder(id, name, AssetType::Color, "Color", format!("/assets/colors/{}", file))
        .tags(tags.iter().copied())
        .description(description)
        .color_values(values)
        .build_unchecked()
}

pub fn color_assets() -> Vec<Asset> {
    vec![
        color(
            "primary-color",
            "Primary Blue",
            "primary-blue.svg",
            &["primary", "blue"],
            "Primary brand color for main UI elements",
            ColorValues::new("#0066CC", "rgb(0, 102, 204)", "hsl(210, 100%, 40%)"),
        ),
        color(
            "secondary-color",
            "Secondary Teal",
            "secondary-teal.svg",
            &["secondary", "teal"],
            "Secondary brand color for accents and highlights",
            ColorValues::new("#00CCAA", "rgb(0, 204, 170)", "hsl(170, 100%, 40%)"),
        ),
        color(
            "accent-color",
            "Accent Orange",
            "accent-orange.svg",
            &["accent", "orange"],
            "Accent color for calls to action and important elements",
            ColorValues::new("#FF6633", "rgb(255, 102, 51)", "hsl(15, 100%, 60%)"),
        ),
        color(
            "neutral-dark",
            "Neutral Dark",
            "neutral-dark.svg",
            &["neutral", "dark", "text"],
            "Dark neutral color for text and UI elements",
            ColorValues::new("#333333", "rgb(51, 51, 51)", "hsl(0, 0%, 20%)"),
        ),
        color(
            "neutral-light",
            "Neutral Light",
            "neutral-light.svg",
            &["neutral", "light", "background"],
            "Light neutral color for backgrounds and UI elements",
            ColorValues::new("#F5F5F5", "rgb(245, 245, 245)", "hsl(0, 0%, 96%)"),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn font(
    id: &str,
    name: &str,
    stem: &str,
    size: &str,
    tags: &[&str],
    description: &str,
    weights: &[&str],
    styles: &[&str],
) -> Asset {
    Asset::builder(id, name, AssetType::Font, "WOFF2", format!("/assets/fonts/{}.woff2", stem))
        .file_size(size)
        .preview_url(format!("/assets/fonts/{}-preview.svg", stem))
        .tags(tags.iter().copied())
        .description(description)
        .font_weights(weights.iter().copied())
        .font_styles(styles.iter().copied())
        .build_unchecked()
}

pub fn font_assets() -> Vec<Asset> {
    vec![
        font(
            "primary-font",
            "Montserrat",
            "montserrat",
            "120KB",
            &["primary", "sans-serif"],
            "Primary sans-serif font for headings and UI elements",
            &["400", "500", "600", "700"],
            &["normal", "italic"],
        ),
        font(
            "secondary-font",
            "Merriweather",
            "merriweather",
            "135KB",
            &["secondary", "serif"],
            "Secondary serif font for body text and long-form content",
            &["300", "400", "700"],
            &["normal", "italic"],
        ),
        font(
            "monospace-font",
            "Fira Code",
            "fira-code",
            "95KB",
            &["monospace", "code"],
            "Monospace font for code snippets and technical content",
            &["400", "500"],
            &["normal"],
        ),
    ]
}
