//! Builder configuration describing input files and output layout.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Policy applied when a prototype id is missing from the name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameFallback {
    /// A missing id aborts the run with an error naming the id.
    #[default]
    Strict,
    /// A missing id silently resolves to the raw prototype id string.
    PrototypeId,
}

/// Configuration for a store asset build run.
///
/// Defaults carry the paths the tool historically hardcoded, so an empty
/// configuration file behaves like the original script.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Catalog JSON files to process, in order.
    pub catalog_paths: Vec<String>,
    /// Tab-separated prototype-id/display-name lookup table.
    pub name_table_path: String,
    /// HTML template with `%TITLE%`, `%ITEMS%`, `%SKU_ID%` and `%PRICE%` placeholders.
    pub page_template_path: String,
    /// Template image cloned for every generated thumbnail.
    pub thumbnail_template_path: String,
    /// TrueType/OpenType font used to draw thumbnail labels.
    pub font_path: String,
    /// Stylesheet copied verbatim into the output tree.
    pub stylesheet_path: String,
    /// Root directory of the generated asset tree.
    pub output_dir: String,
    /// Subdirectory of `output_dir` receiving thumbnail images.
    pub images_dir_name: String,
    /// Subdirectory of `output_dir` receiving the stylesheet.
    pub css_dir_name: String,
    /// Behavior on a name-table miss.
    pub name_fallback: NameFallback,
    /// Marker substrings removed, in order, when deriving a thumbnail label.
    pub label_strip_markers: Vec<String>,
    /// Pixel height of the thumbnail label text.
    pub font_px: f32,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            catalog_paths: vec!["data/Catalog.json".into()],
            name_table_path: "data/ItemNames.tsv".into(),
            page_template_path: "data/bundle_info.html".into(),
            thumbnail_template_path: "data/bundle_thumb.png".into(),
            font_path: "data/store_font.ttf".into(),
            stylesheet_path: "data/store.css".into(),
            output_dir: "bundles".into(),
            images_dir_name: "images".into(),
            css_dir_name: "css".into(),
            name_fallback: NameFallback::default(),
            label_strip_markers: vec![
                "MTXStore_".into(),
                "StoreBundle_".into(),
                "Bundle_".into(),
                "_Thumb".into(),
            ],
            font_px: 24.0,
        }
    }
}

impl BuilderConfig {
    /// Read configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }
}
