//! Orchestration of a full asset build run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::asset_paths::{OutputLayout, derive_label, url_basename};
use crate::config::BuilderConfig;
use crate::models::load_catalog;
use crate::names::NameTable;
use crate::render::{PageTemplate, ThumbnailAssets, install_stylesheet};

/// Paths of every asset generated by one run, in generation order.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    /// Generated HTML info pages.
    pub pages: Vec<PathBuf>,
    /// Generated thumbnail images.
    pub images: Vec<PathBuf>,
    /// Installed stylesheet destination.
    pub stylesheet: PathBuf,
}

/// One-shot builder turning catalog files into a static asset tree.
///
/// All inputs are loaded up front, so a missing or unreadable input fails
/// before any output is written. A malformed catalog entry mid-run is fatal
/// and leaves already-written outputs on disk; re-running over unchanged
/// inputs rewrites every file with identical bytes.
pub struct StoreAssetBuilder {
    config: BuilderConfig,
}

impl StoreAssetBuilder {
    /// Create a builder for the given configuration.
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Process every configured catalog and emit the asset tree.
    pub fn build(&self) -> Result<BuildSummary> {
        let config = &self.config;
        let names = NameTable::load(&config.name_table_path, config.name_fallback)?;
        let template = PageTemplate::load(&config.page_template_path)?;
        let thumbnails = ThumbnailAssets::load(
            Path::new(&config.thumbnail_template_path),
            Path::new(&config.font_path),
            config.font_px,
        )?;
        let layout = OutputLayout::new(
            &config.output_dir,
            &config.images_dir_name,
            &config.css_dir_name,
        );

        let mut pages = Vec::new();
        let mut images = Vec::new();

        for catalog_path in &config.catalog_paths {
            let entries = load_catalog(catalog_path)?;

            for entry in &entries {
                if let Some(info_url) = entry.info_url() {
                    let destination = layout.page_path(info_url);
                    let html = template.render(entry, &names)?;
                    write_output(&destination, html.as_bytes())?;
                    report(&destination);
                    pages.push(destination);
                }

                if let Some(content_url) = entry.content_url() {
                    let destination = layout.image_path(content_url);
                    let label =
                        derive_label(url_basename(content_url), &config.label_strip_markers);
                    let thumb = thumbnails.render(&label);
                    if let Some(parent) = destination.parent() {
                        fs::create_dir_all(parent)
                            .with_context(|| format!("failed to create {}", parent.display()))?;
                    }
                    thumb
                        .save(&destination)
                        .with_context(|| format!("failed to save {}", destination.display()))?;
                    report(&destination);
                    images.push(destination);
                }
            }
        }

        let stylesheet_source = Path::new(&config.stylesheet_path);
        let stylesheet = layout.stylesheet_path(stylesheet_source);
        install_stylesheet(stylesheet_source, &stylesheet)?;
        report(&stylesheet);

        Ok(BuildSummary {
            pages,
            images,
            stylesheet,
        })
    }
}

fn write_output(destination: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(destination, bytes)
        .with_context(|| format!("failed to write {}", destination.display()))
}

/// Progress line for one generated asset.
fn report(destination: &Path) {
    println!("{}", destination.display());
}
