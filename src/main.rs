//! CLI entry point for the store asset builder.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use store_asset_builder::{BuilderConfig, StoreAssetBuilder};

/// Generate store info pages, thumbnails and stylesheets from catalog files.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a builder configuration JSON file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured output directory.
    #[arg(long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => BuilderConfig::from_path(path)?,
        None => BuilderConfig::default(),
    };
    if let Some(output) = cli.output {
        config.output_dir = output;
    }

    let summary = StoreAssetBuilder::new(config).build()?;
    eprintln!(
        "generated {} pages and {} thumbnails under {}",
        summary.pages.len(),
        summary.images.len(),
        summary
            .stylesheet
            .parent()
            .and_then(|css| css.parent())
            .unwrap_or_else(|| summary.stylesheet.as_path())
            .display()
    );

    Ok(())
}
