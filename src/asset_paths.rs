//! Output path derivation and thumbnail label extraction.
//!
//! Output identity is the basename of a catalog URL: two entries sharing a
//! basename overwrite each other's output, and no deduplication is
//! attempted.

use std::path::{Path, PathBuf};

/// Last path segment of a URL, used as the output file name.
///
/// Query strings and fragments are not expected in catalog URLs and are not
/// stripped.
pub fn url_basename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Derive the overlay label for a thumbnail from its target basename.
///
/// The extension is removed first, then each marker substring is removed in
/// configuration order. When no marker matches, the label is simply the
/// extension-less basename.
pub fn derive_label(basename: &str, strip_markers: &[String]) -> String {
    let stem = Path::new(basename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| basename.to_string());

    strip_markers
        .iter()
        .fold(stem, |label, marker| label.replace(marker.as_str(), ""))
}

/// Resolved output directories for one build run.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
    images_dir: PathBuf,
    css_dir: PathBuf,
}

impl OutputLayout {
    /// Build the layout from the configured output root and subdirectory names.
    pub fn new(output_dir: &str, images_dir_name: &str, css_dir_name: &str) -> Self {
        let root = PathBuf::from(output_dir);
        let images_dir = root.join(images_dir_name);
        let css_dir = root.join(css_dir_name);
        Self {
            root,
            images_dir,
            css_dir,
        }
    }

    /// Destination of an info page named after its source URL.
    pub fn page_path(&self, info_url: &str) -> PathBuf {
        self.root.join(url_basename(info_url))
    }

    /// Destination of a thumbnail image named after its source URL.
    pub fn image_path(&self, content_url: &str) -> PathBuf {
        self.images_dir.join(url_basename(content_url))
    }

    /// Destination of the copied stylesheet.
    pub fn stylesheet_path(&self, stylesheet: &Path) -> PathBuf {
        let name = stylesheet
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("store.css"));
        self.css_dir.join(name)
    }

    /// Root of the generated tree.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
