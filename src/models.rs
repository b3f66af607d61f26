//! Serde data model for the microtransaction catalog.
//!
//! Field names match the `Catalog.json` the game server ships, hence the
//! PascalCase renames. Entries are read-only inputs; the builder never
//! mutates or writes them back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One purchasable bundle from the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Numeric stock-keeping-unit identifier.
    #[serde(rename = "SkuId")]
    pub sku_id: i64,
    /// Items granted by the bundle.
    #[serde(rename = "GuidItems", default)]
    pub guid_items: Vec<GuidItem>,
    /// Per-language title/price records; only the first is consumed.
    #[serde(rename = "LocalizedEntries", default)]
    pub localized_entries: Vec<LocalizedCatalogEntry>,
    /// Info-page URLs; only the first is consumed.
    #[serde(rename = "InfoUrls", default)]
    pub info_urls: Vec<String>,
    /// Content-image URLs; only the first is consumed.
    #[serde(rename = "ContentData", default)]
    pub content_data: Vec<String>,
    /// Store grouping metadata carried by the server catalog.
    #[serde(rename = "Type", default)]
    pub entry_type: Option<CatalogEntryType>,
}

impl CatalogEntry {
    /// First info-page URL, when the entry has one.
    pub fn info_url(&self) -> Option<&str> {
        self.info_urls.first().map(String::as_str)
    }

    /// First content-image URL, when the entry has one.
    pub fn content_url(&self) -> Option<&str> {
        self.content_data.first().map(String::as_str)
    }
}

/// Localized presentation fields for a catalog entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedCatalogEntry {
    /// Language identifier, e.g. `en_us`.
    #[serde(rename = "LanguageId", default = "default_language")]
    pub language_id: String,
    /// Bundle title shown on the info page.
    #[serde(rename = "Title")]
    pub title: String,
    /// Longer description; present in the server catalog, unused by rendering.
    #[serde(rename = "Description", default)]
    pub description: String,
    /// Price in the store's virtual currency.
    #[serde(rename = "ItemPrice")]
    pub item_price: i64,
}

fn default_language() -> String {
    "en_us".to_string()
}

/// A granted item reference within a catalog entry.
#[derive(Debug, Clone, Deserialize)]
pub struct GuidItem {
    /// Prototype id the client resolves the item by.
    #[serde(rename = "ItemPrototypeRuntimeIdForClient")]
    pub prototype_id: u64,
    /// Number of copies granted.
    #[serde(rename = "Quantity", default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// Store grouping descriptor attached to catalog entries.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntryType {
    /// Group name, e.g. `Costume` or `Bundle`.
    #[serde(rename = "Name")]
    pub name: String,
    /// Sort order within the store UI.
    #[serde(rename = "Order", default)]
    pub order: i32,
}

/// Load a catalog file containing a JSON array of entries.
///
/// A malformed entry fails the whole load; there is no per-entry recovery.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CatalogEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog at {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse catalog at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_server_catalog_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Catalog.json");
        fs::write(
            &path,
            r#"[{
                "SkuId": 4096,
                "GuidItems": [{"ItemPrototypeRuntimeIdForClient": 10, "Quantity": 3}],
                "LocalizedEntries": [{"LanguageId": "en_us", "Title": "Hero Pack", "ItemPrice": 500}],
                "InfoUrls": ["http://store.example/bundles/HeroPack.html"],
                "ContentData": ["http://store.example/images/MTXStore_Bundle_HeroPack_Thumb.png"],
                "Type": {"Name": "Bundle", "Order": 7}
            }]"#,
        )
        .unwrap();

        let entries = load_catalog(&path).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.sku_id, 4096);
        assert_eq!(entry.guid_items[0].prototype_id, 10);
        assert_eq!(entry.guid_items[0].quantity, 3);
        assert_eq!(entry.localized_entries[0].title, "Hero Pack");
        assert_eq!(entry.localized_entries[0].item_price, 500);
        assert_eq!(entry.info_url(), Some("http://store.example/bundles/HeroPack.html"));
        assert_eq!(entry.entry_type.as_ref().unwrap().name, "Bundle");
    }

    #[test]
    fn optional_lists_default_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Catalog.json");
        fs::write(&path, r#"[{"SkuId": 1}]"#).unwrap();

        let entries = load_catalog(&path).unwrap();
        assert!(entries[0].guid_items.is_empty());
        assert!(entries[0].info_url().is_none());
        assert!(entries[0].content_url().is_none());
    }

    #[test]
    fn quantity_defaults_to_one() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Catalog.json");
        fs::write(
            &path,
            r#"[{"SkuId": 1, "GuidItems": [{"ItemPrototypeRuntimeIdForClient": 5}]}]"#,
        )
        .unwrap();

        let entries = load_catalog(&path).unwrap();
        assert_eq!(entries[0].guid_items[0].quantity, 1);
    }

    #[test]
    fn malformed_catalog_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Catalog.json");
        fs::write(&path, r#"[{"GuidItems": []}]"#).unwrap();

        assert!(load_catalog(&path).is_err());
    }
}
