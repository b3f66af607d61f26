//! HTML info page rendering via placeholder substitution.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use regex::Regex;

use crate::models::CatalogEntry;
use crate::names::NameTable;

/// Placeholder names the template may reference.
const PLACEHOLDERS: [&str; 4] = ["TITLE", "ITEMS", "SKU_ID", "PRICE"];

/// Stateless HTML template reused for every catalog entry.
///
/// Placeholders use the `%NAME%` form: `%TITLE%`, `%ITEMS%`, `%SKU_ID%` and
/// `%PRICE%`. A placeholder outside that set fails template loading rather
/// than passing through into generated pages.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    text: String,
}

impl PageTemplate {
    /// Load and validate the template file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read page template at {}", path.display()))?;
        Self::from_text(text)
            .with_context(|| format!("invalid page template at {}", path.display()))
    }

    /// Validate a template string.
    pub fn from_text(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let pattern = Regex::new(r"%([A-Z_]+)%").expect("invalid placeholder regex");
        for caps in pattern.captures_iter(&text) {
            let name = &caps[1];
            if !PLACEHOLDERS.contains(&name) {
                return Err(anyhow!("unknown template placeholder %{name}%"));
            }
        }
        Ok(Self { text })
    }

    /// Render the info page for one catalog entry.
    ///
    /// The entry must carry at least one localized entry; an info URL with no
    /// localization is malformed catalog data and aborts the run.
    pub fn render(&self, entry: &CatalogEntry, names: &NameTable) -> Result<String> {
        let localized = entry.localized_entries.first().ok_or_else(|| {
            anyhow!(
                "catalog entry with sku id {} has an info url but no localized entries",
                entry.sku_id
            )
        })?;

        let mut items = Vec::with_capacity(entry.guid_items.len());
        for item in &entry.guid_items {
            let name = names.resolve(item.prototype_id).with_context(|| {
                format!(
                    "failed to resolve item name for catalog entry with sku id {}",
                    entry.sku_id
                )
            })?;
            items.push(format_item_line(&name, item.quantity));
        }

        Ok(self
            .text
            .replace("%TITLE%", &localized.title)
            .replace("%ITEMS%", &items.join("\n"))
            .replace("%SKU_ID%", &format_sku_id(entry.sku_id))
            .replace("%PRICE%", &localized.item_price.to_string()))
    }
}

/// Format one granted item as an HTML list element.
///
/// Quantity 1 never shows a multiplier; any other value appends ` x<q>`.
fn format_item_line(name: &str, quantity: i64) -> String {
    if quantity == 1 {
        format!("<li>{name}</li>")
    } else {
        format!("<li>{name} x{quantity}</li>")
    }
}

/// Format a SKU id as uppercase hex with a `0x` prefix.
fn format_sku_id(sku_id: i64) -> String {
    format!("0x{sku_id:X}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NameFallback;
    use crate::models::load_catalog;
    use std::fs;
    use tempfile::tempdir;

    const TEMPLATE: &str = "<h1>%TITLE%</h1>\n<ul>\n%ITEMS%\n</ul>\n<p>SKU: %SKU_ID%</p>\n<p>Price: %PRICE%</p>\n";

    fn fixture_entry(dir: &Path) -> CatalogEntry {
        let path = dir.join("Catalog.json");
        fs::write(
            &path,
            r#"[{
                "SkuId": 4096,
                "GuidItems": [{"ItemPrototypeRuntimeIdForClient": 10, "Quantity": 3}],
                "LocalizedEntries": [{"Title": "Hero Pack", "ItemPrice": 500}],
                "InfoUrls": ["http://store.example/bundles/HeroPack.html"]
            }]"#,
        )
        .unwrap();
        load_catalog(&path).unwrap().remove(0)
    }

    fn name_table(dir: &Path, fallback: NameFallback) -> NameTable {
        let path = dir.join("names.tsv");
        fs::write(&path, "10\tPotion\n").unwrap();
        NameTable::load(&path, fallback).unwrap()
    }

    #[test]
    fn renders_all_placeholders() {
        let dir = tempdir().unwrap();
        let entry = fixture_entry(dir.path());
        let names = name_table(dir.path(), NameFallback::Strict);

        let template = PageTemplate::from_text(TEMPLATE).unwrap();
        let html = template.render(&entry, &names).unwrap();

        assert!(html.contains("<h1>Hero Pack</h1>"));
        assert!(html.contains("<li>Potion x3</li>"));
        assert!(html.contains("SKU: 0x1000"));
        assert!(html.contains("Price: 500"));
    }

    #[test]
    fn quantity_one_has_no_suffix() {
        assert_eq!(format_item_line("Potion", 1), "<li>Potion</li>");
        assert_eq!(format_item_line("Potion", 2), "<li>Potion x2</li>");
        assert_eq!(format_item_line("Potion", 0), "<li>Potion x0</li>");
    }

    #[test]
    fn sku_id_renders_as_prefixed_uppercase_hex() {
        assert_eq!(format_sku_id(255), "0xFF");
        assert_eq!(format_sku_id(4096), "0x1000");
        assert_eq!(format_sku_id(0), "0x0");
    }

    #[test]
    fn unknown_placeholder_fails_template_load() {
        let err = PageTemplate::from_text("<p>%BOGUS%</p>").unwrap_err();
        assert!(err.to_string().contains("%BOGUS%"));
    }

    #[test]
    fn missing_localization_is_malformed() {
        let dir = tempdir().unwrap();
        let mut entry = fixture_entry(dir.path());
        entry.localized_entries.clear();
        let names = name_table(dir.path(), NameFallback::Strict);

        let template = PageTemplate::from_text(TEMPLATE).unwrap();
        let err = template.render(&entry, &names).unwrap_err();
        assert!(err.to_string().contains("no localized entries"));
    }

    #[test]
    fn strict_lookup_miss_propagates() {
        let dir = tempdir().unwrap();
        let mut entry = fixture_entry(dir.path());
        entry.guid_items[0].prototype_id = 99;
        let names = name_table(dir.path(), NameFallback::Strict);

        let template = PageTemplate::from_text(TEMPLATE).unwrap();
        assert!(template.render(&entry, &names).is_err());
    }

    #[test]
    fn fallback_lookup_miss_uses_raw_id() {
        let dir = tempdir().unwrap();
        let mut entry = fixture_entry(dir.path());
        entry.guid_items[0].prototype_id = 99;
        let names = name_table(dir.path(), NameFallback::PrototypeId);

        let template = PageTemplate::from_text(TEMPLATE).unwrap();
        let html = template.render(&entry, &names).unwrap();
        assert!(html.contains("<li>99 x3</li>"));
    }
}
