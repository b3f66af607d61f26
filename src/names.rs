//! Prototype-id to display-name lookup table.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::config::NameFallback;

/// Read-only mapping from prototype id to display name, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: BTreeMap<String, String>,
    fallback: NameFallback,
}

impl NameTable {
    /// Load the table from a tab-separated file with `id<TAB>name` rows.
    ///
    /// Blank lines are skipped; a later row for the same id replaces the
    /// earlier one. A row without a tab separator is malformed input.
    pub fn load(path: impl AsRef<Path>, fallback: NameFallback) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read name table at {}", path.display()))?;

        let mut names = BTreeMap::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (id, name) = line.split_once('\t').ok_or_else(|| {
                anyhow!(
                    "name table row {} in {} is missing a tab separator",
                    index + 1,
                    path.display()
                )
            })?;
            names.insert(id.to_string(), name.to_string());
        }

        Ok(Self { names, fallback })
    }

    /// Resolve the display name for a prototype id.
    ///
    /// Under [`NameFallback::Strict`] a missing id is an error; under
    /// [`NameFallback::PrototypeId`] the raw id string is returned instead.
    pub fn resolve(&self, prototype_id: u64) -> Result<String> {
        let key = prototype_id.to_string();
        match self.names.get(&key) {
            Some(name) => Ok(name.clone()),
            None => match self.fallback {
                NameFallback::Strict => {
                    Err(anyhow!("no display name for prototype id {key}"))
                }
                NameFallback::PrototypeId => Ok(key),
            },
        }
    }

    /// Number of loaded name rows.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table contains no rows.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
