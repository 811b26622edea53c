//! Localization settings: the configured list of table sources.
//!
//! Settings can be assembled in code with [`LocalizationSettings::builder`]
//! or read from a JSON [`TableManifest`].

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::culture::Culture;
use crate::error::{ManifestError, TableLoadError};
use crate::pool::TablePool;
use crate::source::{TableSlot, TableSource};
use crate::types::{LocaleTag, LocalizationTable};

/// The ordered list of table sources a [`Localization`](crate::Localization)
/// resolves against.
///
/// # Example
///
/// ```
/// use loctab::{LocalizationSettings, LocalizationTable};
/// use std::sync::Arc;
///
/// let mut settings = LocalizationSettings::new();
/// settings.add_table(Arc::new(LocalizationTable::new("en")));
/// settings.add_table(Arc::new(LocalizationTable::new("fr")));
/// assert_eq!(settings.len(), 2);
/// ```
#[derive(Clone, Default, Builder)]
pub struct LocalizationSettings {
    /// Sources in configuration order.
    #[builder(default)]
    tables: Vec<Arc<dyn TableSource>>,
}

impl LocalizationSettings {
    /// Create settings with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source to the end of the list.
    pub fn add_table(&mut self, source: impl TableSource + 'static) {
        self.tables.push(Arc::new(source));
    }

    /// The configured sources, in order.
    pub fn tables(&self) -> &[Arc<dyn TableSource>] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Load every configured source into a fresh pool.
    ///
    /// Blocks while any source has a load in flight.
    pub fn build_pool(&self) -> TablePool {
        TablePool::build(self.tables.iter().map(Arc::as_ref))
    }
}

impl Debug for LocalizationSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let labels: Vec<&str> = self
            .tables
            .iter()
            .map(|source| source.label().unwrap_or("<unnamed>"))
            .collect();
        f.debug_struct("LocalizationSettings")
            .field("tables", &labels)
            .finish()
    }
}

/// Availability of a table described in a manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    /// Loaded and usable.
    #[default]
    Ready,
    /// Not loaded yet.
    Pending,
    /// Failed to load.
    Failed,
}

/// One table entry in a [`TableManifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub locale: LocaleTag,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub entries: HashMap<String, String>,
    #[serde(default)]
    pub status: TableStatus,
}

impl TableDefinition {
    fn into_source(self) -> TableSlot {
        let label = self
            .name
            .clone()
            .unwrap_or_else(|| self.locale.to_string());
        match self.status {
            TableStatus::Ready => TableSlot::ready(
                LocalizationTable::builder()
                    .locale(self.locale)
                    .maybe_name(self.name)
                    .entries(self.entries)
                    .build(),
            ),
            TableStatus::Pending => TableSlot::named(label),
            TableStatus::Failed => TableSlot::failed(TableLoadError::Failed {
                source_name: label,
                reason: "marked as failed in manifest".to_string(),
            }),
        }
    }
}

/// Serialized form of localization settings.
///
/// ```json
/// {
///   "language": "en-GB",
///   "tables": [
///     { "locale": "en", "name": "menus", "entries": { "quit": "Quit" } },
///     { "locale": "fr", "name": "menus", "status": "pending" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableManifest {
    /// Preferred language, if the manifest pins one.
    #[serde(default)]
    pub language: Option<String>,

    /// Tables in configuration order.
    #[serde(default)]
    pub tables: Vec<TableDefinition>,
}

impl TableManifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(content: &str) -> Result<TableManifest, ManifestError> {
        Ok(serde_json::from_str(content)?)
    }

    /// The preferred language, parsed.
    pub fn language(&self) -> Result<Option<Culture>, ManifestError> {
        match &self.language {
            Some(raw) => Ok(Some(Culture::parse(raw)?)),
            None => Ok(None),
        }
    }

    /// Turn the table definitions into settings, preserving order.
    pub fn into_settings(self) -> LocalizationSettings {
        let mut settings = LocalizationSettings::new();
        for definition in self.tables {
            settings.add_table(definition.into_source());
        }
        settings
    }
}
