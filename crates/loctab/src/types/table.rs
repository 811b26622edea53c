use std::collections::HashMap;

use bon::Builder;

use super::LocaleTag;

/// A loaded set of translated strings for exactly one locale.
///
/// Tables are produced by a [`TableSource`](crate::TableSource) and shared as
/// `Arc<LocalizationTable>`; resolution only reads their locale and passes
/// the handle through to the active set.
///
/// # Example
///
/// ```
/// use loctab::LocalizationTable;
/// use std::collections::HashMap;
///
/// let table = LocalizationTable::builder()
///     .locale("en_GB")
///     .name("menus")
///     .entries(HashMap::from([("quit".to_string(), "Quit".to_string())]))
///     .build();
///
/// assert_eq!(table.locale().as_str(), "en-GB");
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct LocalizationTable {
    /// Locale this table translates into.
    #[builder(into)]
    locale: LocaleTag,

    /// Human-readable asset name, used in log output and the CLI.
    #[builder(into)]
    name: Option<String>,

    /// Message id to translated text.
    #[builder(default)]
    entries: HashMap<String, String>,
}

impl LocalizationTable {
    /// Create an empty table for a locale.
    pub fn new(locale: impl Into<LocaleTag>) -> Self {
        LocalizationTable::builder().locale(locale).build()
    }

    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of translated items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only access to the translated items.
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    /// Name for log output: the asset name, or the locale when unnamed.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.locale.as_str())
    }
}
