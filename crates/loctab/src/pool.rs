//! Table pool: loaded tables grouped into per-locale buckets.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::source::{TableLoad, TableSource};
use crate::types::{LocaleTag, LocalizationTable};

/// Snapshot of every loadable table, grouped by locale.
///
/// A pool is always built from scratch by [`TablePool::build`]; it is never
/// patched, so it reflects exactly the source list it was built from.
/// Within a bucket, tables keep the order their sources were configured in.
#[derive(Debug, Clone, Default)]
pub struct TablePool {
    buckets: HashMap<LocaleTag, Vec<Arc<LocalizationTable>>>,
    skipped: usize,
}

impl TablePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every source in order and group the results by locale.
    ///
    /// Calls [`TableSource::load`] on each source, which may block until an
    /// in-flight load finishes. Sources that are pending or failed are left
    /// out of this pool.
    pub fn build<'a, I, S>(sources: I) -> TablePool
    where
        I: IntoIterator<Item = &'a S>,
        S: TableSource + ?Sized + 'a,
    {
        let mut pool = TablePool::new();
        for source in sources {
            match source.load() {
                TableLoad::Ready(table) => pool.insert(table),
                TableLoad::Pending => {
                    debug!(
                        "Skipping table {}: not loaded",
                        source.label().unwrap_or("<unnamed>")
                    );
                    pool.skipped += 1;
                }
                TableLoad::Failed(error) => {
                    debug!("Skipping table: {error}");
                    pool.skipped += 1;
                }
            }
        }
        pool
    }

    /// Append a table to the bucket for its locale.
    pub fn insert(&mut self, table: Arc<LocalizationTable>) {
        self.buckets
            .entry(table.locale().clone())
            .or_default()
            .push(table);
    }

    /// Tables for a locale, in configuration order.
    pub fn bucket(&self, locale: &str) -> Option<&[Arc<LocalizationTable>]> {
        self.buckets.get(locale).map(Vec::as_slice)
    }

    /// Whether a bucket exists for a locale.
    pub fn contains(&self, locale: &str) -> bool {
        self.buckets.contains_key(locale)
    }

    /// All locales with at least one table, sorted.
    pub fn locales(&self) -> Vec<&LocaleTag> {
        let mut locales: Vec<&LocaleTag> = self.buckets.keys().collect();
        locales.sort();
        locales
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of tables across all buckets.
    pub fn table_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Number of sources left out because they were pending or failed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
