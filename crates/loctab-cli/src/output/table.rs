//! Table formatting utilities for CLI output.

use std::sync::Arc;

use comfy_table::{presets, ContentArrangement, Table};
use loctab::{LocalizationTable, TablePool};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Format the active tables of a resolution, in order.
pub fn format_active_table(tables: &[Arc<LocalizationTable>]) -> Table {
    let mut table = new_table(vec!["#", "Table", "Locale", "Items"]);
    for (index, entry) in tables.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            entry.name().unwrap_or("-").to_string(),
            entry.locale().to_string(),
            entry.len().to_string(),
        ]);
    }
    table
}

/// Format the buckets of a pool, sorted by locale.
pub fn format_locales_table(pool: &TablePool) -> Table {
    let mut table = new_table(vec!["Locale", "Tables", "Items"]);
    for locale in pool.locales() {
        let bucket = pool.bucket(locale).unwrap_or_default();
        let items: usize = bucket.iter().map(|t| t.len()).sum();
        table.add_row(vec![
            locale.to_string(),
            bucket.len().to_string(),
            items.to_string(),
        ]);
    }
    table
}
