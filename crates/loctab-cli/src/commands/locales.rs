//! Implementation of the `loctab locales` command.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::commands::manifest::read_manifest;
use crate::output::table::format_locales_table;

/// Arguments for the locales command.
#[derive(Debug, Args)]
pub struct LocalesArgs {
    /// Manifest describing the configured tables (.json)
    #[arg(long)]
    pub manifest: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one locale bucket.
#[derive(Debug, Serialize)]
struct LocaleJson {
    locale: String,
    tables: usize,
    items: usize,
}

/// Run the locales command.
pub fn run_locales(args: LocalesArgs) -> Result<i32> {
    let (manifest, _) = read_manifest(&args.manifest)?;
    let pool = manifest.into_settings().build_pool();

    if args.json {
        let locales: Vec<LocaleJson> = pool
            .locales()
            .into_iter()
            .map(|locale| {
                let bucket = pool.bucket(locale).unwrap_or_default();
                LocaleJson {
                    locale: locale.to_string(),
                    tables: bucket.len(),
                    items: bucket.iter().map(|t| t.len()).sum(),
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&locales).into_diagnostic()?);
    } else {
        println!("{}", format_locales_table(&pool));
        if pool.skipped() > 0 {
            println!("\nSkipped {} unavailable table(s)", pool.skipped());
        }
    }

    Ok(exitcode::OK)
}
