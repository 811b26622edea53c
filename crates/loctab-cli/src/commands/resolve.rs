//! Implementation of the `loctab resolve` command.

use std::path::PathBuf;

use clap::Args;
use loctab::{Culture, LocaleTag, Localization};
use miette::{miette, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::manifest::read_manifest;
use crate::output::table::format_active_table;

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Manifest describing the configured tables (.json)
    #[arg(long)]
    pub manifest: PathBuf,

    /// Language to resolve. Defaults to the manifest language, then the host locale
    #[arg(long, env = "LOCTAB_LANG")]
    pub lang: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if no tables match
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for a resolved table.
#[derive(Debug, Serialize)]
struct TableJson {
    name: Option<String>,
    locale: String,
    items: usize,
}

/// JSON output for resolve results.
#[derive(Debug, Serialize)]
struct ResolveJson {
    language: String,
    matched: Option<String>,
    kind: Option<String>,
    tables: Vec<TableJson>,
    skipped: usize,
    suggestion: Option<String>,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> Result<i32> {
    let (manifest, manifest_language) = read_manifest(&args.manifest)?;

    let language = match &args.lang {
        Some(raw) => Culture::parse(raw).map_err(|e| miette!("{e}"))?,
        None => manifest_language.unwrap_or_else(Culture::system),
    };

    let localization = Localization::initialize_with(manifest.into_settings(), language);
    let pool = localization.pool();
    let matched = localization.active_locale();
    let requested = LocaleTag::from(localization.current_language());
    let suggestion = match matched {
        Some(_) => None,
        None => suggest_locale(&requested, &pool.locales()),
    };

    if args.json {
        let output = ResolveJson {
            language: requested.to_string(),
            matched: matched.map(|m| m.locale.to_string()),
            kind: matched.map(|m| m.kind.to_string()),
            tables: localization
                .active_tables()
                .iter()
                .map(|t| TableJson {
                    name: t.name().map(str::to_string),
                    locale: t.locale().to_string(),
                    items: t.len(),
                })
                .collect(),
            skipped: pool.skipped(),
            suggestion,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("Language: {}", localization.current_language().bold());
        match matched {
            Some(m) => {
                println!("Matched:  {} ({} match)", m.locale.green(), m.kind);
                println!("{}", format_active_table(localization.active_tables()));
            }
            None => {
                println!("{}", "No localization tables match".yellow());
                if let Some(locale) = &suggestion {
                    println!("Closest available locale: {}", locale);
                }
            }
        }
        if pool.skipped() > 0 {
            println!("Skipped {} unavailable table(s)", pool.skipped());
        }
    }

    if args.strict && matched.is_none() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Closest available locale by normalized edit distance, if any is similar.
fn suggest_locale(requested: &str, available: &[&LocaleTag]) -> Option<String> {
    available
        .iter()
        .map(|locale| (strsim::normalized_levenshtein(requested, locale), *locale))
        .filter(|(score, _)| *score >= 0.5)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, locale)| locale.to_string())
}
