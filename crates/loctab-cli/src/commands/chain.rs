//! Implementation of the `loctab chain` command.

use clap::Args;
use loctab::{fallback_chain, Culture};
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;

/// Arguments for the chain command.
#[derive(Debug, Args)]
pub struct ChainArgs {
    /// Language tag (e.g., en-GB, zh-Hant-TW, pt_BR.UTF-8)
    pub tag: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one fallback candidate.
#[derive(Debug, Serialize)]
struct CandidateJson {
    locale: String,
    kind: String,
}

/// Run the chain command.
pub fn run_chain(args: ChainArgs) -> Result<i32> {
    let language = Culture::parse(&args.tag).map_err(|e| miette!("{e}"))?;
    let chain = fallback_chain(&language);

    if args.json {
        let candidates: Vec<CandidateJson> = chain
            .iter()
            .map(|(locale, kind)| CandidateJson {
                locale: locale.to_string(),
                kind: kind.to_string(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&candidates).into_diagnostic()?
        );
    } else {
        for (index, (locale, kind)) in chain.iter().enumerate() {
            println!("{}. {:<8} {}", index + 1, kind, locale);
        }
    }

    Ok(exitcode::OK)
}
