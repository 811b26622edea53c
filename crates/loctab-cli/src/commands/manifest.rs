//! Shared manifest loading for commands that read one.

use std::fs::read_to_string;
use std::path::Path;

use loctab::{Culture, ManifestError, TableManifest};
use miette::{miette, IntoDiagnostic, Result};

use crate::output::ManifestDiagnostic;

/// Read and parse a manifest, reporting JSON errors with source context.
pub fn read_manifest(path: &Path) -> Result<(TableManifest, Option<Culture>)> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read manifest {}: {}", path.display(), e))?;

    let diagnose = |e: ManifestError| ManifestDiagnostic::from_manifest_error(path, &content, &e);
    let manifest = TableManifest::from_json(&content).map_err(diagnose)?;
    let language = manifest.language().map_err(diagnose)?;
    Ok((manifest, language))
}
