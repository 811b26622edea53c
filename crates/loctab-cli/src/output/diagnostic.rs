//! Miette diagnostic wrapper for manifest errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use loctab::ManifestError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for manifest errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid manifest: {message}")]
#[diagnostic(code(loctab::manifest))]
pub struct ManifestDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl ManifestDiagnostic {
    /// Create a diagnostic from a ManifestError with source context.
    pub fn from_manifest_error(path: &Path, content: &str, err: &ManifestError) -> Self {
        let (line, column, message, help) = match err {
            ManifestError::Json {
                line,
                column,
                message,
            } => (*line, *column, message.clone(), None),
            ManifestError::Culture(e) => (
                1,
                1,
                e.to_string(),
                Some("use a BCP 47 tag such as \"en\" or \"pt-BR\"".to_string()),
            ),
        };

        ManifestDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (byte_offset(content, line, column), 1).into(),
            message,
            help,
        }
    }
}

/// Convert a 1-based line:column to a byte offset into `content`.
///
/// Line lengths include their terminator, so `\r\n` files land on the same
/// character as `\n` files. Clamped to the content length so miette never
/// sees an out-of-bounds span.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(content.len())
}
