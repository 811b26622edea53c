//! Locale resolution: pick the tables for a language from a pool.
//!
//! Resolution tries three candidates in order and stops at the first one
//! that has a bucket in the pool:
//!
//! 1. the language itself (`en-GB`),
//! 2. its parent culture (`en`), when it has one,
//! 3. the default language, [`DEFAULT_LANGUAGE`](crate::DEFAULT_LANGUAGE).
//!
//! Nothing else is ever considered, so a missing `es-AR` translation never
//! resolves to a sibling such as `es-MX`.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::culture::Culture;
use crate::pool::TablePool;
use crate::types::{LocaleTag, LocalizationTable};

/// Which fallback tier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// The language's own locale.
    Exact,
    /// The language's parent culture.
    Parent,
    /// The universal default language.
    Default,
}

impl Display for MatchKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            MatchKind::Exact => "exact",
            MatchKind::Parent => "parent",
            MatchKind::Default => "default",
        };
        f.pad(name)
    }
}

/// The locale a resolution pass settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    pub locale: LocaleTag,
    pub kind: MatchKind,
}

/// Outcome of resolving a language against a pool.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    matched: Option<ResolvedLocale>,
    tables: Vec<Arc<LocalizationTable>>,
}

impl Resolution {
    /// The matched locale, or `None` when no candidate had tables.
    pub fn matched(&self) -> Option<&ResolvedLocale> {
        self.matched.as_ref()
    }

    /// The selected tables, in configuration order. Empty when unmatched.
    pub fn tables(&self) -> &[Arc<LocalizationTable>] {
        &self.tables
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Split into the matched locale and the selected tables.
    pub fn into_parts(self) -> (Option<ResolvedLocale>, Vec<Arc<LocalizationTable>>) {
        (self.matched, self.tables)
    }
}

/// The locales resolution tries for a language, in order.
///
/// The parent tier is omitted when the language has no parent. Duplicate
/// candidates are kept, since they never change the outcome.
///
/// # Example
///
/// ```
/// use loctab::{Culture, MatchKind, fallback_chain};
///
/// let chain = fallback_chain(&Culture::parse("en-GB").unwrap());
/// let names: Vec<_> = chain.iter().map(|(tag, _)| tag.as_str()).collect();
/// assert_eq!(names, ["en-GB", "en", "en"]);
/// assert_eq!(chain[1].1, MatchKind::Parent);
/// ```
pub fn fallback_chain(language: &Culture) -> Vec<(LocaleTag, MatchKind)> {
    let mut chain = vec![(LocaleTag::from(language), MatchKind::Exact)];

    let parent = language.parent();
    let parent_name = parent.name();
    if !parent_name.is_empty() {
        chain.push((LocaleTag::from(&parent), MatchKind::Parent));
    }

    chain.push((LocaleTag::from(&Culture::english()), MatchKind::Default));
    chain
}

/// Pick the tables to use for `language` from `pool`.
///
/// Pure: the pool is only read, and the same inputs always give the same
/// resolution.
pub fn resolve(pool: &TablePool, language: &Culture) -> Resolution {
    for (locale, kind) in fallback_chain(language) {
        if let Some(tables) = pool.bucket(&locale) {
            return Resolution {
                tables: tables.to_vec(),
                matched: Some(ResolvedLocale { locale, kind }),
            };
        }
    }
    Resolution::default()
}
