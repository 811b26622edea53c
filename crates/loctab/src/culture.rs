//! Culture facility: canonical locale names and parent cultures.
//!
//! A [`Culture`] wraps an ICU [`LanguageIdentifier`]. Two cultures are equal
//! when their canonical identifiers are equal, so `en-gb`, `en_GB` and
//! `en-GB.UTF-8` all name the same culture.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use icu_locale_core::LanguageIdentifier;
use icu_locale_core::subtags::Variants;
use tracing::debug;

use crate::error::CultureError;

/// Language used when neither the requested language nor its parent has
/// translations.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A locale identifier used either for formatting conventions (culture) or
/// for selecting translations (language).
///
/// The invariant culture (`und`) has an empty name and no parent. It is what
/// parent lookups bottom out at and what [`Culture::system`] falls back to
/// when the host reports nothing usable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Culture {
    id: LanguageIdentifier,
}

impl Default for Culture {
    fn default() -> Self {
        Culture {
            id: LanguageIdentifier::UNKNOWN,
        }
    }
}

impl Culture {
    /// Parse a raw locale string into a culture.
    ///
    /// Accepts BCP 47 tags as well as POSIX-style names: encoding and modifier
    /// suffixes are stripped (`.UTF-8`, `@euro`) and underscores become
    /// hyphens. An empty string (or `und`) yields the invariant culture.
    ///
    /// # Example
    ///
    /// ```
    /// use loctab::Culture;
    ///
    /// let culture = Culture::parse("en_gb.UTF-8").unwrap();
    /// assert_eq!(culture.name(), "en-GB");
    /// assert_eq!(culture.parent().name(), "en");
    /// ```
    pub fn parse(raw: &str) -> Result<Culture, CultureError> {
        let stripped = raw.trim().split(['.', '@']).next().unwrap_or_default().trim();
        if stripped.is_empty() {
            return Ok(Culture::invariant());
        }

        let candidate = stripped.replace('_', "-");
        LanguageIdentifier::try_from_str(&candidate)
            .map(|id| Culture { id })
            .map_err(|e| CultureError::Invalid {
                input: raw.to_string(),
                reason: e.to_string(),
            })
    }

    /// The invariant culture, with an empty name.
    pub fn invariant() -> Culture {
        Culture::default()
    }

    /// English, the universal fallback language.
    pub fn english() -> Culture {
        Culture::parse(DEFAULT_LANGUAGE).unwrap_or_default()
    }

    /// The culture reported by the host operating system.
    ///
    /// Falls back to the invariant culture when the host reports no locale or
    /// one that cannot be parsed.
    pub fn system() -> Culture {
        let Some(raw) = sys_locale::get_locale() else {
            debug!("Host reported no locale, using invariant culture");
            return Culture::invariant();
        };

        match Culture::parse(&raw) {
            Ok(culture) => culture,
            Err(e) => {
                debug!("Ignoring host locale: {e}");
                Culture::invariant()
            }
        }
    }

    /// Whether this is the invariant culture.
    pub fn is_invariant(&self) -> bool {
        self.id == LanguageIdentifier::UNKNOWN
    }

    /// Canonical name, e.g. `"en-GB"`. Empty for the invariant culture.
    pub fn name(&self) -> String {
        if self.is_invariant() {
            String::new()
        } else {
            self.id.to_string()
        }
    }

    /// The broader culture this one falls back to.
    ///
    /// Drops the most specific subtag: variants first, then region, then
    /// script. `ca-ES-valencia` → `ca-ES`, `zh-Hant-TW` → `zh-Hant`,
    /// `en-GB` → `en`. A bare language has the invariant culture as parent.
    pub fn parent(&self) -> Culture {
        let mut id = self.id.clone();
        if !id.variants.is_empty() {
            id.variants = Variants::new();
        } else if id.region.is_some() {
            id.region = None;
        } else if id.script.is_some() {
            id.script = None;
        } else {
            return Culture::invariant();
        }
        Culture { id }
    }

    /// The underlying ICU identifier.
    pub fn language_identifier(&self) -> &LanguageIdentifier {
        &self.id
    }
}

impl From<LanguageIdentifier> for Culture {
    fn from(id: LanguageIdentifier) -> Self {
        Culture { id }
    }
}

impl FromStr for Culture {
    type Err = CultureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Culture::parse(s)
    }
}

impl Display for Culture {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_invariant() {
            write!(f, "(invariant)")
        } else {
            write!(f, "{}", self.id)
        }
    }
}
