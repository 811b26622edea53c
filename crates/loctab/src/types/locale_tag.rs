use std::borrow::Borrow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::culture::Culture;

/// A normalized locale string such as `"en"`, `"en-GB"` or `"pl-PL"`.
///
/// Tags are the grouping key of a [`TablePool`](crate::TablePool). Text that
/// parses as a locale identifier is canonicalized through [`Culture`], so
/// `"en_gb"` and `"en-GB"` produce the same tag. Anything else is kept as
/// written, minus surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Create a tag from raw locale text, normalizing it when possible.
    pub fn new(s: impl Into<String>) -> Self {
        let raw = s.into();
        match Culture::parse(&raw) {
            Ok(culture) => Self(culture.name()),
            Err(_) => Self(raw.trim().to_string()),
        }
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for LocaleTag {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for LocaleTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&Culture> for LocaleTag {
    fn from(culture: &Culture) -> Self {
        Self(culture.name())
    }
}

impl From<&str> for LocaleTag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LocaleTag {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> Self {
        tag.0
    }
}

impl Display for LocaleTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
