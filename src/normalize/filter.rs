//! Character filter for renderer-safe text.

use std::borrow::Cow;

use regex::Regex;

/// Replaces every run of characters outside printable 7-bit ASCII
/// (U+0020..=U+007E) with a single space.
///
/// The output only contains printable ASCII, so filtering twice gives the
/// same result as filtering once.
#[derive(Debug, Clone)]
pub struct CharacterFilter {
    unsupported_run: Regex,
}

impl CharacterFilter {
    /// Create a new filter.
    pub fn new() -> Self {
        Self {
            unsupported_run: Regex::new(r"[^\x20-\x7E]+").unwrap(),
        }
    }

    /// Filter a single value. Borrows when nothing needs replacing.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.unsupported_run.replace_all(text, " ")
    }

    /// Check whether a value would pass through unchanged.
    pub fn is_clean(&self, text: &str) -> bool {
        !self.unsupported_run.is_match(text)
    }
}

impl Default for CharacterFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter a value with a freshly built [`CharacterFilter`].
///
/// Prefer keeping a filter around when processing many values.
pub fn filter_text(text: &str) -> String {
    CharacterFilter::new().apply(text).into_owned()
}
