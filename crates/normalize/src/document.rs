use serde::{Deserialize, Serialize};

use crate::normalize;

/// Raw input paired with its cleaned form.
///
/// Serializes as `{"original": ..., "cleaned": ...}`, which is the response
/// body of the clean endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedText {
    /// The input exactly as received.
    pub original: String,
    /// Output of [`normalize`](crate::normalize()) applied to `original`.
    pub cleaned: String,
}

impl NormalizedText {
    /// Cleans `original` and keeps a verbatim copy next to the result.
    ///
    /// ```rust
    /// use normalize::NormalizedText;
    ///
    /// let doc = NormalizedText::new("a#b$c");
    /// assert_eq!(doc.original, "a#b$c");
    /// assert_eq!(doc.cleaned, "abc");
    /// ```
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let cleaned = normalize(&original);
        Self { original, cleaned }
    }

    /// Whether cleaning removed or rewrote anything.
    pub fn is_modified(&self) -> bool {
        self.original != self.cleaned
    }

    /// Number of characters dropped by cleaning, counting collapsed spaces.
    pub fn removed_chars(&self) -> usize {
        self.original
            .chars()
            .count()
            .saturating_sub(self.cleaned.chars().count())
    }
}

impl From<&str> for NormalizedText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NormalizedText {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
