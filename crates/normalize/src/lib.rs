//! Text cleaning for the ai-core service.
//!
//! [`normalize`] drops every character outside a fixed allow-list and then
//! collapses the remaining whitespace:
//!
//! 1. keep ASCII letters and digits, the Latin-1 accented range `À`..=`ÿ`,
//!    space, `.`, `,`, `!`, `?`; drop everything else
//! 2. collapse whitespace runs to one ASCII space
//! 3. trim both ends
//!
//! Filtering runs before collapsing, so a dropped symbol sitting between two
//! spaces does not leave a double space behind.
//!
//! ## Pure function guarantee
//!
//! No I/O and no locale lookups. The function is total: every `&str`
//! produces a result, and the result is a fixed point
//! (`normalize(normalize(t)) == normalize(t)`).
//!
//! The allow-list only covers the Latin-1 Supplement block. Cyrillic, Greek,
//! CJK, and decomposed combining accents are stripped entirely; callers that
//! need other scripts must not route text through this crate.

mod charset;
mod document;
mod whitespace;

pub use crate::charset::{
    is_allowed_char, strip_disallowed, ALLOWED_PUNCTUATION, LATIN1_ACCENTED_END,
    LATIN1_ACCENTED_START,
};
pub use crate::document::NormalizedText;
pub use crate::whitespace::collapse_whitespace;

/// Cleans `text` with the allow-list filter followed by whitespace collapsing.
///
/// ```rust
/// use normalize::normalize;
///
/// assert_eq!(normalize("Héllo,   world!!"), "Héllo, world!!");
/// assert_eq!(normalize("Price: $100 (tax incl.)"), "Price 100 tax incl.");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(text: &str) -> String {
    collapse_whitespace(&strip_disallowed(text))
}
