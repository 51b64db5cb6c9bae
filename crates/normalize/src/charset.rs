//! Character allow-list used by the cleaning pass.
//!
//! A character survives cleaning when it is one of:
//! - ASCII letters `a-z`, `A-Z`
//! - ASCII digits `0-9`
//! - the Latin-1 Supplement block from `À` (U+00C0) through `ÿ` (U+00FF)
//! - space, `.`, `,`, `!`, `?`
//!
//! Everything else is dropped, including tabs, newlines, and every non-Latin
//! script. The range is taken as-is, so `×` (U+00D7) and `÷` (U+00F7) are kept.

/// First code point of the accented Latin-1 range (`À`).
pub const LATIN1_ACCENTED_START: char = '\u{00C0}';

/// Last code point of the accented Latin-1 range (`ÿ`).
pub const LATIN1_ACCENTED_END: char = '\u{00FF}';

/// Punctuation and separators that pass the filter.
pub const ALLOWED_PUNCTUATION: [char; 5] = [' ', '.', ',', '!', '?'];

/// Returns `true` when `c` is kept by [`strip_disallowed`].
///
/// ```rust
/// use normalize::is_allowed_char;
///
/// assert!(is_allowed_char('é'));
/// assert!(is_allowed_char('?'));
/// assert!(!is_allowed_char('$'));
/// assert!(!is_allowed_char('\t'));
/// ```
#[inline]
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || (LATIN1_ACCENTED_START..=LATIN1_ACCENTED_END).contains(&c)
        || ALLOWED_PUNCTUATION.contains(&c)
}

/// Removes every character rejected by [`is_allowed_char`].
///
/// Spacing is left untouched; a dropped symbol between two spaces leaves both
/// spaces behind for [`collapse_whitespace`](crate::collapse_whitespace) to merge.
pub fn strip_disallowed(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    out.extend(text.chars().filter(|&c| is_allowed_char(c)));
    out
}
