//! Whitespace collapsing.
//!
//! Uses Rust's Unicode whitespace definition (`char::is_whitespace`). After
//! [`strip_disallowed`](crate::strip_disallowed) the only whitespace left is
//! the ASCII space, but this function is exported on its own and handles any
//! input.

/// Collapses every run of whitespace to a single ASCII space and trims both
/// ends.
///
/// # Examples
///
/// ```rust
/// use normalize::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  hello   world  "), "hello world");
/// assert_eq!(collapse_whitespace("hello\t\n world"), "hello world");
/// assert_eq!(collapse_whitespace("   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(segment);
    }
    collapsed
}
