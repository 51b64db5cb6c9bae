//! Property tests for the text normalizer.

use ai_core::{is_allowed_char, normalize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn output_only_contains_allowed_chars(text in any::<String>()) {
        let cleaned = normalize(&text);
        prop_assert!(cleaned.chars().all(is_allowed_char));
    }

    #[test]
    fn output_has_no_edge_or_double_spaces(text in any::<String>()) {
        let cleaned = normalize(&text);
        prop_assert!(!cleaned.starts_with(' '));
        prop_assert!(!cleaned.ends_with(' '));
        prop_assert!(!cleaned.contains("  "));
    }

    #[test]
    fn normalize_is_idempotent(text in any::<String>()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn never_grows(text in any::<String>()) {
        prop_assert!(normalize(&text).chars().count() <= text.chars().count());
    }

    #[test]
    fn plain_words_survive(words in prop::collection::vec("[A-Za-z0-9]{1,12}", 0..20)) {
        let joined = words.join("   ");
        prop_assert_eq!(normalize(&joined), words.join(" "));
    }
}
