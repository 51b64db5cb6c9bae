//! Workspace umbrella crate for ai-core.
//!
//! Re-exports the text normalizer and the summarization gateway so callers
//! can depend on a single crate. The HTTP service lives in `crates/server`.

pub use normalize::{
    ALLOWED_PUNCTUATION, NormalizedText, collapse_whitespace, is_allowed_char, normalize,
    strip_disallowed,
};
pub use summarize::{
    CircuitBreaker, CircuitBreakerConfig, CircuitState, DecodingParams, HttpSummarizer,
    RetryConfig, SummarizeError, Summarizer, SummarizerConfig, Summary,
};

/// Cleans `text`, keeping the input next to the cleaned form.
pub fn clean(text: impl Into<String>) -> NormalizedText {
    NormalizedText::new(text)
}
