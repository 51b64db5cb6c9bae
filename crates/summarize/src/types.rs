use serde::{Deserialize, Serialize};

use crate::SummarizeError;

/// Length and sampling controls forwarded to the model unchanged.
///
/// Lengths are in model tokens. The defaults match the service contract:
/// 80 max, 20 min, greedy/beam decoding without sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodingParams {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl Default for DecodingParams {
    fn default() -> Self {
        Self {
            max_length: 80,
            min_length: 20,
            do_sample: false,
        }
    }
}

impl DecodingParams {
    pub fn validate(&self) -> Result<(), SummarizeError> {
        if self.max_length == 0 {
            return Err(SummarizeError::InvalidParams(
                "max_length must be greater than zero".into(),
            ));
        }
        if self.min_length > self.max_length {
            return Err(SummarizeError::InvalidParams(format!(
                "min_length ({}) exceeds max_length ({})",
                self.min_length, self.max_length
            )));
        }
        Ok(())
    }
}

/// A generated summary. Serializes as `{"summary": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
}

impl Summary {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }
}
