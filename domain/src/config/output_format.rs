//! Output format value object

use serde::{Deserialize, Serialize};

/// How a quiz result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Profile, tallies and letter summary (default)
    Full,
    /// Only the four-letter code
    Code,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Full
    }
}
