//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod providers;
mod summary;

pub use output::FileOutputConfig;
pub use providers::{FileOpenAiConfig, FileProvidersConfig};
pub use summary::FileSummaryConfig;

use serde::{Deserialize, Serialize};

/// A non-fatal problem found in the loaded configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending key, e.g. `summary.timeout_secs`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider credentials and endpoints
    pub providers: FileProvidersConfig,
    /// Remote summary settings
    pub summary: FileSummaryConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every detected issue.
    ///
    /// All issues are warnings: the summary still runs and falls back to the
    /// local phrase table if the remote settings turn out unusable.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.summary.model.trim().is_empty() {
            issues.push(ConfigIssue::new(
                "summary.model",
                "model name is empty, using the default model",
            ));
        }

        if self.summary.timeout_secs == 0 {
            issues.push(ConfigIssue::new(
                "summary.timeout_secs",
                "timeout is 0, every remote summary will time out",
            ));
        }

        if !(0.0..=2.0).contains(&self.summary.temperature) {
            issues.push(ConfigIssue::new(
                "summary.temperature",
                format!(
                    "temperature {} is outside 0.0..=2.0 and will likely be rejected",
                    self.summary.temperature
                ),
            ));
        }

        if self.providers.openai.base_url.trim().is_empty() {
            issues.push(ConfigIssue::new(
                "providers.openai.base_url",
                "base URL is empty",
            ));
        }

        issues
    }
}
