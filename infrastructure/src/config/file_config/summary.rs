//! Summary configuration from TOML (`[summary]` section)

use pawtype_application::SummaryParams;
use pawtype_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw summary configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSummaryConfig {
    /// Model asked for the letter phrases
    pub model: String,
    /// Sampling temperature sent with the request
    pub temperature: f32,
    /// Upper bound for the remote attempt, in seconds
    pub timeout_secs: u64,
    /// Set to false to always use the local phrase table
    pub enabled: bool,
}

impl Default for FileSummaryConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            temperature: 0.7,
            timeout_secs: 10,
            enabled: true,
        }
    }
}

impl FileSummaryConfig {
    /// Convert to application parameters. A blank model name keeps the default.
    pub fn to_params(&self) -> SummaryParams {
        let model = match self.model.trim() {
            "" => Model::default(),
            name => Model::from_name(name),
        };
        SummaryParams::default()
            .with_model(model)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_remote_enabled(self.enabled)
    }
}
