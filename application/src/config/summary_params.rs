//! Summary request parameters.
//!
//! [`SummaryParams`] groups the static parameters that control the single
//! remote attempt made by
//! [`SummarizeTypeUseCase`](crate::use_cases::summarize_type::SummarizeTypeUseCase).

use pawtype_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default upper bound for the remote summary attempt
pub const DEFAULT_SUMMARY_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote summary control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryParams {
    /// Model asked for the letter phrases.
    pub model: Model,
    /// Upper bound for session creation plus the reply.
    pub timeout: Duration,
    /// When false the remote call is skipped and the local table is used.
    pub remote_enabled: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            timeout: DEFAULT_SUMMARY_TIMEOUT,
            remote_enabled: true,
        }
    }
}

impl SummaryParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_remote_enabled(mut self, enabled: bool) -> Self {
        self.remote_enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let params = SummaryParams::default();
        assert_eq!(params.model, Model::Gpt4oMini);
        assert_eq!(params.timeout, Duration::from_secs(10));
        assert!(params.remote_enabled);
    }

    #[test]
    fn test_builder_chain() {
        let params = SummaryParams::default()
            .with_model(Model::Gpt41)
            .with_timeout(Duration::from_secs(3))
            .with_remote_enabled(false);
        assert_eq!(params.model, Model::Gpt41);
        assert_eq!(params.timeout, Duration::from_secs(3));
        assert!(!params.remote_enabled);
    }
}
