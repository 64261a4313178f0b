//! Summarize Type use case
//!
//! Produces one short phrase per letter of a type code. A single remote
//! attempt is made through the [`LlmGateway`]; any failure discards the
//! reply and the local phrase table is used instead. Callers always get a
//! complete [`LetterSummary`], never an error.

use crate::config::SummaryParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoSummaryProgress, SummaryProgressNotifier};
use pawtype_domain::{
    LetterSummary, PromptTemplate, SummaryContext, TypeCode, fallback_summary,
    parse_remote_summary,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Input for the [`SummarizeTypeUseCase`]
#[derive(Debug, Clone)]
pub struct SummarizeTypeInput {
    pub code: TypeCode,
    pub context: SummaryContext,
}

impl SummarizeTypeInput {
    pub fn new(code: TypeCode, context: SummaryContext) -> Self {
        Self { code, context }
    }
}

/// Why a summary was served from the local table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryDegradation {
    /// No provider or no credentials; the remote call was never made
    RemoteUnavailable,
    /// The remote call was made and failed (transport, status, timeout or reply)
    RemoteFailure(String),
}

impl std::fmt::Display for SummaryDegradation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryDegradation::RemoteUnavailable => write!(f, "remote summary unavailable"),
            SummaryDegradation::RemoteFailure(reason) => {
                write!(f, "remote summary failed: {}", reason)
            }
        }
    }
}

/// Settled result of a summary request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutcome {
    pub summary: LetterSummary,
    /// Advisory only; set when `summary` came from the local table
    pub degraded: Option<SummaryDegradation>,
}

impl SummaryOutcome {
    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }
}

/// Use case for personalising the letters of a type code
pub struct SummarizeTypeUseCase {
    gateway: Option<Arc<dyn LlmGateway>>,
    params: SummaryParams,
}

impl Clone for SummarizeTypeUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            params: self.params.clone(),
        }
    }
}

impl SummarizeTypeUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: SummaryParams) -> Self {
        Self {
            gateway: Some(gateway),
            params,
        }
    }

    /// Use case without any provider; always serves the local table
    pub fn offline(params: SummaryParams) -> Self {
        Self {
            gateway: None,
            params,
        }
    }

    pub fn params(&self) -> &SummaryParams {
        &self.params
    }

    /// Execute with default (no-op) progress
    pub async fn execute(&self, input: SummarizeTypeInput) -> SummaryOutcome {
        self.execute_with_progress(input, &NoSummaryProgress).await
    }

    /// Execute with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: SummarizeTypeInput,
        progress: &dyn SummaryProgressNotifier,
    ) -> SummaryOutcome {
        progress.on_summary_start(&input.code);

        let outcome = match self.request_remote(&input).await {
            Ok(summary) => {
                info!("Remote summary received for {}", input.code);
                SummaryOutcome {
                    summary,
                    degraded: None,
                }
            }
            Err(degradation) => {
                match &degradation {
                    SummaryDegradation::RemoteUnavailable => {
                        info!("Remote summary unavailable, using local phrases");
                    }
                    SummaryDegradation::RemoteFailure(reason) => {
                        warn!("Remote summary failed, using local phrases: {}", reason);
                    }
                }
                SummaryOutcome {
                    summary: fallback_summary(input.code, &input.context),
                    degraded: Some(degradation),
                }
            }
        };

        progress.on_summary_complete(&outcome);
        outcome
    }

    /// Execute unless `cancellation` fires first.
    ///
    /// Returns `None` when the request was cancelled; whatever the remote
    /// call would have produced is dropped.
    pub async fn execute_cancellable(
        &self,
        input: SummarizeTypeInput,
        cancellation: &CancellationToken,
        progress: &dyn SummaryProgressNotifier,
    ) -> Option<SummaryOutcome> {
        if cancellation.is_cancelled() {
            progress.on_summary_cancelled();
            return None;
        }

        let code = input.code;
        tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                debug!("Summary request for {} cancelled", code);
                progress.on_summary_cancelled();
                None
            }
            outcome = self.execute_with_progress(input, progress) => Some(outcome),
        }
    }

    /// One bounded remote attempt; every failure maps to a degradation
    async fn request_remote(
        &self,
        input: &SummarizeTypeInput,
    ) -> Result<LetterSummary, SummaryDegradation> {
        let gateway = match &self.gateway {
            Some(gateway) if self.params.remote_enabled => gateway,
            _ => return Err(SummaryDegradation::RemoteUnavailable),
        };

        let prompt = PromptTemplate::summary_prompt(&input.code, &input.context);
        debug!(
            "Requesting letter summary for {} from {}",
            input.code, self.params.model
        );

        let attempt = async {
            let session = gateway
                .create_session_with_system_prompt(
                    &self.params.model,
                    PromptTemplate::summary_system(),
                )
                .await?;
            session.send(&prompt).await
        };

        let reply = match tokio::time::timeout(self.params.timeout, attempt).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) if e.is_unavailable() => {
                return Err(SummaryDegradation::RemoteUnavailable);
            }
            Ok(Err(e)) => return Err(SummaryDegradation::RemoteFailure(e.to_string())),
            Err(_) => {
                return Err(SummaryDegradation::RemoteFailure(
                    GatewayError::Timeout.to_string(),
                ));
            }
        };

        parse_remote_summary(input.code, &reply)
            .map_err(|e| SummaryDegradation::RemoteFailure(e.to_string()))
    }
}
