//! Application layer for pawtype
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_SUMMARY_TIMEOUT, SummaryParams};
pub use ports::{
    auth_session::{AuthError, AuthSession},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoSummaryProgress, SummaryProgressNotifier},
    result_repository::{NewQuizResult, RepositoryError, ResultRepository},
};
pub use use_cases::history::{HistoryError, HistoryUseCase};
pub use use_cases::submit_quiz::{
    QuizSubmission, SubmitQuizError, SubmitQuizInput, SubmitQuizUseCase,
};
pub use use_cases::summarize_type::{
    SummarizeTypeInput, SummarizeTypeUseCase, SummaryDegradation, SummaryOutcome,
};
