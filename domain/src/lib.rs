//! Domain layer for pawtype
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Scoring
//!
//! Fifteen answers on a 1-5 agreement scale are tallied over four
//! independent axes into a four-letter [`TypeCode`]:
//!
//! - **Sociability**: E (outward) / I (inward)
//! - **Perception**: N (intuitive) / S (sensing)
//! - **Decision**: F (feeling) / T (thinking)
//! - **Structure**: P (flexible) / J (judging)
//!
//! ## Letter Summary
//!
//! Each letter of a code gets a short phrase about the dog, either from a
//! remote text-generation reply or from a fixed local table.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod core;
pub mod history;
pub mod prompt;
pub mod quiz;
pub mod summary;

// Re-export commonly used types
pub use auth::{User, UserId};
pub use catalog::{DEFAULT_CODE, TypeCatalog, TypeProfile};
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model};
pub use history::{HistoryOrder, PetInfo, QuizResult, ResultId};
pub use prompt::PromptTemplate;
pub use quiz::{
    answer::{ANSWER_COUNT, AnswerSheet, MAX_ANSWER, MIN_ANSWER},
    axis::{Axis, Letter},
    code::TypeCode,
    questions::{AnswerOption, Question, answer_options, questions},
    scorer::{AxisTallies, ScoreOutcome, score, score_sheet},
};
pub use summary::{
    LetterSummary, SummaryContext, SummaryParseError, SummarySource, SummaryState,
    fallback_summary, parse_remote_summary,
};
