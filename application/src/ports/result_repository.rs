//! Result repository port
//!
//! Storage for completed quizzes. The bundled adapter keeps everything in
//! memory; nothing here promises durability.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pawtype_domain::{
    AnswerSheet, HistoryOrder, QuizResult, ResultId, TypeCode, TypeProfile, UserId,
};
use thiserror::Error;

/// Errors raised by a result repository
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A quiz result before the repository assigns its id
#[derive(Debug, Clone)]
pub struct NewQuizResult {
    pub user_id: Option<UserId>,
    pub code: TypeCode,
    pub answers: AnswerSheet,
    pub pet_name: Option<String>,
    pub profile: TypeProfile,
    pub created_at: DateTime<Utc>,
}

/// Port for storing and querying quiz results
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Store a result and return it with its assigned id
    async fn insert(&self, result: NewQuizResult) -> Result<QuizResult, RepositoryError>;

    /// Results belonging to `user`, sorted by creation time
    async fn list_for_user(
        &self,
        user: &UserId,
        order: HistoryOrder,
    ) -> Result<Vec<QuizResult>, RepositoryError>;

    /// Remove a result. Returns `false` when no result has that id.
    async fn delete(&self, id: &ResultId) -> Result<bool, RepositoryError>;
}
