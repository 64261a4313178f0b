//! History use case
//!
//! Lists and deletes the signed-in user's past quiz results.

use crate::ports::auth_session::AuthSession;
use crate::ports::result_repository::{RepositoryError, ResultRepository};
use pawtype_domain::{HistoryOrder, QuizResult, ResultId};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when reading or editing history
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Sign in to see your history")]
    NotAuthenticated,

    #[error("No result with id {0}")]
    NotFound(ResultId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Use case for browsing past results
pub struct HistoryUseCase {
    results: Arc<dyn ResultRepository>,
    auth: Arc<dyn AuthSession>,
}

impl HistoryUseCase {
    pub fn new(results: Arc<dyn ResultRepository>, auth: Arc<dyn AuthSession>) -> Self {
        Self { results, auth }
    }

    /// Results of the signed-in user
    pub async fn list(&self, order: HistoryOrder) -> Result<Vec<QuizResult>, HistoryError> {
        let user = self.auth.current_user().ok_or(HistoryError::NotAuthenticated)?;
        let results = self.results.list_for_user(&user.id, order).await?;
        debug!("{} results in history for {}", results.len(), user.id);
        Ok(results)
    }

    /// Delete one result by id
    pub async fn delete(&self, id: &ResultId) -> Result<(), HistoryError> {
        if self.auth.current_user().is_none() {
            return Err(HistoryError::NotAuthenticated);
        }
        if self.results.delete(id).await? {
            Ok(())
        } else {
            Err(HistoryError::NotFound(id.clone()))
        }
    }
}
