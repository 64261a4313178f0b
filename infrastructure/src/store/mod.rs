//! In-process storage for results and the login session
//!
//! [`AppStore`] owns the shared state and hands out port adapters over it.
//! Nothing is persisted; a new process starts empty (or with samples).

mod auth;
mod memory;

pub use auth::{DEMO_USER_ID, MemoryAuthSession};
pub use memory::MemoryResultStore;

use chrono::{DateTime, Duration, Utc};
use pawtype_domain::{
    AnswerSheet, DomainError, QuizResult, ResultId, TypeCatalog, User, UserId, score_sheet,
};
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, RwLock};

#[derive(Default)]
pub(crate) struct StoreState {
    pub(crate) results: RwLock<Vec<QuizResult>>,
    pub(crate) next_seq: AtomicU64,
    pub(crate) current_user: RwLock<Option<User>>,
}

/// Application-wide store created at process start
#[derive(Clone, Default)]
pub struct AppStore {
    state: Arc<StoreState>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with two results for the demo user,
    /// one and two days old.
    pub fn with_samples() -> Result<Self, DomainError> {
        let store = Self::new();
        let now = Utc::now();
        let samples = [
            (
                "sample-1",
                [1, 2, 1, 3, 2, 1, 4, 2, 1, 3, 2, 1, 4, 2, 1],
                now - Duration::days(1),
            ),
            (
                "sample-2",
                [4, 3, 4, 2, 3, 4, 2, 3, 4, 2, 3, 4, 2, 3, 4],
                now - Duration::days(2),
            ),
        ];

        {
            let mut results = store.state.results.write().unwrap_or_else(|e| e.into_inner());
            for (id, answers, created_at) in samples {
                results.push(sample_result(id, &answers, created_at)?);
            }
        }
        Ok(store)
    }

    /// Result repository sharing this store's state
    pub fn results(&self) -> Arc<MemoryResultStore> {
        Arc::new(MemoryResultStore::new(self.state.clone()))
    }

    /// Auth session sharing this store's state
    pub fn auth(&self) -> Arc<MemoryAuthSession> {
        Arc::new(MemoryAuthSession::new(self.state.clone()))
    }

    /// Forget the signed-in user
    pub fn clear_session(&self) {
        *self
            .state
            .current_user
            .write()
            .unwrap_or_else(|e| e.into_inner()) = None;
    }
}

fn sample_result(
    id: &str,
    answers: &[u8],
    created_at: DateTime<Utc>,
) -> Result<QuizResult, DomainError> {
    let answers = AnswerSheet::try_new(answers)?;
    let code = score_sheet(&answers).code;
    Ok(QuizResult {
        id: ResultId::new(id),
        user_id: Some(UserId::new(DEMO_USER_ID)),
        code,
        answers,
        pet_name: None,
        profile: TypeCatalog::get_or_default(&code),
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawtype_application::{AuthSession, ResultRepository};
    use pawtype_domain::HistoryOrder;

    #[tokio::test]
    async fn test_samples_belong_to_demo_user() {
        let store = AppStore::with_samples().unwrap();

        let results = store
            .results()
            .list_for_user(&UserId::new(DEMO_USER_ID), HistoryOrder::NewestFirst)
            .await
            .unwrap();

        let codes: Vec<String> = results.iter().map(|r| r.code.to_string()).collect();
        assert_eq!(codes, vec!["ENFP", "ISTJ"]);
        assert_eq!(results[0].id.as_str(), "sample-1");
    }

    #[tokio::test]
    async fn test_adapters_share_state() {
        let store = AppStore::new();
        let auth = store.auth();

        auth.login("sam@example.com", "pw").await.unwrap();
        assert!(store.auth().current_user().is_some());

        store.clear_session();
        assert!(auth.current_user().is_none());
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = AppStore::new();
        let results = store
            .results()
            .list_for_user(&UserId::new(DEMO_USER_ID), HistoryOrder::NewestFirst)
            .await
            .unwrap();
        assert!(results.is_empty());
    }
}
