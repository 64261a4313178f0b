//! In-memory [`ResultRepository`]

use super::StoreState;
use async_trait::async_trait;
use pawtype_application::{NewQuizResult, RepositoryError, ResultRepository};
use pawtype_domain::{HistoryOrder, QuizResult, ResultId, UserId};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tracing::debug;

pub struct MemoryResultStore {
    state: Arc<StoreState>,
}

impl MemoryResultStore {
    pub(crate) fn new(state: Arc<StoreState>) -> Self {
        Self { state }
    }
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::Unavailable("result store lock poisoned".to_string())
}

#[async_trait]
impl ResultRepository for MemoryResultStore {
    async fn insert(&self, result: NewQuizResult) -> Result<QuizResult, RepositoryError> {
        let seq = self.state.next_seq.fetch_add(1, Ordering::Relaxed);
        let stored = QuizResult {
            id: ResultId::generate(result.created_at, seq),
            user_id: result.user_id,
            code: result.code,
            answers: result.answers,
            pet_name: result.pet_name,
            profile: result.profile,
            created_at: result.created_at,
        };

        let mut results = self.state.results.write().map_err(poisoned)?;
        results.insert(0, stored.clone());
        debug!("Stored result {}", stored.id);
        Ok(stored)
    }

    async fn list_for_user(
        &self,
        user: &UserId,
        order: HistoryOrder,
    ) -> Result<Vec<QuizResult>, RepositoryError> {
        let results = self.state.results.read().map_err(poisoned)?;
        let mut matching: Vec<QuizResult> = results
            .iter()
            .filter(|r| r.user_id.as_ref() == Some(user))
            .cloned()
            .collect();

        match order {
            HistoryOrder::NewestFirst => matching.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            HistoryOrder::OldestFirst => matching.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
        Ok(matching)
    }

    async fn delete(&self, id: &ResultId) -> Result<bool, RepositoryError> {
        let mut results = self.state.results.write().map_err(poisoned)?;
        let before = results.len();
        results.retain(|r| &r.id != id);
        Ok(results.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::super::AppStore;
    use super::*;
    use chrono::{Duration, Utc};
    use pawtype_domain::{AnswerSheet, TypeCatalog, TypeCode};

    fn draft(user: Option<&str>, minutes_ago: i64) -> NewQuizResult {
        let code: TypeCode = "INFJ".parse().unwrap();
        NewQuizResult {
            user_id: user.map(UserId::new),
            code,
            answers: AnswerSheet::try_new(&[2; 15]).unwrap(),
            pet_name: Some("Biscuit".to_string()),
            profile: TypeCatalog::get_or_default(&code),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let store = AppStore::new().results();
        let a = store.insert(draft(Some("u1"), 0)).await.unwrap();
        let b = store.insert(draft(Some("u1"), 0)).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.id.as_str().starts_with("result-"));
    }

    #[tokio::test]
    async fn test_list_filters_and_orders() {
        let store = AppStore::new().results();
        let older = store.insert(draft(Some("u1"), 10)).await.unwrap();
        let newer = store.insert(draft(Some("u1"), 1)).await.unwrap();
        store.insert(draft(Some("u2"), 0)).await.unwrap();
        store.insert(draft(None, 0)).await.unwrap();

        let user = UserId::new("u1");
        let newest = store
            .list_for_user(&user, HistoryOrder::NewestFirst)
            .await
            .unwrap();
        assert_eq!(newest.iter().map(|r| &r.id).collect::<Vec<_>>(), vec![&newer.id, &older.id]);

        let oldest = store
            .list_for_user(&user, HistoryOrder::OldestFirst)
            .await
            .unwrap();
        assert_eq!(oldest[0].id, older.id);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = AppStore::new().results();
        let stored = store.insert(draft(Some("u1"), 0)).await.unwrap();

        assert!(store.delete(&stored.id).await.unwrap());
        assert!(!store.delete(&stored.id).await.unwrap());
    }
}
