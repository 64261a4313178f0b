//! In-memory port doubles shared by the use case tests

use crate::ports::auth_session::{AuthError, AuthSession};
use crate::ports::result_repository::{NewQuizResult, RepositoryError, ResultRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pawtype_domain::{
    AnswerSheet, HistoryOrder, QuizResult, ResultId, TypeCatalog, TypeCode, User, UserId,
};
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct MemoryResults {
    rows: Mutex<Vec<QuizResult>>,
}

impl MemoryResults {
    pub(crate) fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ResultRepository for MemoryResults {
    async fn insert(&self, result: NewQuizResult) -> Result<QuizResult, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let stored = QuizResult {
            id: ResultId::generate(result.created_at, rows.len() as u64),
            user_id: result.user_id,
            code: result.code,
            answers: result.answers,
            pet_name: result.pet_name,
            profile: result.profile,
            created_at: result.created_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_user(
        &self,
        user: &UserId,
        order: HistoryOrder,
    ) -> Result<Vec<QuizResult>, RepositoryError> {
        let mut rows: Vec<QuizResult> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id.as_ref() == Some(user))
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.created_at);
        if order == HistoryOrder::NewestFirst {
            rows.reverse();
        }
        Ok(rows)
    }

    async fn delete(&self, id: &ResultId) -> Result<bool, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| &r.id != id);
        Ok(rows.len() != before)
    }
}

pub(crate) struct MemoryAuth {
    user: Mutex<Option<User>>,
}

impl MemoryAuth {
    pub(crate) fn signed_in(id: &str) -> Self {
        Self {
            user: Mutex::new(Some(User::new(UserId::new(id), "demo@example.com", "demo"))),
        }
    }

    pub(crate) fn signed_out() -> Self {
        Self {
            user: Mutex::new(None),
        }
    }
}

#[async_trait]
impl AuthSession for MemoryAuth {
    async fn login(&self, email: &str, _password: &str) -> Result<User, AuthError> {
        let user = User::new(UserId::new("demo-user"), email, User::name_from_email(email));
        *self.user.lock().unwrap() = Some(user.clone());
        Ok(user)
    }

    async fn register(&self, email: &str, password: &str, _name: &str) -> Result<User, AuthError> {
        self.login(email, password).await
    }

    async fn logout(&self) {
        *self.user.lock().unwrap() = None;
    }

    fn current_user(&self) -> Option<User> {
        self.user.lock().unwrap().clone()
    }
}

pub(crate) fn draft(user: Option<&str>, code: &str, created_at: DateTime<Utc>) -> NewQuizResult {
    let code: TypeCode = code.parse().unwrap();
    NewQuizResult {
        user_id: user.map(UserId::new),
        code,
        answers: AnswerSheet::try_new(&[3; 15]).unwrap(),
        pet_name: Some("Mochi".to_string()),
        profile: TypeCatalog::get_or_default(&code),
        created_at,
    }
}
