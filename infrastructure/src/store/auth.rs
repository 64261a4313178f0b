//! In-memory [`AuthSession`]
//!
//! Accepts any non-empty credentials and signs in as the single demo user.

use super::StoreState;
use async_trait::async_trait;
use chrono::Utc;
use pawtype_application::{AuthError, AuthSession};
use pawtype_domain::{User, UserId};
use std::sync::Arc;
use tracing::info;

/// Id every login maps to
pub const DEMO_USER_ID: &str = "demo-user";

pub struct MemoryAuthSession {
    state: Arc<StoreState>,
}

impl MemoryAuthSession {
    pub(crate) fn new(state: Arc<StoreState>) -> Self {
        Self { state }
    }

    fn set_current(&self, user: Option<User>) {
        *self
            .state
            .current_user
            .write()
            .unwrap_or_else(|e| e.into_inner()) = user;
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[async_trait]
impl AuthSession for MemoryAuthSession {
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if !filled(email) || !filled(password) {
            return Err(AuthError::MissingCredentials);
        }

        let email = email.trim();
        let mut user = User::new(
            UserId::new(DEMO_USER_ID),
            email,
            User::name_from_email(email),
        );
        user.last_login = Some(Utc::now());

        info!("Signed in as {}", user.email);
        self.set_current(Some(user.clone()));
        Ok(user)
    }

    async fn register(&self, email: &str, password: &str, name: &str) -> Result<User, AuthError> {
        if !filled(email) || !filled(password) || !filled(name) {
            return Err(AuthError::IncompleteRegistration);
        }

        let mut user = User::new(UserId::new(DEMO_USER_ID), email.trim(), name.trim());
        user.last_login = Some(user.created_at);

        info!("Registered {}", user.email);
        self.set_current(Some(user.clone()));
        Ok(user)
    }

    async fn logout(&self) {
        self.set_current(None);
    }

    fn current_user(&self) -> Option<User> {
        self.state
            .current_user
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::super::AppStore;
    use super::*;

    #[tokio::test]
    async fn test_login_uses_email_local_part() {
        let auth = AppStore::new().auth();

        let user = auth.login("luna@example.com", "secret").await.unwrap();

        assert_eq!(user.id.as_str(), DEMO_USER_ID);
        assert_eq!(user.name, "luna");
        assert!(user.last_login.is_some());
        assert_eq!(auth.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let auth = AppStore::new().auth();

        assert_eq!(
            auth.login("", "secret").await.unwrap_err(),
            AuthError::MissingCredentials
        );
        assert_eq!(
            auth.login("luna@example.com", " ").await.unwrap_err(),
            AuthError::MissingCredentials
        );
        assert!(auth.current_user().is_none());
    }

    #[tokio::test]
    async fn test_register_requires_name() {
        let auth = AppStore::new().auth();

        let err = auth.register("luna@example.com", "pw", "").await.unwrap_err();
        assert_eq!(err, AuthError::IncompleteRegistration);

        let user = auth.register("luna@example.com", "pw", "Luna").await.unwrap();
        assert_eq!(user.name, "Luna");
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let auth = AppStore::new().auth();
        auth.login("luna@example.com", "pw").await.unwrap();

        auth.logout().await;

        assert!(auth.current_user().is_none());
    }
}
