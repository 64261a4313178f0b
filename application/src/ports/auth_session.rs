//! Authentication session port
//!
//! Tracks which user (if any) is signed in for the running process.

use async_trait::async_trait;
use pawtype_domain::User;
use thiserror::Error;

/// Errors raised by sign-in and registration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Email, password and name are all required")]
    IncompleteRegistration,
}

/// Port for the current login session
#[async_trait]
pub trait AuthSession: Send + Sync {
    /// Sign in and make the user current
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Create an account and sign it in
    async fn register(&self, email: &str, password: &str, name: &str) -> Result<User, AuthError>;

    /// Clear the current user
    async fn logout(&self);

    /// The signed-in user, if any
    fn current_user(&self) -> Option<User>;
}
