//! Account entities for the local login session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a user account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A signed-in user (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(id: UserId, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            created_at: Utc::now(),
            last_login: None,
        }
    }

    /// Display name derived from an email address (the part before `@`)
    pub fn name_from_email(email: &str) -> &str {
        email.split('@').next().unwrap_or(email)
    }
}
