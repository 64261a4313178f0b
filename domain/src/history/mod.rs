//! Quiz history entities

use crate::auth::UserId;
use crate::catalog::TypeProfile;
use crate::core::string::non_blank;
use crate::quiz::answer::AnswerSheet;
use crate::quiz::code::TypeCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a stored quiz result
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultId(String);

impl ResultId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id derived from the creation time and a per-store sequence number,
    /// `result-<millis>-<seq>`
    pub fn generate(at: DateTime<Utc>, seq: u64) -> Self {
        Self(format!("result-{}-{}", at.timestamp_millis(), seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResultId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The dog the quiz is about (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetInfo {
    pub name: String,
    pub breed: String,
}

impl PetInfo {
    /// Trimmed pet info, `None` when the name or breed is blank
    pub fn try_new(name: &str, breed: &str) -> Option<Self> {
        Some(Self {
            name: non_blank(name)?.to_string(),
            breed: non_blank(breed)?.to_string(),
        })
    }
}

/// Sort direction for history listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// A completed quiz (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: ResultId,
    pub user_id: Option<UserId>,
    pub code: TypeCode,
    pub answers: AnswerSheet,
    pub pet_name: Option<String>,
    pub profile: TypeProfile,
    pub created_at: DateTime<Utc>,
}
