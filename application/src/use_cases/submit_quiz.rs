//! Submit Quiz use case
//!
//! Validates the pet details and answers, scores them, looks up the type
//! profile and records the result for the signed-in user (if any).

use crate::ports::auth_session::AuthSession;
use crate::ports::result_repository::{NewQuizResult, RepositoryError, ResultRepository};
use chrono::Utc;
use pawtype_domain::{
    AnswerSheet, DomainError, PetInfo, QuizResult, ScoreOutcome, TypeCatalog, score_sheet,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur when submitting a quiz
#[derive(Error, Debug)]
pub enum SubmitQuizError {
    #[error("Enter your dog's name and breed before submitting")]
    MissingPetInfo,

    #[error(transparent)]
    InvalidAnswers(#[from] DomainError),

    #[error("Could not save the result: {0}")]
    Repository(#[from] RepositoryError),
}

/// Input for the [`SubmitQuizUseCase`]
#[derive(Debug, Clone)]
pub struct SubmitQuizInput {
    pub pet_name: String,
    pub breed: String,
    pub answers: Vec<u8>,
}

impl SubmitQuizInput {
    pub fn new(pet_name: impl Into<String>, breed: impl Into<String>, answers: Vec<u8>) -> Self {
        Self {
            pet_name: pet_name.into(),
            breed: breed.into(),
            answers,
        }
    }
}

/// Output of a successful submission
#[derive(Debug, Clone)]
pub struct QuizSubmission {
    pub result: QuizResult,
    pub score: ScoreOutcome,
    pub pet: PetInfo,
}

/// Use case for scoring and recording a completed quiz
pub struct SubmitQuizUseCase {
    results: Arc<dyn ResultRepository>,
    auth: Arc<dyn AuthSession>,
}

impl SubmitQuizUseCase {
    pub fn new(results: Arc<dyn ResultRepository>, auth: Arc<dyn AuthSession>) -> Self {
        Self { results, auth }
    }

    pub async fn execute(&self, input: SubmitQuizInput) -> Result<QuizSubmission, SubmitQuizError> {
        let pet = PetInfo::try_new(&input.pet_name, &input.breed)
            .ok_or(SubmitQuizError::MissingPetInfo)?;
        let answers = AnswerSheet::try_new(&input.answers)?;

        let score = score_sheet(&answers);
        let profile = TypeCatalog::get_or_default(&score.code);
        let user_id = self.auth.current_user().map(|u| u.id);

        info!("Quiz for {} scored {}", pet.name, score.code);

        let result = self
            .results
            .insert(NewQuizResult {
                user_id,
                code: score.code,
                answers,
                pet_name: Some(pet.name.clone()),
                profile,
                created_at: Utc::now(),
            })
            .await?;

        Ok(QuizSubmission { result, score, pet })
    }
}
