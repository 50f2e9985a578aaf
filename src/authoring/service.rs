//! Question submission.
//!
//! [`QuestionService`] sits between the request layer and the store. It
//! guards raw input, runs the validator, and persists only accepted
//! questions.

use crate::authoring::store::{NewQuestion, QuestionStore, StoredQuestion, TeacherId};
use crate::core::error::{BloomError, BloomResult, Rejection, ValidationResult};
use crate::core::level::TaxonomyLevel;
use crate::validation::QuestionValidator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Message shown after a question is saved.
pub const SAVED_MESSAGE: &str = "Question saved successfully!";

/// Raw form input for a new question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSubmission {
    /// Level name as typed or selected by the author.
    pub level: String,
    /// Question text; absent when the form field was missing.
    pub text: Option<String>,
}

impl QuestionSubmission {
    /// Create a submission with text.
    pub fn new(level: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            text: Some(text.into()),
        }
    }
}

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The question passed validation and was stored.
    Saved(StoredQuestion),
    /// The question failed validation and was not stored.
    Rejected(Rejection),
}

impl SubmissionOutcome {
    /// Message for the author.
    pub fn message(&self) -> String {
        match self {
            SubmissionOutcome::Saved(_) => SAVED_MESSAGE.to_string(),
            SubmissionOutcome::Rejected(rejection) => rejection.to_string(),
        }
    }

    /// Whether the question was stored.
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmissionOutcome::Saved(_))
    }
}

/// Validates and stores questions on behalf of authenticated teachers.
pub struct QuestionService<S: QuestionStore> {
    validator: Arc<QuestionValidator>,
    store: S,
}

impl<S: QuestionStore> QuestionService<S> {
    /// Create a service.
    pub fn new(validator: Arc<QuestionValidator>, store: S) -> Self {
        Self { validator, store }
    }

    /// The validator in use.
    pub fn validator(&self) -> &QuestionValidator {
        &self.validator
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate a submission and store it if accepted.
    pub fn submit(
        &self,
        teacher: TeacherId,
        submission: &QuestionSubmission,
    ) -> BloomResult<SubmissionOutcome> {
        let text = submission.text.as_deref().ok_or(BloomError::MissingText)?;
        let level = TaxonomyLevel::parse_lenient(&submission.level)
            .map_err(|_| BloomError::UnknownLevel(submission.level.clone()))?;

        match self.validator.validate_text(level, text) {
            ValidationResult::Rejected(rejection) => {
                log::info!("Rejected {} question from {}: {}", level, teacher, rejection.kind());
                Ok(SubmissionOutcome::Rejected(rejection))
            }
            ValidationResult::Accepted => {
                let stored = self
                    .store
                    .insert(NewQuestion {
                        teacher,
                        level,
                        text: text.to_string(),
                    })
                    .map_err(|e| {
                        log::warn!("Failed to store question from {}: {}", teacher, e);
                        BloomError::Store(e)
                    })?;
                log::info!("Stored {} question {} from {}", level, stored.id, teacher);
                Ok(SubmissionOutcome::Saved(stored))
            }
        }
    }

    /// Questions of a teacher, newest first.
    pub fn list(&self, teacher: TeacherId) -> BloomResult<Vec<StoredQuestion>> {
        Ok(self.store.list_for_teacher(teacher)?)
    }
}
