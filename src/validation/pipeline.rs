//! Question validator implementation.

use crate::core::context::QuestionContext;
use crate::core::error::ValidationResult;
use crate::core::level::ClaimedLevel;
use crate::validation::stages::{
    KeywordPresenceCheck, RestrictedPhraseCheck, RestrictedWordCheck, ValidationStage,
};
use crate::wordlists::Wordlists;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A question submitted for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// The level the author claims.
    pub level: ClaimedLevel,
    /// Raw question text.
    pub text: String,
}

impl ValidationRequest {
    /// Create a request.
    pub fn new(level: impl Into<ClaimedLevel>, text: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            text: text.into(),
        }
    }

    /// Create a request from a raw level name.
    pub fn from_raw(level: &str, text: impl Into<String>) -> Self {
        Self::new(ClaimedLevel::from_raw(level), text)
    }
}

/// Rule-based question validator.
///
/// Runs restricted-phrase, restricted-word and keyword-presence checks in
/// that order; the first failing check decides the result. The validator
/// holds no mutable state and can be shared across threads.
pub struct QuestionValidator {
    wordlists: Arc<Wordlists>,
    stages: Vec<Box<dyn ValidationStage>>,
}

impl QuestionValidator {
    /// Create a validator with the standard stages.
    pub fn new(wordlists: Arc<Wordlists>) -> Self {
        Self {
            wordlists,
            stages: vec![
                Box::new(RestrictedPhraseCheck),
                Box::new(RestrictedWordCheck),
                Box::new(KeywordPresenceCheck),
            ],
        }
    }

    /// Create a validator over the built-in wordlists.
    pub fn with_builtin_wordlists() -> Self {
        Self::new(Arc::new(Wordlists::builtin()))
    }

    /// Append a stage. It runs after all existing stages.
    pub fn add_stage(&mut self, stage: Box<dyn ValidationStage>) {
        self.stages.push(stage);
    }

    /// The wordlists this validator reads.
    pub fn wordlists(&self) -> &Arc<Wordlists> {
        &self.wordlists
    }

    /// Names of the stages, in run order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Validate a request.
    pub fn validate(&self, request: &ValidationRequest) -> ValidationResult {
        self.run(&request.level, &request.text)
    }

    /// Validate text against a level without building a request.
    pub fn validate_text(&self, level: impl Into<ClaimedLevel>, text: &str) -> ValidationResult {
        self.run(&level.into(), text)
    }

    fn run(&self, level: &ClaimedLevel, text: &str) -> ValidationResult {
        let question = QuestionContext::new(level, text);

        for stage in &self.stages {
            log::trace!("Running {}", stage.name());
            if let Err(rejection) = stage.check(&question, &self.wordlists) {
                log::debug!(
                    "{} rejected question for level {}: {}",
                    stage.name(),
                    level,
                    rejection.kind()
                );
                return ValidationResult::Rejected(rejection);
            }
        }

        ValidationResult::Accepted
    }
}

impl Default for QuestionValidator {
    fn default() -> Self {
        Self::with_builtin_wordlists()
    }
}
