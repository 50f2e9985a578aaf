//! # Bloomgate - Bloom's Taxonomy Question Validation
//!
//! Bloomgate checks learning-objective questions against the cognitive level
//! their author claims. Validation is purely lexical and rule-based.
//!
//! ## Features
//!
//! - **Ordered Checks**: restricted phrases, then restricted words, then level keywords; the first failing check decides
//! - **Configurable Wordlists**: built-in tables or a TOML file loaded at startup
//! - **Thread-safe**: the validator is immutable and can be shared freely
//! - **Batch Validation**: validate many questions in parallel
//! - **Authoring Service**: stores accepted questions per teacher through a pluggable store
//!
//! ## Quick Start
//!
//! ```rust
//! use bloomgate::prelude::*;
//!
//! let validator = QuestionValidator::with_builtin_wordlists();
//!
//! let result = validator.validate(&ValidationRequest::new(
//!     TaxonomyLevel::Apply,
//!     "Students will calculate the area of a triangle",
//! ));
//! assert!(result.is_accepted());
//!
//! let result = validator.validate_text(TaxonomyLevel::Remember, "Define the term photosynthesis");
//! assert_eq!(result.rejection_kind(), Some(RejectionKind::PhraseRestricted));
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Taxonomy levels, text handling, outcome and error types
//! - [`wordlists`]: The keyword, restricted-word and restricted-phrase tables
//! - [`validation`]: The staged question validator and batch validation
//! - [`authoring`]: Question submission and storage

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod authoring;
pub mod core;
pub mod validation;
pub mod wordlists;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust
/// use bloomgate::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::level::{ClaimedLevel, TaxonomyLevel};
    pub use crate::core::context::QuestionContext;

    // Outcomes and errors
    pub use crate::core::error::{
        BloomError, BloomResult, ConfigError, Rejection, RejectionKind, StoreError,
        ValidationResult,
    };

    // Wordlists
    pub use crate::wordlists::{KeywordTable, RestrictedPhraseSet, RestrictedWordSet, Wordlists};

    // Validation
    pub use crate::validation::batch::{validate_batch, BatchItem, BatchReport};
    pub use crate::validation::pipeline::{QuestionValidator, ValidationRequest};
    pub use crate::validation::stages::{
        KeywordPresenceCheck, RestrictedPhraseCheck, RestrictedWordCheck, ValidationStage,
    };

    // Authoring
    pub use crate::authoring::service::{QuestionService, QuestionSubmission, SubmissionOutcome};
    pub use crate::authoring::store::{
        InMemoryQuestionStore, NewQuestion, QuestionId, QuestionStore, StoredQuestion, TeacherId,
    };
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
        assert_eq!(super::NAME, "bloomgate");
    }

    #[test]
    fn test_shared_validator_across_threads() {
        let validator = Arc::new(QuestionValidator::with_builtin_wordlists());

        let handles: Vec<_> = TaxonomyLevel::all()
            .iter()
            .map(|level| {
                let validator = Arc::clone(&validator);
                let level = *level;
                thread::spawn(move || {
                    let keyword = validator.wordlists().keywords_for(level)[0].clone();
                    validator.validate_text(level, &format!("Please {} this", keyword))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_accepted());
        }
    }

    #[test]
    fn test_service_with_custom_wordlists() {
        let lists = Wordlists::from_toml_str(
            r#"
restricted_words = ["guess"]
restricted_phrases = ["tell me"]

[keywords]
Remember = ["recite"]
Understand = ["explain"]
Apply = ["solve"]
Analyze = ["contrast"]
Evaluate = ["judge"]
Create = ["design"]
"#,
        )
        .unwrap();

        let service = QuestionService::new(
            Arc::new(QuestionValidator::new(Arc::new(lists))),
            InMemoryQuestionStore::new(),
        );

        let outcome = service
            .submit(TeacherId(9), &QuestionSubmission::new("Remember", "Recite the poem"))
            .unwrap();
        assert!(outcome.is_saved());

        let outcome = service
            .submit(TeacherId(9), &QuestionSubmission::new("Remember", "Guess the poem, then recite it"))
            .unwrap();
        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected(Rejection::WordRestricted { word: "guess".into() })
        );
        assert_eq!(service.list(TeacherId(9)).unwrap().len(), 1);
    }
}
