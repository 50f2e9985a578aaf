//! Error and outcome types for Bloomgate.
//!
//! Rejections are ordinary values: a question that fails a lexical check is
//! not an error of the program. Their `Display` output is the message shown to
//! the question author. Operational failures (bad configuration, an
//! unavailable store, malformed input) use the error enums below.

use crate::core::level::ClaimedLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Tag identifying which check rejected a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// The text contains a recall-oriented phrase.
    PhraseRestricted,
    /// The text contains an unmeasurable verb as a whole word.
    WordRestricted,
    /// The text has no keyword of the claimed level.
    KeywordMissing,
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RejectionKind::PhraseRestricted => "phrase_restricted",
            RejectionKind::WordRestricted => "word_restricted",
            RejectionKind::KeywordMissing => "keyword_missing",
        };
        f.write_str(name)
    }
}

/// Reason a question was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    #[error("Validation Failed: Question contains the restricted phrase '{phrase}'.")]
    PhraseRestricted { phrase: String },

    #[error(
        "Validation Failed: Question contains the unmeasurable word '{word}'. \
         These verbs (like 'know', 'understand') are hard to assess."
    )]
    WordRestricted { word: String },

    #[error(
        "Validation Failed: Question must include at least one keyword for the '{level}' level (e.g., {}).",
        .examples.join(", ")
    )]
    KeywordMissing {
        level: ClaimedLevel,
        examples: Vec<String>,
    },
}

impl Rejection {
    /// Which check produced this rejection.
    pub fn kind(&self) -> RejectionKind {
        match self {
            Rejection::PhraseRestricted { .. } => RejectionKind::PhraseRestricted,
            Rejection::WordRestricted { .. } => RejectionKind::WordRestricted,
            Rejection::KeywordMissing { .. } => RejectionKind::KeywordMissing,
        }
    }

    /// The matched phrase, the matched word, or the example keywords.
    pub fn detail(&self) -> String {
        match self {
            Rejection::PhraseRestricted { phrase } => phrase.clone(),
            Rejection::WordRestricted { word } => word.clone(),
            Rejection::KeywordMissing { examples, .. } => examples.join(", "),
        }
    }

    /// Get a suggestion for rewriting the question.
    pub fn suggested_fix(&self) -> Option<String> {
        match self {
            Rejection::PhraseRestricted { phrase } => Some(format!(
                "Rephrase without '{}' so the question asks for an observable action",
                phrase
            )),
            Rejection::WordRestricted { word } => Some(format!(
                "Replace '{}' with a measurable verb",
                word
            )),
            Rejection::KeywordMissing { level, examples } if !examples.is_empty() => Some(format!(
                "Use a {} verb such as {}",
                level,
                examples.join(", ")
            )),
            Rejection::KeywordMissing { .. } => None,
        }
    }
}

/// Outcome of validating one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "rejection", rename_all = "snake_case")]
pub enum ValidationResult {
    /// Every check passed.
    Accepted,
    /// A check failed; the first failing check wins.
    Rejected(Rejection),
}

impl ValidationResult {
    /// Whether the question was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ValidationResult::Accepted => None,
            ValidationResult::Rejected(rejection) => Some(rejection),
        }
    }

    /// Tag of the failing check, if any.
    pub fn rejection_kind(&self) -> Option<RejectionKind> {
        self.rejection().map(Rejection::kind)
    }
}

impl From<Result<(), Rejection>> for ValidationResult {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => ValidationResult::Accepted,
            Err(rejection) => ValidationResult::Rejected(rejection),
        }
    }
}

/// Top-level error type for Bloomgate.
#[derive(Error, Debug)]
pub enum BloomError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Question store error: {0}")]
    Store(#[from] StoreError),

    #[error("Unknown Bloom's Taxonomy level '{0}'")]
    UnknownLevel(String),

    #[error("Question text is missing")]
    MissingText,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML render error: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl BloomError {
    /// Message suitable for showing to a question author.
    pub fn user_message(&self) -> String {
        match self {
            BloomError::Store(_) => {
                "Error saving question to the database. Please try again.".to_string()
            }
            BloomError::UnknownLevel(level) => {
                format!("Please choose a valid Bloom's Taxonomy level ('{}' is not one).", level)
            }
            BloomError::MissingText => "Please enter the question text.".to_string(),
            other => other.to_string(),
        }
    }
}

/// Errors in the wordlist configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown taxonomy level '{0}' in keyword table")]
    UnknownLevel(String),

    #[error("keyword table has no entry for level {0}")]
    MissingLevel(String),

    #[error("level {0} appears more than once in keyword table")]
    DuplicateLevel(String),

    #[error("keyword list for level {0} is empty")]
    EmptyKeywords(String),

    #[error("restricted word list is empty")]
    EmptyRestrictedWords,

    #[error("restricted phrase list is empty")]
    EmptyRestrictedPhrases,

    #[error("blank entry in {0}")]
    EmptyEntry(String),
}

/// Errors reported by a question store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Bloomgate operations.
pub type BloomResult<T> = Result<T, BloomError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::TaxonomyLevel;

    #[test]
    fn test_rejection_messages() {
        let phrase = Rejection::PhraseRestricted { phrase: "what is".to_string() };
        assert_eq!(
            phrase.to_string(),
            "Validation Failed: Question contains the restricted phrase 'what is'."
        );

        let word = Rejection::WordRestricted { word: "know".to_string() };
        assert_eq!(
            word.to_string(),
            "Validation Failed: Question contains the unmeasurable word 'know'. \
             These verbs (like 'know', 'understand') are hard to assess."
        );

        let missing = Rejection::KeywordMissing {
            level: TaxonomyLevel::Analyze.into(),
            examples: vec!["analyze".into(), "arrange".into(), "breakdown".into()],
        };
        assert_eq!(
            missing.to_string(),
            "Validation Failed: Question must include at least one keyword for the 'Analyze' level \
             (e.g., analyze, arrange, breakdown)."
        );
    }

    #[test]
    fn test_rejection_kind_and_detail() {
        let missing = Rejection::KeywordMissing {
            level: ClaimedLevel::Unrecognized("Recall".into()),
            examples: Vec::new(),
        };
        assert_eq!(missing.kind(), RejectionKind::KeywordMissing);
        assert_eq!(missing.detail(), "");
        assert!(missing.suggested_fix().is_none());

        let word = Rejection::WordRestricted { word: "feel".into() };
        assert_eq!(word.kind(), RejectionKind::WordRestricted);
        assert_eq!(word.detail(), "feel");
        assert!(word.suggested_fix().unwrap().contains("feel"));
    }

    #[test]
    fn test_validation_result_serialization() {
        let result = ValidationResult::Rejected(Rejection::PhraseRestricted {
            phrase: "define".into(),
        });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["rejection"]["kind"], "phrase_restricted");
        assert_eq!(json["rejection"]["phrase"], "define");

        let json = serde_json::to_value(ValidationResult::Accepted).unwrap();
        assert_eq!(json["status"], "accepted");
    }

    #[test]
    fn test_store_error_user_message() {
        let err = BloomError::from(StoreError::Unavailable("connection refused".into()));
        assert_eq!(
            err.user_message(),
            "Error saving question to the database. Please try again."
        );
        assert!(err.to_string().contains("connection refused"));
    }
}
