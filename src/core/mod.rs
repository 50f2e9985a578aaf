//! Core types for the Bloomgate question validator.
//!
//! This module contains the foundational types shared by every layer:
//! - Taxonomy levels
//! - Text normalization and tokenization
//! - The per-question validation context
//! - Outcome and error types

pub mod level;
pub mod text;
pub mod context;
pub mod error;

// Re-export commonly used types
pub use level::{ClaimedLevel, ParseLevelError, TaxonomyLevel};
pub use context::QuestionContext;
pub use error::{
    BloomError, BloomResult, ConfigError, Rejection, RejectionKind, StoreError, ValidationResult,
};
