//! Question validation.
//!
//! The validator runs an ordered list of lexical stages over a question and
//! stops at the first rejection.

pub mod batch;
pub mod pipeline;
pub mod stages;

pub use batch::{validate_batch, BatchItem, BatchReport};
pub use pipeline::{QuestionValidator, ValidationRequest};
pub use stages::{KeywordPresenceCheck, RestrictedPhraseCheck, RestrictedWordCheck, ValidationStage};
