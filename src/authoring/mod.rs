//! Question authoring.
//!
//! The request-handling side of the system: accepted questions are forwarded
//! to a [`QuestionStore`] keyed by teacher. Authentication happens before this
//! layer; it only ever sees an already-resolved [`TeacherId`].

pub mod service;
pub mod store;

pub use service::{QuestionService, QuestionSubmission, SubmissionOutcome, SAVED_MESSAGE};
pub use store::{
    InMemoryQuestionStore, NewQuestion, QuestionId, QuestionStore, StoredQuestion, TeacherId,
};
