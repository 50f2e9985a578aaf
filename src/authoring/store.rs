//! Question persistence.

use crate::core::error::StoreResult;
use crate::core::level::TaxonomyLevel;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of an authenticated teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeacherId(pub u64);

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "teacher#{}", self.0)
    }
}

/// Unique identifier for a stored question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub Uuid);

impl QuestionId {
    /// Create a new random question ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// An accepted question on its way to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    /// Author.
    pub teacher: TeacherId,
    /// Claimed level.
    pub level: TaxonomyLevel,
    /// Question text as the author wrote it.
    pub text: String,
}

/// A persisted question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredQuestion {
    /// Assigned by the store.
    pub id: QuestionId,
    /// Author.
    pub teacher: TeacherId,
    /// Claimed level.
    pub level: TaxonomyLevel,
    /// Question text as submitted.
    pub text: String,
    /// Assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// Persistence for accepted questions.
///
/// The store assigns identifiers and creation timestamps.
pub trait QuestionStore: Send + Sync {
    /// Persist a question.
    fn insert(&self, question: NewQuestion) -> StoreResult<StoredQuestion>;

    /// Questions of one teacher, newest first.
    fn list_for_teacher(&self, teacher: TeacherId) -> StoreResult<Vec<StoredQuestion>>;
}

/// In-memory question store.
///
/// Records are kept in insertion order; listing walks them backwards so ties
/// in `created_at` resolve to the most recent insert.
#[derive(Debug, Default)]
pub struct InMemoryQuestionStore {
    questions: RwLock<Vec<StoredQuestion>>,
}

impl InMemoryQuestionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored questions.
    pub fn len(&self) -> usize {
        self.questions.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.questions.read().is_empty()
    }
}

impl QuestionStore for InMemoryQuestionStore {
    fn insert(&self, question: NewQuestion) -> StoreResult<StoredQuestion> {
        let stored = StoredQuestion {
            id: QuestionId::new(),
            teacher: question.teacher,
            level: question.level,
            text: question.text,
            created_at: Utc::now(),
        };
        self.questions.write().push(stored.clone());
        Ok(stored)
    }

    fn list_for_teacher(&self, teacher: TeacherId) -> StoreResult<Vec<StoredQuestion>> {
        let mut list: Vec<StoredQuestion> = self
            .questions
            .read()
            .iter()
            .rev()
            .filter(|q| q.teacher == teacher)
            .cloned()
            .collect();
        // Stable sort keeps reverse insertion order among equal timestamps.
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }
}
