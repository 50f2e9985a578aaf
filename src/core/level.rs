//! Bloom's Taxonomy levels.
//!
//! The six cognitive levels are fixed for the lifetime of the process. Requests
//! coming from outside may name a level that is not part of the enumeration, so
//! [`ClaimedLevel`] keeps the raw name around instead of failing early.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cognitive level of Bloom's Taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaxonomyLevel {
    /// Retrieve facts and basic concepts.
    Remember,
    /// Explain ideas or concepts.
    Understand,
    /// Use information in new situations.
    Apply,
    /// Draw connections among ideas.
    Analyze,
    /// Justify a stand or decision.
    Evaluate,
    /// Produce new or original work.
    Create,
}

impl TaxonomyLevel {
    /// Get the display name for this level.
    pub fn display_name(&self) -> &'static str {
        match self {
            TaxonomyLevel::Remember => "Remember",
            TaxonomyLevel::Understand => "Understand",
            TaxonomyLevel::Apply => "Apply",
            TaxonomyLevel::Analyze => "Analyze",
            TaxonomyLevel::Evaluate => "Evaluate",
            TaxonomyLevel::Create => "Create",
        }
    }

    /// Get all levels, lowest to highest.
    pub fn all() -> &'static [TaxonomyLevel] {
        &[
            TaxonomyLevel::Remember,
            TaxonomyLevel::Understand,
            TaxonomyLevel::Apply,
            TaxonomyLevel::Analyze,
            TaxonomyLevel::Evaluate,
            TaxonomyLevel::Create,
        ]
    }

    /// Parse a level name typed by a person: surrounding whitespace and case
    /// are ignored.
    ///
    /// [`FromStr`] only accepts the exact display name.
    pub fn parse_lenient(s: &str) -> Result<Self, ParseLevelError> {
        let name = s.trim();
        TaxonomyLevel::all()
            .iter()
            .copied()
            .find(|level| level.display_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

impl fmt::Display for TaxonomyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a string names no taxonomy level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(pub String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a Bloom's Taxonomy level", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for TaxonomyLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaxonomyLevel::all()
            .iter()
            .copied()
            .find(|level| level.display_name() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// The level a question author claims, as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimedLevel {
    /// One of the six taxonomy levels.
    Known(TaxonomyLevel),
    /// A name outside the enumeration, kept verbatim.
    Unrecognized(String),
}

impl ClaimedLevel {
    /// Classify a raw level name. Only the exact display name is recognized.
    pub fn from_raw(raw: &str) -> Self {
        match raw.parse() {
            Ok(level) => ClaimedLevel::Known(level),
            Err(_) => ClaimedLevel::Unrecognized(raw.to_string()),
        }
    }

    /// The taxonomy level, if recognized.
    pub fn level(&self) -> Option<TaxonomyLevel> {
        match self {
            ClaimedLevel::Known(level) => Some(*level),
            ClaimedLevel::Unrecognized(_) => None,
        }
    }

    /// Name to show in messages.
    pub fn name(&self) -> &str {
        match self {
            ClaimedLevel::Known(level) => level.display_name(),
            ClaimedLevel::Unrecognized(raw) => raw,
        }
    }
}

impl From<TaxonomyLevel> for ClaimedLevel {
    fn from(level: TaxonomyLevel) -> Self {
        ClaimedLevel::Known(level)
    }
}

impl From<String> for ClaimedLevel {
    fn from(raw: String) -> Self {
        ClaimedLevel::from_raw(&raw)
    }
}

impl From<ClaimedLevel> for String {
    fn from(level: ClaimedLevel) -> Self {
        match level {
            ClaimedLevel::Known(level) => level.display_name().to_string(),
            ClaimedLevel::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for ClaimedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
