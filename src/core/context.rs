//! Per-question context handed to validation stages.

use crate::core::level::ClaimedLevel;
use crate::core::text;

/// A question prepared for validation.
///
/// The text is normalized once on construction and every stage reads the same
/// normalized copy.
#[derive(Debug, Clone)]
pub struct QuestionContext<'a> {
    level: &'a ClaimedLevel,
    normalized: String,
}

impl<'a> QuestionContext<'a> {
    /// Normalize `text` for the claimed level.
    pub fn new(level: &'a ClaimedLevel, text: &str) -> Self {
        Self {
            level,
            normalized: text::normalize(text),
        }
    }

    /// The level the author claims.
    pub fn level(&self) -> &ClaimedLevel {
        self.level
    }

    /// Lower-cased question text.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whether `needle` occurs anywhere in the normalized text.
    pub fn contains(&self, needle: &str) -> bool {
        self.normalized.contains(needle)
    }

    /// Tokens of the normalized text.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        text::tokenize(&self.normalized)
    }

    /// Whether `word` is one of the tokens.
    pub fn has_token(&self, word: &str) -> bool {
        self.tokens().any(|token| token == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::TaxonomyLevel;

    #[test]
    fn test_context_normalizes_once() {
        let level = ClaimedLevel::Known(TaxonomyLevel::Apply);
        let ctx = QuestionContext::new(&level, "Calculate The AREA");
        assert_eq!(ctx.normalized(), "calculate the area");
        assert!(ctx.contains("the area"));
        assert_eq!(ctx.level(), &level);
    }

    #[test]
    fn test_has_token_is_exact() {
        let level = ClaimedLevel::Known(TaxonomyLevel::Remember);
        let ctx = QuestionContext::new(&level, "Test your knowledge, then Know it!");
        assert!(ctx.has_token("know"));
        assert!(ctx.has_token("knowledge"));
        assert!(!ctx.has_token("now"));
    }
}
