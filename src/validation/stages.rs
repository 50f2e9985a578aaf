//! Individual validation stages.
//!
//! Each stage checks one lexical property of a question. Stages run in a fixed
//! order and the first rejection ends validation.

use crate::core::context::QuestionContext;
use crate::core::error::Rejection;
use crate::wordlists::Wordlists;

/// Trait for validation stages.
pub trait ValidationStage: Send + Sync {
    /// Name of this validation stage.
    fn name(&self) -> &str;

    /// Check the question.
    ///
    /// Returns Ok if the question passes this stage, or the rejection.
    fn check(&self, question: &QuestionContext<'_>, wordlists: &Wordlists) -> Result<(), Rejection>;
}

/// Restricted-phrase check.
///
/// Rejects text containing any restricted phrase as a substring. Phrases are
/// tried in configured order and the first hit is reported.
pub struct RestrictedPhraseCheck;

impl ValidationStage for RestrictedPhraseCheck {
    fn name(&self) -> &str {
        "Restricted Phrase Check"
    }

    fn check(&self, question: &QuestionContext<'_>, wordlists: &Wordlists) -> Result<(), Rejection> {
        match wordlists
            .restricted_phrases()
            .iter()
            .find(|phrase| question.contains(phrase))
        {
            Some(phrase) => Err(Rejection::PhraseRestricted {
                phrase: phrase.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Restricted-word check.
///
/// Matches whole tokens only, so "know" does not match "knowledge".
pub struct RestrictedWordCheck;

impl ValidationStage for RestrictedWordCheck {
    fn name(&self) -> &str {
        "Restricted Word Check"
    }

    fn check(&self, question: &QuestionContext<'_>, wordlists: &Wordlists) -> Result<(), Rejection> {
        let tokens: Vec<&str> = question.tokens().collect();

        // Report in restricted-word order, not in text order.
        match wordlists
            .restricted_words()
            .iter()
            .find(|word| tokens.contains(word))
        {
            Some(word) => Err(Rejection::WordRestricted {
                word: word.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Keyword-presence check.
///
/// Requires at least one keyword of the claimed level as a substring. An
/// unrecognized level has no keywords and always fails here.
pub struct KeywordPresenceCheck;

impl ValidationStage for KeywordPresenceCheck {
    fn name(&self) -> &str {
        "Keyword Presence Check"
    }

    fn check(&self, question: &QuestionContext<'_>, wordlists: &Wordlists) -> Result<(), Rejection> {
        let (keywords, examples) = match question.level().level() {
            Some(level) => (wordlists.keywords_for(level), wordlists.keyword_examples(level)),
            None => (&[][..], Vec::new()),
        };

        if keywords.iter().any(|keyword| question.contains(keyword)) {
            Ok(())
        } else {
            Err(Rejection::KeywordMissing {
                level: question.level().clone(),
                examples,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::{ClaimedLevel, TaxonomyLevel};

    fn context<'a>(level: &'a ClaimedLevel, text: &str) -> QuestionContext<'a> {
        QuestionContext::new(level, text)
    }

    #[test]
    fn test_phrase_check_reports_first_configured_phrase() {
        let lists = Wordlists::builtin();
        let level = ClaimedLevel::Known(TaxonomyLevel::Apply);

        // "list the" comes after "what is" in the phrase order.
        let ctx = context(&level, "List the steps; what is next?");
        assert_eq!(
            RestrictedPhraseCheck.check(&ctx, &lists),
            Err(Rejection::PhraseRestricted { phrase: "what is".into() })
        );
    }

    #[test]
    fn test_phrase_check_matches_inside_words() {
        let lists = Wordlists::builtin();
        let level = ClaimedLevel::Known(TaxonomyLevel::Create);

        let ctx = context(&level, "Redefine the rules of the game");
        assert_eq!(
            RestrictedPhraseCheck.check(&ctx, &lists),
            Err(Rejection::PhraseRestricted { phrase: "define".into() })
        );
    }

    #[test]
    fn test_word_check_requires_whole_token() {
        let lists = Wordlists::builtin();
        let level = ClaimedLevel::Known(TaxonomyLevel::Apply);

        let ctx = context(&level, "Use your knowledge to solve it");
        assert!(RestrictedWordCheck.check(&ctx, &lists).is_ok());

        let ctx = context(&level, "Solve it, then: know.");
        assert_eq!(
            RestrictedWordCheck.check(&ctx, &lists),
            Err(Rejection::WordRestricted { word: "know".into() })
        );
    }

    #[test]
    fn test_word_check_reports_in_list_order() {
        let lists = Wordlists::builtin();
        let level = ClaimedLevel::Known(TaxonomyLevel::Apply);

        // "feel" appears first in the text, "believe" first in the list.
        let ctx = context(&level, "Feel and believe");
        assert_eq!(
            RestrictedWordCheck.check(&ctx, &lists),
            Err(Rejection::WordRestricted { word: "believe".into() })
        );
    }

    #[test]
    fn test_keyword_check() {
        let lists = Wordlists::builtin();
        let level = ClaimedLevel::Known(TaxonomyLevel::Create);

        let ctx = context(&level, "Design a bridge from paper");
        assert!(KeywordPresenceCheck.check(&ctx, &lists).is_ok());

        let ctx = context(&level, "Talk about bridges");
        assert_eq!(
            KeywordPresenceCheck.check(&ctx, &lists),
            Err(Rejection::KeywordMissing {
                level: level.clone(),
                examples: vec!["adapt".into(), "anticipate".into(), "arrange".into()],
            })
        );
    }

    #[test]
    fn test_keyword_check_unknown_level() {
        let lists = Wordlists::builtin();
        let level = ClaimedLevel::Unrecognized("Synthesis".into());

        let ctx = context(&level, "Calculate and design everything");
        assert_eq!(
            KeywordPresenceCheck.check(&ctx, &lists),
            Err(Rejection::KeywordMissing {
                level: level.clone(),
                examples: Vec::new(),
            })
        );
    }
}
