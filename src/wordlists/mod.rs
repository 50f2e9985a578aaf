//! The three lexical tables the validator reads.
//!
//! Tables are built once at startup, either from the built-in lists or from a
//! TOML file (see [`loader`]), and are read-only afterwards. Every entry is
//! stored lower-case and trimmed so the validator can compare against
//! normalized text directly.

pub mod builtin;
pub mod loader;

use crate::core::error::ConfigError;
use crate::core::level::TaxonomyLevel;
use indexmap::{IndexMap, IndexSet};

/// Number of keywords quoted in a missing-keyword message.
pub const EXAMPLE_KEYWORD_COUNT: usize = 3;

/// Keywords per taxonomy level, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    levels: IndexMap<TaxonomyLevel, Vec<String>>,
}

impl KeywordTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keywords of a level, replacing any previous list.
    pub fn insert<I, S>(&mut self, level: TaxonomyLevel, keywords: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let context = format!("keywords for {}", level);
        let keywords = clean_entries(keywords, &context)?;
        if keywords.is_empty() {
            return Err(ConfigError::EmptyKeywords(level.to_string()));
        }
        self.levels.insert(level, keywords);
        Ok(())
    }

    /// Whether the level has an entry.
    pub fn contains(&self, level: TaxonomyLevel) -> bool {
        self.levels.contains_key(&level)
    }

    /// Keywords of a level; empty if the level has no entry.
    pub fn get(&self, level: TaxonomyLevel) -> &[String] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over levels and their keywords.
    pub fn iter(&self) -> impl Iterator<Item = (TaxonomyLevel, &[String])> {
        self.levels.iter().map(|(level, words)| (*level, words.as_slice()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for level in TaxonomyLevel::all() {
            match self.levels.get(level) {
                None => return Err(ConfigError::MissingLevel(level.to_string())),
                Some(words) if words.is_empty() => {
                    return Err(ConfigError::EmptyKeywords(level.to_string()))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Single words that make an objective unmeasurable.
///
/// Iteration follows insertion order; duplicates keep their first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictedWordSet {
    words: IndexSet<String>,
}

impl RestrictedWordSet {
    /// Build the set from a list of words.
    pub fn new<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: IndexSet<String> = clean_entries(words, "restricted words")?.into_iter().collect();
        if words.is_empty() {
            return Err(ConfigError::EmptyRestrictedWords);
        }
        Ok(Self { words })
    }

    /// Iterate in check order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Whether `word` is restricted.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Recall-oriented phrases, checked in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictedPhraseSet {
    phrases: Vec<String>,
}

impl RestrictedPhraseSet {
    /// Build the sequence from a list of phrases.
    pub fn new<I, S>(phrases: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = clean_entries(phrases, "restricted phrases")?;
        if phrases.is_empty() {
            return Err(ConfigError::EmptyRestrictedPhrases);
        }
        Ok(Self { phrases })
    }

    /// Iterate in check order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// All three tables together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlists {
    keywords: KeywordTable,
    restricted_words: RestrictedWordSet,
    restricted_phrases: RestrictedPhraseSet,
}

impl Wordlists {
    /// Combine tables, checking that every level has keywords.
    pub fn new(
        keywords: KeywordTable,
        restricted_words: RestrictedWordSet,
        restricted_phrases: RestrictedPhraseSet,
    ) -> Result<Self, ConfigError> {
        keywords.validate()?;
        if restricted_words.is_empty() {
            return Err(ConfigError::EmptyRestrictedWords);
        }
        if restricted_phrases.is_empty() {
            return Err(ConfigError::EmptyRestrictedPhrases);
        }
        Ok(Self {
            keywords,
            restricted_words,
            restricted_phrases,
        })
    }

    /// The built-in tables.
    pub fn builtin() -> Self {
        let levels = TaxonomyLevel::all()
            .iter()
            .map(|level| (*level, to_owned(builtin::keywords(*level))))
            .collect();

        Self {
            keywords: KeywordTable { levels },
            restricted_words: RestrictedWordSet {
                words: builtin::RESTRICTED_WORDS.iter().map(|w| w.to_string()).collect(),
            },
            restricted_phrases: RestrictedPhraseSet {
                phrases: to_owned(builtin::RESTRICTED_PHRASES),
            },
        }
    }

    /// The keyword table.
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Keywords for a level.
    pub fn keywords_for(&self, level: TaxonomyLevel) -> &[String] {
        self.keywords.get(level)
    }

    /// The first few keywords of a level, quoted in rejection messages.
    pub fn keyword_examples(&self, level: TaxonomyLevel) -> Vec<String> {
        self.keywords_for(level)
            .iter()
            .take(EXAMPLE_KEYWORD_COUNT)
            .cloned()
            .collect()
    }

    /// Restricted words.
    pub fn restricted_words(&self) -> &RestrictedWordSet {
        &self.restricted_words
    }

    /// Restricted phrases.
    pub fn restricted_phrases(&self) -> &RestrictedPhraseSet {
        &self.restricted_phrases
    }
}

impl Default for Wordlists {
    fn default() -> Self {
        Self::builtin()
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Trim and lower-case entries, rejecting blank ones.
fn clean_entries<I, S>(entries: I, context: &str) -> Result<Vec<String>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                Err(ConfigError::EmptyEntry(context.to_string()))
            } else {
                Ok(entry.to_lowercase())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_table() -> KeywordTable {
        let mut table = KeywordTable::new();
        for level in TaxonomyLevel::all() {
            table.insert(*level, ["x"]).unwrap();
        }
        table
    }

    #[test]
    fn test_builtin_tables_are_valid() {
        let lists = Wordlists::builtin();
        assert!(lists.keywords().validate().is_ok());
        assert_eq!(lists.restricted_words().len(), 18);
        assert_eq!(lists.restricted_phrases().len(), 28);
        for level in TaxonomyLevel::all() {
            assert!(!lists.keywords_for(*level).is_empty());
        }
    }

    #[test]
    fn test_keyword_examples() {
        let lists = Wordlists::builtin();
        assert_eq!(
            lists.keyword_examples(TaxonomyLevel::Analyze),
            vec!["analyze", "arrange", "breakdown"]
        );

        let mut table = full_table();
        table.insert(TaxonomyLevel::Apply, ["solve", "use"]).unwrap();
        let lists = Wordlists::new(
            table,
            RestrictedWordSet::new(["know"]).unwrap(),
            RestrictedPhraseSet::new(["what is"]).unwrap(),
        )
        .unwrap();
        assert_eq!(lists.keyword_examples(TaxonomyLevel::Apply), vec!["solve", "use"]);
    }

    #[test]
    fn test_entries_are_normalized() {
        let words = RestrictedWordSet::new(["  Know ", "FEEL", "know"]).unwrap();
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["know", "feel"]);
        assert!(words.contains("feel"));

        let phrases = RestrictedPhraseSet::new(["What Is", "define"]).unwrap();
        assert_eq!(phrases.iter().collect::<Vec<_>>(), vec!["what is", "define"]);
    }

    #[test]
    fn test_rejects_blank_and_empty_lists() {
        assert_eq!(
            RestrictedWordSet::new(Vec::<String>::new()),
            Err(ConfigError::EmptyRestrictedWords)
        );
        assert_eq!(
            RestrictedPhraseSet::new(["what is", "  "]),
            Err(ConfigError::EmptyEntry("restricted phrases".to_string()))
        );

        let mut table = KeywordTable::new();
        assert_eq!(
            table.insert(TaxonomyLevel::Create, Vec::<&str>::new()),
            Err(ConfigError::EmptyKeywords("Create".to_string()))
        );
    }

    #[test]
    fn test_missing_level_is_rejected() {
        let mut table = KeywordTable::new();
        table.insert(TaxonomyLevel::Remember, ["list"]).unwrap();
        let result = Wordlists::new(
            table,
            RestrictedWordSet::new(["know"]).unwrap(),
            RestrictedPhraseSet::new(["what is"]).unwrap(),
        );
        assert_eq!(result, Err(ConfigError::MissingLevel("Understand".to_string())));
    }
}
