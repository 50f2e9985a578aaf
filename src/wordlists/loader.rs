//! Loading wordlists from TOML.
//!
//! File layout:
//!
//! ```toml
//! restricted_words = ["know", "understand"]
//! restricted_phrases = ["what is", "define"]
//!
//! [keywords]
//! Remember = ["define", "list"]
//! Understand = ["explain"]
//! # ... one entry per level
//! ```

use crate::core::error::{BloomResult, ConfigError};
use crate::core::level::TaxonomyLevel;
use crate::wordlists::{KeywordTable, RestrictedPhraseSet, RestrictedWordSet, Wordlists};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable naming a wordlist file.
pub const WORDLISTS_ENV: &str = "BLOOMGATE_WORDLISTS";

/// On-disk representation of the wordlists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordlistFile {
    /// Unmeasurable single words.
    pub restricted_words: Vec<String>,
    /// Recall-oriented phrases, in check order.
    pub restricted_phrases: Vec<String>,
    /// Keywords keyed by level name.
    pub keywords: IndexMap<String, Vec<String>>,
}

impl WordlistFile {
    /// Convert into validated tables.
    ///
    /// Level keys ignore case and padding, so two keys naming the same level
    /// are a conflict.
    pub fn into_wordlists(self) -> Result<Wordlists, ConfigError> {
        let mut table = KeywordTable::new();
        for (name, words) in self.keywords {
            let level = TaxonomyLevel::parse_lenient(&name)
                .map_err(|_| ConfigError::UnknownLevel(name.clone()))?;
            if table.contains(level) {
                return Err(ConfigError::DuplicateLevel(level.to_string()));
            }
            table.insert(level, words)?;
        }

        Wordlists::new(
            table,
            RestrictedWordSet::new(self.restricted_words)?,
            RestrictedPhraseSet::new(self.restricted_phrases)?,
        )
    }
}

impl From<&Wordlists> for WordlistFile {
    fn from(lists: &Wordlists) -> Self {
        Self {
            restricted_words: lists.restricted_words().iter().map(str::to_string).collect(),
            restricted_phrases: lists.restricted_phrases().iter().map(str::to_string).collect(),
            keywords: lists
                .keywords()
                .iter()
                .map(|(level, words)| (level.display_name().to_string(), words.to_vec()))
                .collect(),
        }
    }
}

impl Wordlists {
    /// Parse wordlists from a TOML document.
    pub fn from_toml_str(contents: &str) -> BloomResult<Self> {
        let file: WordlistFile = toml::from_str(contents)?;
        Ok(file.into_wordlists()?)
    }

    /// Load wordlists from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> BloomResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading wordlists from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path` if given, then from `BLOOMGATE_WORDLISTS`, falling back
    /// to the built-in tables.
    pub fn load_or_builtin(path: Option<&Path>) -> BloomResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(WORDLISTS_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => {
                log::debug!("Using built-in wordlists");
                Ok(Self::builtin())
            }
        }
    }

    /// Render the tables as TOML.
    pub fn to_toml_string(&self) -> BloomResult<String> {
        Ok(toml::to_string_pretty(&WordlistFile::from(self))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::BloomError;
    use std::io::Write;

    const SMALL: &str = r#"
restricted_words = ["know", "Understand"]
restricted_phrases = ["what is"]

[keywords]
Remember = ["list"]
understand = ["explain"]
Apply = ["solve"]
Analyze = ["contrast"]
Evaluate = ["judge"]
Create = ["design"]
"#;

    #[test]
    fn test_parse_small_file() {
        let lists = Wordlists::from_toml_str(SMALL).unwrap();
        assert_eq!(lists.keywords_for(TaxonomyLevel::Understand), ["explain"]);
        assert!(lists.restricted_words().contains("understand"));
        assert_eq!(lists.restricted_phrases().len(), 1);
    }

    #[test]
    fn test_unknown_level_key() {
        let contents = SMALL.replace("Create", "Synthesize");
        match Wordlists::from_toml_str(&contents) {
            Err(BloomError::Config(ConfigError::UnknownLevel(name))) => {
                assert_eq!(name, "Synthesize")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_level() {
        let contents = SMALL.replace("Evaluate = [\"judge\"]\n", "");
        match Wordlists::from_toml_str(&contents) {
            Err(BloomError::Config(ConfigError::MissingLevel(name))) => {
                assert_eq!(name, "Evaluate")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_level_key_differing_only_in_case_is_duplicate() {
        let contents = SMALL.replace(
            "Remember = [\"list\"]",
            "Remember = [\"list\"]\nremember = [\"recite\"]",
        );
        match Wordlists::from_toml_str(&contents) {
            Err(BloomError::Config(ConfigError::DuplicateLevel(name))) => {
                assert_eq!(name, "Remember")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Wordlists::from_toml_str("restricted_words = ["),
            Err(BloomError::Toml(_))
        ));
    }

    #[test]
    fn test_builtin_survives_toml_rendering() {
        let builtin = Wordlists::builtin();
        let rendered = builtin.to_toml_string().unwrap();
        assert!(rendered.contains("[keywords]"));
        assert_eq!(Wordlists::from_toml_str(&rendered).unwrap(), builtin);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let lists = Wordlists::load(file.path()).unwrap();
        assert_eq!(lists.keywords_for(TaxonomyLevel::Create), ["design"]);

        let lists = Wordlists::load_or_builtin(Some(file.path())).unwrap();
        assert_eq!(lists.keywords_for(TaxonomyLevel::Apply), ["solve"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Wordlists::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(BloomError::Io(_))));
    }
}
