//! Immutable vocabulary store shared read-only by every quiz session.
//!
//! Entries keep their insertion order, which is the order `all_words` yields.
//! Completeness (every word has a non-empty meaning in every language) is
//! checked once in `from_entries`; lookups never re-check it.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::domain::{Language, VocabularyEntry};
use crate::error::{ConfigError, LookupError};

#[derive(Debug)]
pub struct VocabularyStore {
    entries: Vec<VocabularyEntry>,
    by_word: HashMap<String, usize>,
}

impl VocabularyStore {
    /// Build the store, rejecting empty tables, duplicate words and missing meanings.
    #[instrument(level = "debug", skip_all, fields(count = entries.len()))]
    pub fn from_entries(entries: Vec<VocabularyEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }

        let mut by_word = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if entry.word.is_empty() {
                return Err(ConfigError::EmptyWord);
            }
            for lang in Language::ALL {
                match entry.meaning(lang) {
                    Some(m) if !m.is_empty() => {}
                    _ => {
                        return Err(ConfigError::MissingMeaning {
                            word: entry.word.clone(),
                            language: lang.code(),
                        })
                    }
                }
            }
            if by_word.insert(entry.word.clone(), idx).is_some() {
                return Err(ConfigError::DuplicateWord(entry.word.clone()));
            }
        }

        debug!(target: "quiz", words = entries.len(), "Vocabulary store built");
        Ok(Self { entries, by_word })
    }

    pub fn word_count(&self) -> usize {
        self.entries.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn contains(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    pub fn entry(&self, word: &str) -> Option<&VocabularyEntry> {
        self.by_word.get(word).map(|&idx| &self.entries[idx])
    }

    /// Meaning of `word` in the language named by `code`.
    pub fn meaning_of(&self, word: &str, code: &str) -> Result<&str, LookupError> {
        let entry = self
            .entry(word)
            .ok_or_else(|| LookupError::NotFound(word.to_string()))?;
        let lang: Language = code.parse()?;
        // Unreachable for a constructed store, but keep it a lookup error rather than a panic.
        entry
            .meaning(lang)
            .ok_or_else(|| LookupError::UnsupportedLanguage(code.to_string()))
    }

    /// All words in stable order. The iterator is `Clone`, so callers can restart it.
    pub fn all_words(&self) -> impl Iterator<Item = &str> + Clone + ExactSizeIterator + '_ {
        self.entries.iter().map(|e| e.word.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::seed_vocabulary;

    fn store() -> VocabularyStore {
        VocabularyStore::from_entries(seed_vocabulary()).expect("seed vocabulary is valid")
    }

    #[test]
    fn every_word_has_a_non_empty_meaning_in_both_languages() {
        let s = store();
        assert_eq!(s.word_count(), 5);
        for w in s.all_words() {
            for lang in Language::ALL {
                let m = s.meaning_of(w, lang.code()).expect("complete store");
                assert!(!m.is_empty(), "{w}/{lang} is empty");
            }
        }
    }

    #[test]
    fn lookups_report_unknown_word_and_language() {
        let s = store();
        assert_eq!(s.meaning_of("car", "so"), Ok("gaari"));
        assert_eq!(s.meaning_of("apple", "en"), Ok("a fruit"));
        assert_eq!(
            s.meaning_of("train", "en"),
            Err(LookupError::NotFound("train".into()))
        );
        assert_eq!(
            s.meaning_of("car", "de"),
            Err(LookupError::UnsupportedLanguage("de".into()))
        );
    }

    #[test]
    fn all_words_is_stable_and_restartable() {
        let s = store();
        let words = s.all_words();
        let first: Vec<&str> = words.clone().collect();
        let second: Vec<&str> = words.collect();
        assert_eq!(first, vec!["apple", "car", "house", "book", "water"]);
        assert_eq!(first, second);
    }

    #[test]
    fn construction_rejects_bad_tables() {
        assert!(matches!(
            VocabularyStore::from_entries(vec![]),
            Err(ConfigError::EmptyVocabulary)
        ));

        let dup = vec![
            VocabularyEntry::new("car", "a vehicle", "gaari"),
            VocabularyEntry::new("car", "an automobile", "baabuur"),
        ];
        assert!(matches!(
            VocabularyStore::from_entries(dup),
            Err(ConfigError::DuplicateWord(w)) if w == "car"
        ));

        let mut missing = VocabularyEntry::new("sun", "a star", "qorrax");
        missing.meanings.remove(&Language::So);
        assert!(matches!(
            VocabularyStore::from_entries(vec![missing]),
            Err(ConfigError::MissingMeaning { language: "so", .. })
        ));

        let nameless = VocabularyEntry::new("", "x", "y");
        assert!(matches!(
            VocabularyStore::from_entries(vec![nameless]),
            Err(ConfigError::EmptyWord)
        ));

        let blank = VocabularyEntry::new("moon", "", "dayax");
        assert!(matches!(
            VocabularyStore::from_entries(vec![blank]),
            Err(ConfigError::MissingMeaning { language: "en", .. })
        ));
    }
}
