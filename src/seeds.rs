//! Built-in vocabulary. Guarantees the quiz is usable without any config file.

use crate::domain::VocabularyEntry;

pub fn seed_vocabulary() -> Vec<VocabularyEntry> {
  vec![
    VocabularyEntry::new("apple", "a fruit", "tufaax"),
    VocabularyEntry::new("car", "a vehicle", "gaari"),
    VocabularyEntry::new("house", "a building", "guri"),
    VocabularyEntry::new("book", "a set of pages", "buug"),
    VocabularyEntry::new("water", "a liquid", "biyo"),
  ]
}
