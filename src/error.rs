//! Error types for vocabulary construction and lookups.
//!
//! `ConfigError` is fatal and only surfaces at startup. `LookupError` never
//! leaves the quiz controller: it is folded into `QuizResult::Incomplete`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("vocabulary is empty; at least one word is required")]
  EmptyVocabulary,

  #[error("vocabulary contains an entry with an empty word")]
  EmptyWord,

  #[error("word '{word}' has no meaning for language '{language}'")]
  MissingMeaning { word: String, language: &'static str },

  #[error("word '{0}' is defined more than once")]
  DuplicateWord(String),

  #[error("failed to read config file {path}: {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse config file {path}: {source}")]
  Parse {
    path: String,
    #[source]
    source: toml::de::Error,
  },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
  #[error("unknown word '{0}'")]
  NotFound(String),

  #[error("unsupported language code '{0}'")]
  UnsupportedLanguage(String),
}
