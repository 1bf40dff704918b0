//! Quiz configuration (extra vocabulary + limits) loaded from TOML.
//!
//! Schema:
//! ```toml
//! replace_builtin = false   # true: use only the words below
//! max_sessions = 1024       # cap on HTTP-addressed sessions
//! session_idle_secs = 1800  # HTTP sessions untouched this long are discarded
//!
//! [[words]]
//! word = "sun"
//! en = "a star"
//! so = "qorrax"
//! ```

use serde::Deserialize;
use tracing::info;

use crate::domain::VocabularyEntry;
use crate::error::ConfigError;
use crate::seeds::seed_vocabulary;

pub const DEFAULT_MAX_SESSIONS: usize = 1024;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;

#[derive(Clone, Debug, Deserialize)]
pub struct QuizConfig {
  #[serde(default)]
  pub replace_builtin: bool,
  #[serde(default = "default_max_sessions")]
  pub max_sessions: usize,
  #[serde(default = "default_session_idle_secs")]
  pub session_idle_secs: u64,
  #[serde(default)]
  pub words: Vec<WordCfg>,
}

impl Default for QuizConfig {
  fn default() -> Self {
    Self {
      replace_builtin: false,
      max_sessions: DEFAULT_MAX_SESSIONS,
      session_idle_secs: DEFAULT_SESSION_IDLE_SECS,
      words: Vec::new(),
    }
  }
}

fn default_max_sessions() -> usize { DEFAULT_MAX_SESSIONS }
fn default_session_idle_secs() -> u64 { DEFAULT_SESSION_IDLE_SECS }

/// Vocabulary entry accepted in TOML. Missing meanings are caught by the store.
#[derive(Clone, Debug, Deserialize)]
pub struct WordCfg {
  pub word: String,
  #[serde(default)] pub en: String,
  #[serde(default)] pub so: String,
}

impl QuizConfig {
  pub fn from_toml_str(s: &str, path: &str) -> Result<Self, ConfigError> {
    toml::from_str(s).map_err(|source| ConfigError::Parse { path: path.to_string(), source })
  }

  /// Built-in words merged with configured ones; a configured word replaces a built-in of the same name.
  pub fn vocabulary(&self) -> Vec<VocabularyEntry> {
    let mut out: Vec<VocabularyEntry> = if self.replace_builtin { Vec::new() } else { seed_vocabulary() };
    // Duplicates within the config itself are left in place for the store to reject.
    out.retain(|e| !self.words.iter().any(|w| w.word == e.word));
    out.extend(self.words.iter().map(|w| VocabularyEntry::new(w.word.clone(), w.en.clone(), w.so.clone())));
    out
  }
}

/// Load `QuizConfig` from QUIZ_CONFIG_PATH. Unset means defaults; a set but
/// unreadable or invalid file is an error.
pub fn load_quiz_config_from_env() -> Result<QuizConfig, ConfigError> {
  match std::env::var("QUIZ_CONFIG_PATH") {
    Ok(path) => load_quiz_config_from(&path),
    Err(_) => {
      info!(target: "quiz_backend", "QUIZ_CONFIG_PATH not set; using built-in vocabulary");
      Ok(QuizConfig::default())
    }
  }
}

pub fn load_quiz_config_from(path: &str) -> Result<QuizConfig, ConfigError> {
  let s = std::fs::read_to_string(path)
    .map_err(|source| ConfigError::Read { path: path.to_string(), source })?;
  let cfg = QuizConfig::from_toml_str(&s, path)?;
  info!(target: "quiz_backend", %path, words = cfg.words.len(), replace_builtin = cfg.replace_builtin, "Loaded quiz config (TOML)");
  Ok(cfg)
}
