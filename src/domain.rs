//! Domain models: supported languages, vocabulary entries and quiz results.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::Serialize;

use crate::error::LookupError;

pub const MSG_INCOMPLETE: &str = "Please fill all required fields.";
pub const MSG_CORRECT: &str = "Correct! Your translation is accurate.";

/// Languages a meaning can be requested in. The set is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
  En,
  So,
}

impl Language {
  pub const ALL: [Language; 2] = [Language::En, Language::So];

  pub fn code(&self) -> &'static str {
    match self {
      Language::En => "en",
      Language::So => "so",
    }
  }

  /// Human-readable name shown in language pickers.
  pub fn name(&self) -> &'static str {
    match self {
      Language::En => "English",
      Language::So => "Somali",
    }
  }
}

impl FromStr for Language {
  type Err = LookupError;

  fn from_str(code: &str) -> Result<Self, Self::Err> {
    match code {
      "en" => Ok(Language::En),
      "so" => Ok(Language::So),
      other => Err(LookupError::UnsupportedLanguage(other.to_string())),
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

/// One quiz word plus its meaning in every supported language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyEntry {
  pub word: String,
  pub meanings: BTreeMap<Language, String>,
}

impl VocabularyEntry {
  pub fn new(word: impl Into<String>, en: impl Into<String>, so: impl Into<String>) -> Self {
    let mut meanings = BTreeMap::new();
    meanings.insert(Language::En, en.into());
    meanings.insert(Language::So, so.into());
    Self { word: word.into(), meanings }
  }

  pub fn meaning(&self, language: Language) -> Option<&str> {
    self.meanings.get(&language).map(String::as_str)
  }
}

/// Outcome of the most recent evaluation of a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuizResult {
  /// Nothing submitted since the word was (re)generated.
  #[default]
  Unevaluated,
  /// Submitted with a required field missing.
  Incomplete,
  Correct,
  Incorrect { expected: String },
}

impl QuizResult {
  /// User-facing text for the result; `None` while unevaluated.
  pub fn message(&self) -> Option<String> {
    match self {
      QuizResult::Unevaluated => None,
      QuizResult::Incomplete => Some(MSG_INCOMPLETE.to_string()),
      QuizResult::Correct => Some(MSG_CORRECT.to_string()),
      QuizResult::Incorrect { expected } => {
        Some(format!("Incorrect. The correct meaning is \"{}\".", expected))
      }
    }
  }

  pub fn is_correct(&self) -> bool {
    matches!(self, QuizResult::Correct)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn language_codes_parse_and_reject_unknown() {
    assert_eq!("en".parse::<Language>(), Ok(Language::En));
    assert_eq!("so".parse::<Language>(), Ok(Language::So));
    assert_eq!(
      "fr".parse::<Language>(),
      Err(LookupError::UnsupportedLanguage("fr".into()))
    );
    // Codes are case-sensitive, like the select values they come from.
    assert!("EN".parse::<Language>().is_err());
  }

  #[test]
  fn incorrect_message_quotes_expected_meaning() {
    let r = QuizResult::Incorrect { expected: "gaari".into() };
    assert_eq!(r.message().as_deref(), Some("Incorrect. The correct meaning is \"gaari\"."));
    assert!(!r.is_correct());
    assert_eq!(QuizResult::Unevaluated.message(), None);
  }

  #[test]
  fn result_serializes_with_kind_tag() {
    let v = serde_json::to_value(QuizResult::Incorrect { expected: "biyo".into() }).unwrap();
    assert_eq!(v, serde_json::json!({ "kind": "incorrect", "expected": "biyo" }));
    let v = serde_json::to_value(QuizResult::Incomplete).unwrap();
    assert_eq!(v, serde_json::json!({ "kind": "incomplete" }));
  }
}
