//! Quiz session state machine.
//!
//! A `QuizController` owns exactly one `QuizSession` and is driven by four
//! operations: `regenerate_word`, `set_language`, `set_meaning` and `evaluate`.
//! Nothing here fails across the boundary: missing input and lookup problems
//! both end up as `QuizResult::Incomplete`.

use std::sync::Arc;

use rand::{seq::IteratorRandom, Rng};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::domain::QuizResult;
use crate::vocabulary::VocabularyStore;

/// Mutable per-interaction state. Only the controller touches it.
#[derive(Debug, Default)]
struct QuizSession {
  selected_language: String,
  current_word: String,
  entered_meaning: String,
  last_result: QuizResult,
}

/// Serializable view handed to the transport layer after every event.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SessionView {
  pub word: String,
  pub language: Option<String>,
  pub meaning: String,
  pub result: QuizResult,
  pub correct: bool,
  pub message: Option<String>,
}

#[derive(Debug)]
pub struct QuizController {
  store: Arc<VocabularyStore>,
  session: QuizSession,
}

impl QuizController {
  /// New session with its first word already drawn.
  pub fn new(store: Arc<VocabularyStore>) -> Self {
    Self::with_rng(store, &mut rand::thread_rng())
  }

  pub fn with_rng<R: Rng + ?Sized>(store: Arc<VocabularyStore>, rng: &mut R) -> Self {
    let mut ctl = Self { store, session: QuizSession::default() };
    ctl.regenerate_word_with(rng);
    ctl
  }

  pub fn regenerate_word(&mut self) {
    self.regenerate_word_with(&mut rand::thread_rng());
  }

  /// Uniform draw over all words; repeats are allowed. Language and meaning are kept.
  #[instrument(level = "debug", skip_all, fields(previous = %self.session.current_word))]
  pub fn regenerate_word_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
    // The store is never empty, so a choice always exists.
    if let Some(word) = self.store.all_words().choose(rng) {
      self.session.current_word = word.to_string();
    }
    self.session.last_result = QuizResult::Unevaluated;
    debug!(target: "quiz", word = %self.session.current_word, "Word regenerated");
  }

  /// Record the selected language code; validated only at evaluation time.
  pub fn set_language(&mut self, code: impl Into<String>) {
    self.session.selected_language = code.into();
  }

  pub fn set_meaning(&mut self, text: impl Into<String>) {
    self.session.entered_meaning = text.into();
  }

  #[instrument(level = "debug", skip_all, fields(word = %self.session.current_word, language = %self.session.selected_language))]
  pub fn evaluate(&mut self) -> &QuizResult {
    let s = &self.session;
    let result = if s.selected_language.is_empty() || s.current_word.is_empty() || s.entered_meaning.is_empty() {
      QuizResult::Incomplete
    } else {
      match self.store.meaning_of(&s.current_word, &s.selected_language) {
        Ok(expected) if s.entered_meaning.to_lowercase() == expected.to_lowercase() => QuizResult::Correct,
        Ok(expected) => QuizResult::Incorrect { expected: expected.to_string() },
        Err(e) => {
          warn!(target: "quiz", error = %e, "Lookup failed during evaluation; reporting incomplete");
          QuizResult::Incomplete
        }
      }
    };
    debug!(target: "quiz", ?result, "Answer evaluated");
    self.session.last_result = result;
    &self.session.last_result
  }

  pub fn current_word(&self) -> &str {
    &self.session.current_word
  }

  pub fn selected_language(&self) -> Option<&str> {
    Some(self.session.selected_language.as_str()).filter(|s| !s.is_empty())
  }

  pub fn entered_meaning(&self) -> &str {
    &self.session.entered_meaning
  }

  pub fn last_result(&self) -> &QuizResult {
    &self.session.last_result
  }

  pub fn snapshot(&self) -> SessionView {
    let result = self.last_result().clone();
    SessionView {
      word: self.current_word().to_string(),
      language: self.selected_language().map(str::to_string),
      meaning: self.entered_meaning().to_string(),
      correct: result.is_correct(),
      message: result.message(),
      result,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seeds::seed_vocabulary;
  use rand::{rngs::StdRng, SeedableRng};

  fn store() -> Arc<VocabularyStore> {
    Arc::new(VocabularyStore::from_entries(seed_vocabulary()).expect("valid seeds"))
  }

  fn controller_on(word: &str) -> QuizController {
    let mut ctl = QuizController::with_rng(store(), &mut StdRng::seed_from_u64(7));
    ctl.session.current_word = word.to_string();
    ctl
  }

  #[test]
  fn new_session_starts_unevaluated_with_a_valid_word() {
    let ctl = QuizController::new(store());
    assert!(ctl.store.contains(ctl.current_word()));
    assert_eq!(ctl.last_result(), &QuizResult::Unevaluated);
    assert_eq!(ctl.selected_language(), None);
  }

  #[test]
  fn regeneration_always_yields_a_stored_word() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut ctl = QuizController::with_rng(store(), &mut rng);
    for _ in 0..500 {
      ctl.regenerate_word_with(&mut rng);
      assert!(ctl.store.contains(ctl.current_word()), "bad word {}", ctl.current_word());
    }
  }

  #[test]
  fn regeneration_reaches_every_word() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut ctl = QuizController::with_rng(store(), &mut rng);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
      ctl.regenerate_word_with(&mut rng);
      seen.insert(ctl.current_word().to_string());
    }
    assert_eq!(seen.len(), 5);
  }

  #[test]
  fn missing_language_is_incomplete_regardless_of_other_fields() {
    let mut ctl = controller_on("apple");
    ctl.set_meaning("a fruit");
    assert_eq!(ctl.evaluate(), &QuizResult::Incomplete);
    assert_eq!(ctl.snapshot().message.as_deref(), Some("Please fill all required fields."));
  }

  #[test]
  fn missing_meaning_is_incomplete() {
    let mut ctl = controller_on("apple");
    ctl.set_language("en");
    assert_eq!(ctl.evaluate(), &QuizResult::Incomplete);
  }

  #[test]
  fn comparison_ignores_case() {
    let mut ctl = controller_on("apple");
    ctl.set_language("en");
    ctl.set_meaning("A FRUIT");
    assert_eq!(ctl.evaluate(), &QuizResult::Correct);
    assert!(ctl.snapshot().correct);
  }

  #[test]
  fn comparison_does_not_trim_whitespace() {
    let mut ctl = controller_on("apple");
    ctl.set_language("en");
    ctl.set_meaning("a fruit ");
    assert_eq!(ctl.evaluate(), &QuizResult::Incorrect { expected: "a fruit".into() });
  }

  #[test]
  fn wrong_answer_discloses_expected_meaning() {
    let mut ctl = controller_on("car");
    ctl.set_language("so");
    ctl.set_meaning("bil");
    assert_eq!(ctl.evaluate(), &QuizResult::Incorrect { expected: "gaari".into() });
    assert_eq!(
      ctl.snapshot().message.as_deref(),
      Some("Incorrect. The correct meaning is \"gaari\".")
    );
  }

  #[test]
  fn unsupported_language_is_incomplete_not_a_crash() {
    let mut ctl = controller_on("car");
    ctl.set_language("fr");
    ctl.set_meaning("voiture");
    assert_eq!(ctl.evaluate(), &QuizResult::Incomplete);
  }

  #[test]
  fn snapshot_mirrors_the_accessors() {
    let mut ctl = controller_on("book");
    ctl.set_language("en");
    ctl.set_meaning("A Set Of Pages");
    ctl.evaluate();
    let view = ctl.snapshot();
    assert_eq!(view.word, ctl.current_word());
    assert_eq!(view.language.as_deref(), ctl.selected_language());
    assert_eq!(view.meaning, ctl.entered_meaning());
    assert_eq!(&view.result, ctl.last_result());
    assert!(view.correct);
  }

  #[test]
  fn evaluate_is_idempotent() {
    let mut ctl = controller_on("water");
    ctl.set_language("so");
    ctl.set_meaning("biyo");
    let first = ctl.evaluate().clone();
    let second = ctl.evaluate().clone();
    assert_eq!(first, QuizResult::Correct);
    assert_eq!(first, second);
  }

  #[test]
  fn evaluate_never_changes_the_word() {
    let mut ctl = controller_on("book");
    ctl.set_language("en");
    ctl.set_meaning("nope");
    ctl.evaluate();
    assert_eq!(ctl.current_word(), "book");
  }

  #[test]
  fn regeneration_resets_result_but_keeps_inputs() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut ctl = controller_on("house");
    ctl.set_language("so");
    ctl.set_meaning("guri");
    ctl.evaluate();
    assert_eq!(ctl.last_result(), &QuizResult::Correct);

    ctl.regenerate_word_with(&mut rng);
    assert_eq!(ctl.last_result(), &QuizResult::Unevaluated);
    assert_eq!(ctl.selected_language(), Some("so"));
    assert_eq!(ctl.entered_meaning(), "guri");
  }
}
