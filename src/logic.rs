//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! Each function runs one controller operation and logs the outcome, so both
//! transports report quiz events the same way.

use tracing::{debug, info};

use crate::domain::{Language, QuizResult};
use crate::protocol::{LanguageOut, WordsOut};
use crate::session::QuizController;
use crate::util::trunc_for_log;
use crate::vocabulary::VocabularyStore;

pub fn do_regenerate(ctl: &mut QuizController) {
  ctl.regenerate_word();
  info!(target: "quiz", word = %ctl.current_word(), "New word served");
}

pub fn do_set_language(ctl: &mut QuizController, code: String) {
  if code.parse::<Language>().is_err() && !code.is_empty() {
    // Accepted anyway; evaluation reports it as incomplete.
    debug!(target: "quiz", %code, "Unsupported language code selected");
  }
  ctl.set_language(code);
}

pub fn do_set_meaning(ctl: &mut QuizController, text: String) {
  debug!(target: "quiz", meaning = %trunc_for_log(&text, 64), "Meaning updated");
  ctl.set_meaning(text);
}

pub fn do_evaluate(ctl: &mut QuizController) {
  let result = ctl.evaluate();
  let kind = match result {
    QuizResult::Unevaluated => "unevaluated",
    QuizResult::Incomplete => "incomplete",
    QuizResult::Correct => "correct",
    QuizResult::Incorrect { .. } => "incorrect",
  };
  info!(target: "quiz", word = %ctl.current_word(), language = ctl.selected_language().unwrap_or(""), %kind, "Answer evaluated");
}

pub fn supported_languages() -> Vec<LanguageOut> {
  Language::ALL.into_iter().map(LanguageOut::from).collect()
}

pub fn list_words(store: &VocabularyStore) -> WordsOut {
  WordsOut {
    count: store.word_count(),
    words: store.all_words().map(str::to_string).collect(),
  }
}
