//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::Language;
use crate::session::SessionView;

/// Messages the client can send over WebSocket. Each one maps to a single
/// controller operation.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    RegenerateWord,
    SetLanguage { code: String },
    SetMeaning { text: String },
    Evaluate,
    GetState,
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Session { session: SessionView },
    Error { message: String },
}

//
// HTTP request/response DTOs
//

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct LanguageOut {
    pub code: &'static str,
    pub name: &'static str,
}

impl From<Language> for LanguageOut {
    fn from(l: Language) -> Self {
        Self { code: l.code(), name: l.name() }
    }
}

#[derive(Serialize)]
pub struct WordsOut {
    pub count: usize,
    pub words: Vec<String>,
}

#[derive(Serialize)]
pub struct SessionCreatedOut {
    pub id: String,
    pub session: SessionView,
}

#[derive(Deserialize)]
pub struct LanguageIn {
    pub code: String,
}

#[derive(Deserialize)]
pub struct MeaningIn {
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub message: String,
}
