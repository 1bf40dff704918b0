//! WebSocket upgrade + message loop. Each connection owns one quiz session for
//! its whole lifetime: created (with a first word) on connect, dropped on close.
//! Every client message is answered with a single JSON message.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument, warn};

use crate::logic::*;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::session::QuizController;
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "quiz_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

fn encode(msg: &ServerWsMessage) -> String {
  serde_json::to_string(msg).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
  })
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  let mut ctl = QuizController::new(state.store.clone());
  info!(target: "quiz_backend", word = %ctl.current_word(), "WebSocket connected");

  let hello = ServerWsMessage::Session { session: ctl.snapshot() };
  if let Err(e) = socket.send(Message::Text(encode(&hello))).await {
    error!(target: "quiz_backend", error = %e, "WS send error");
    return;
  }

  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let reply = handle_text_frame(&txt, &mut ctl);
        if let Err(e) = socket.send(Message::Text(encode(&reply))).await {
          error!(target: "quiz_backend", error = %e, "WS send error");
          break;
        }
      }
      // Pings are answered by axum itself.
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "quiz_backend", "WebSocket disconnected; session discarded");
}

/// Parse one text frame and apply it. Malformed input yields an `error`
/// reply and leaves the session untouched.
fn handle_text_frame(txt: &str, ctl: &mut QuizController) -> ServerWsMessage {
  match serde_json::from_str::<ClientWsMessage>(txt) {
    Ok(incoming) => {
      debug!(target: "quiz_backend", "WS received: {:?}", &incoming);
      handle_client_ws(incoming, ctl)
    }
    Err(e) => {
      warn!(target: "quiz_backend", error = %e, "WS rejected malformed message");
      ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) }
    }
  }
}

fn handle_client_ws(msg: ClientWsMessage, ctl: &mut QuizController) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => return ServerWsMessage::Pong,
    ClientWsMessage::RegenerateWord => do_regenerate(ctl),
    ClientWsMessage::SetLanguage { code } => do_set_language(ctl, code),
    ClientWsMessage::SetMeaning { text } => do_set_meaning(ctl, text),
    ClientWsMessage::Evaluate => do_evaluate(ctl),
    ClientWsMessage::GetState => {}
  }
  ServerWsMessage::Session { session: ctl.snapshot() }
}
