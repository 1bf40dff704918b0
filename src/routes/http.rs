//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Unknown session ids map to 404; a full session table maps to 503.

use std::sync::Arc;
use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument};

use crate::logic::*;
use crate::protocol::*;
use crate::session::SessionView;
use crate::state::AppState;

fn session_or_404(id: &str, view: Option<SessionView>) -> Response {
  match view {
    Some(v) => Json(v).into_response(),
    None => (
      StatusCode::NOT_FOUND,
      Json(ErrorOut { message: format!("Unknown session: {}", id) }),
    )
      .into_response(),
  }
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info")]
pub async fn http_get_languages() -> impl IntoResponse { Json(supported_languages()) }

#[instrument(level = "info", skip(state))]
pub async fn http_get_words(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(list_words(&state.store))
}

#[instrument(level = "info", skip(state))]
pub async fn http_create_session(State(state): State<Arc<AppState>>) -> Response {
  match state.create_session().await {
    Some((id, session)) => {
      info!(target: "quiz", %id, "HTTP session created");
      (StatusCode::CREATED, Json(SessionCreatedOut { id, session })).into_response()
    }
    None => (
      StatusCode::SERVICE_UNAVAILABLE,
      Json(ErrorOut { message: "Too many active sessions.".into() }),
    )
      .into_response(),
  }
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_get_session(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
  let view = state.with_session(&id, |_| {}).await;
  session_or_404(&id, view)
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_regenerate(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
  let view = state.with_session(&id, do_regenerate).await;
  session_or_404(&id, view)
}

#[instrument(level = "info", skip(state, body), fields(%id, code = %body.code))]
pub async fn http_put_language(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<LanguageIn>,
) -> Response {
  let view = state.with_session(&id, |ctl| do_set_language(ctl, body.code)).await;
  session_or_404(&id, view)
}

#[instrument(level = "info", skip(state, body), fields(%id, text_len = body.text.len()))]
pub async fn http_put_meaning(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<MeaningIn>,
) -> Response {
  let view = state.with_session(&id, |ctl| do_set_meaning(ctl, body.text)).await;
  session_or_404(&id, view)
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_evaluate(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
  let view = state.with_session(&id, do_evaluate).await;
  session_or_404(&id, view)
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_delete_session(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
  if state.remove_session(&id).await {
    StatusCode::NO_CONTENT.into_response()
  } else {
    session_or_404(&id, None)
  }
}
