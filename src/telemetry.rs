//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! Targets emitted by this service:
//! - `quiz`: session lifecycle and quiz events (word drawn, answer evaluated
//!   with its result kind, idle sessions discarded). Typed meanings are only
//!   logged truncated, at debug level.
//! - `quiz_backend`: startup (config, vocabulary size), WebSocket connects and
//!   disconnects, malformed client messages, session-limit rejections.
//! - `tower_http`: one span per HTTP request.
//!
//! LOG_LEVEL overrides the filter; LOG_FORMAT=json switches to JSON lines.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,quiz=debug,quiz_backend=debug,tower_http=info,axum=info";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    // The two builders have different types, so init inside each arm.
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => {
            builder.json().init();
        }
        _ => {
            builder.init();
        }
    }
}
