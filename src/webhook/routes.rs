//! HTTP endpoints for the WhatsApp webhook.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::verify::{self, VerificationRequest};
use crate::config::RelayConfig;
use crate::pipeline::relay::{self, RelayPipeline};

/// Shared state for webhook routes.
#[derive(Clone)]
pub struct RelayState {
    pub config: Arc<RelayConfig>,
    pub pipeline: Arc<RelayPipeline>,
}

/// GET /webhook
///
/// Echoes `hub.challenge` when the handshake matches, 403 otherwise.
async fn verify_webhook(State(state): State<RelayState>, uri: Uri) -> impl IntoResponse {
    // A malformed query string is just another failed handshake.
    let request = Query::<VerificationRequest>::try_from_uri(&uri)
        .map(|Query(q)| q)
        .unwrap_or_default();

    match verify::verify(&request, &state.config.verify_token) {
        Ok(challenge) => {
            info!("Webhook verified");
            (StatusCode::OK, challenge).into_response()
        }
        Err(_) => {
            info!("Webhook verify failed");
            StatusCode::FORBIDDEN.into_response()
        }
    }
}

/// POST /webhook
///
/// Always 200, returned before the relay runs on its own task.
async fn receive_webhook(State(state): State<RelayState>, body: Bytes) -> StatusCode {
    drop(relay::spawn_relay(Arc::clone(&state.pipeline), body));
    StatusCode::OK
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}

/// Build the webhook routes.
pub fn webhook_routes(state: RelayState) -> Router {
    Router::new()
        .route("/webhook", get(verify_webhook).post(receive_webhook))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
