use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::dto::MessageResponse;
use crate::services::reset::ResetStatus;
use crate::state::AppState;

pub fn create_reset_router() -> Router<AppState> {
    Router::new()
        .route("/", post(request_reset))
        .route("/status", get(reset_status))
}

/// Siempre 202: el reinicio corre en segundo plano y un pedido concurrente
/// solo recibe un mensaje informativo
async fn request_reset(State(state): State<AppState>) -> (StatusCode, Json<MessageResponse>) {
    let outcome = state.reset.request_reset().await;
    (StatusCode::ACCEPTED, Json(MessageResponse::new(outcome.message())))
}

async fn reset_status(State(state): State<AppState>) -> Json<ResetStatus> {
    Json(state.reset.status().await)
}
