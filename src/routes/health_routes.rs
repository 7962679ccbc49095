use axum::{extract::State, routing::get, Json, Router};

use crate::dto::HealthResponse;
use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "connected",
        Err(e) => {
            tracing::warn!("⚠️ Health check sin base de datos: {}", e);
            "disconnected"
        }
    };

    Json(HealthResponse {
        status: "ok",
        database,
        environment: state.config.environment.clone(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
