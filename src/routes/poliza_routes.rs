use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::poliza_controller::PolizaController;
use crate::dto::MessageResponse;
use crate::models::{CreatePolizaRequest, Poliza, UpdatePolizaRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_poliza_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_polizas).post(create_poliza))
        .route("/:id", get(get_poliza).put(update_poliza).delete(delete_poliza))
}

async fn list_polizas(State(state): State<AppState>) -> Result<Json<Vec<Poliza>>, AppError> {
    let controller = PolizaController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn create_poliza(
    State(state): State<AppState>,
    payload: Result<Json<CreatePolizaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Poliza>), AppError> {
    let Json(request) = payload?;
    let controller = PolizaController::new(state.pool.clone());
    let created = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_poliza(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Poliza>, AppError> {
    let controller = PolizaController::new(state.pool.clone());
    Ok(Json(controller.get(id).await?))
}

async fn update_poliza(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdatePolizaRequest>, JsonRejection>,
) -> Result<Json<Poliza>, AppError> {
    let Json(request) = payload?;
    let controller = PolizaController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_poliza(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = PolizaController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(MessageResponse::new("Póliza eliminada")))
}
