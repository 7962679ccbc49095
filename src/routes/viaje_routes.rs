use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::viaje_controller::ViajeController;
use crate::dto::MessageResponse;
use crate::models::{CreateViajeRequest, Viaje, UpdateViajeRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_viaje_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_viajes).post(create_viaje))
        .route("/:id", get(get_viaje).put(update_viaje).delete(delete_viaje))
}

async fn list_viajes(State(state): State<AppState>) -> Result<Json<Vec<Viaje>>, AppError> {
    let controller = ViajeController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn create_viaje(
    State(state): State<AppState>,
    payload: Result<Json<CreateViajeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Viaje>), AppError> {
    let Json(request) = payload?;
    let controller = ViajeController::new(state.pool.clone());
    let created = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_viaje(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Viaje>, AppError> {
    let controller = ViajeController::new(state.pool.clone());
    Ok(Json(controller.get(id).await?))
}

async fn update_viaje(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateViajeRequest>, JsonRejection>,
) -> Result<Json<Viaje>, AppError> {
    let Json(request) = payload?;
    let controller = ViajeController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_viaje(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = ViajeController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(MessageResponse::new("Viaje eliminado")))
}
