use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::gasto_controller::GastoController;
use crate::dto::MessageResponse;
use crate::models::{CreateGastoRequest, Gasto, UpdateGastoRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_gasto_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_gastos).post(create_gasto))
        .route("/:id", get(get_gasto).put(update_gasto).delete(delete_gasto))
}

async fn list_gastos(State(state): State<AppState>) -> Result<Json<Vec<Gasto>>, AppError> {
    let controller = GastoController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn create_gasto(
    State(state): State<AppState>,
    payload: Result<Json<CreateGastoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Gasto>), AppError> {
    let Json(request) = payload?;
    let controller = GastoController::new(state.pool.clone());
    let created = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_gasto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Gasto>, AppError> {
    let controller = GastoController::new(state.pool.clone());
    Ok(Json(controller.get(id).await?))
}

async fn update_gasto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateGastoRequest>, JsonRejection>,
) -> Result<Json<Gasto>, AppError> {
    let Json(request) = payload?;
    let controller = GastoController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_gasto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = GastoController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(MessageResponse::new("Gasto eliminado")))
}
