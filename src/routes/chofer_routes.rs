use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::chofer_controller::ChoferController;
use crate::dto::MessageResponse;
use crate::models::{Chofer, CreateChoferRequest, UpdateChoferRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_chofer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_choferes).post(create_chofer))
        .route("/:id", get(get_chofer).put(update_chofer).delete(delete_chofer))
}

async fn list_choferes(State(state): State<AppState>) -> Result<Json<Vec<Chofer>>, AppError> {
    let controller = ChoferController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn create_chofer(
    State(state): State<AppState>,
    payload: Result<Json<CreateChoferRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Chofer>), AppError> {
    let Json(request) = payload?;
    let controller = ChoferController::new(state.pool.clone());
    let chofer = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(chofer)))
}

async fn get_chofer(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Chofer>, AppError> {
    let controller = ChoferController::new(state.pool.clone());
    Ok(Json(controller.get(id).await?))
}

async fn update_chofer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateChoferRequest>, JsonRejection>,
) -> Result<Json<Chofer>, AppError> {
    let Json(request) = payload?;
    let controller = ChoferController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_chofer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = ChoferController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(MessageResponse::new("Chofer eliminado")))
}
