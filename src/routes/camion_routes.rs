use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::camion_controller::CamionController;
use crate::dto::MessageResponse;
use crate::models::{CreateCamionRequest, Camion, UpdateCamionRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_camion_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_camiones).post(create_camion))
        .route("/:dominio", get(get_camion).put(update_camion).delete(delete_camion))
}

async fn list_camiones(State(state): State<AppState>) -> Result<Json<Vec<Camion>>, AppError> {
    let controller = CamionController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn create_camion(
    State(state): State<AppState>,
    payload: Result<Json<CreateCamionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Camion>), AppError> {
    let Json(request) = payload?;
    let controller = CamionController::new(state.pool.clone());
    let created = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_camion(
    State(state): State<AppState>,
    Path(dominio): Path<String>,
) -> Result<Json<Camion>, AppError> {
    let controller = CamionController::new(state.pool.clone());
    Ok(Json(controller.get(&dominio).await?))
}

async fn update_camion(
    State(state): State<AppState>,
    Path(dominio): Path<String>,
    payload: Result<Json<UpdateCamionRequest>, JsonRejection>,
) -> Result<Json<Camion>, AppError> {
    let Json(request) = payload?;
    let controller = CamionController::new(state.pool.clone());
    Ok(Json(controller.update(&dominio, request).await?))
}

async fn delete_camion(
    State(state): State<AppState>,
    Path(dominio): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = CamionController::new(state.pool.clone());
    controller.delete(&dominio).await?;
    Ok(Json(MessageResponse::new("Camión eliminado")))
}
