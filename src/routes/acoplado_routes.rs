use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::acoplado_controller::AcopladoController;
use crate::dto::MessageResponse;
use crate::models::{CreateAcopladoRequest, Acoplado, UpdateAcopladoRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_acoplado_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_acoplados).post(create_acoplado))
        .route("/:dominio", get(get_acoplado).put(update_acoplado).delete(delete_acoplado))
}

async fn list_acoplados(State(state): State<AppState>) -> Result<Json<Vec<Acoplado>>, AppError> {
    let controller = AcopladoController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn create_acoplado(
    State(state): State<AppState>,
    payload: Result<Json<CreateAcopladoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Acoplado>), AppError> {
    let Json(request) = payload?;
    let controller = AcopladoController::new(state.pool.clone());
    let created = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_acoplado(
    State(state): State<AppState>,
    Path(dominio): Path<String>,
) -> Result<Json<Acoplado>, AppError> {
    let controller = AcopladoController::new(state.pool.clone());
    Ok(Json(controller.get(&dominio).await?))
}

async fn update_acoplado(
    State(state): State<AppState>,
    Path(dominio): Path<String>,
    payload: Result<Json<UpdateAcopladoRequest>, JsonRejection>,
) -> Result<Json<Acoplado>, AppError> {
    let Json(request) = payload?;
    let controller = AcopladoController::new(state.pool.clone());
    Ok(Json(controller.update(&dominio, request).await?))
}

async fn delete_acoplado(
    State(state): State<AppState>,
    Path(dominio): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = AcopladoController::new(state.pool.clone());
    controller.delete(&dominio).await?;
    Ok(Json(MessageResponse::new("Acoplado eliminado")))
}
