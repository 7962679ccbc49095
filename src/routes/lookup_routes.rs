use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::controllers::lookup_controller::LookupController;
use crate::dto::MessageResponse;
use crate::models::{CreateTipoDeGastoRequest, Currency, TipoDeGasto, VehiculoEstado, ViajeEstado};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de las tablas de referencia, con su ruta completa
pub fn create_lookup_router() -> Router<AppState> {
    Router::new()
        .route("/api/currencies", get(list_currencies))
        .route("/api/vehiculoEstados", get(list_vehiculo_estados))
        .route("/api/viajeEstados", get(list_viaje_estados))
        .route("/api/tiposDeGasto", get(list_tipos_de_gasto).post(create_tipo_de_gasto))
        .route("/api/tiposDeGasto/:id", delete(delete_tipo_de_gasto))
}

async fn list_currencies(State(state): State<AppState>) -> Result<Json<Vec<Currency>>, AppError> {
    let controller = LookupController::new(state.pool.clone());
    Ok(Json(controller.currencies().await?))
}

async fn list_vehiculo_estados(State(state): State<AppState>) -> Result<Json<Vec<VehiculoEstado>>, AppError> {
    let controller = LookupController::new(state.pool.clone());
    Ok(Json(controller.vehiculo_estados().await?))
}

async fn list_viaje_estados(State(state): State<AppState>) -> Result<Json<Vec<ViajeEstado>>, AppError> {
    let controller = LookupController::new(state.pool.clone());
    Ok(Json(controller.viaje_estados().await?))
}

async fn list_tipos_de_gasto(State(state): State<AppState>) -> Result<Json<Vec<TipoDeGasto>>, AppError> {
    let controller = LookupController::new(state.pool.clone());
    Ok(Json(controller.tipos_de_gasto().await?))
}

async fn create_tipo_de_gasto(
    State(state): State<AppState>,
    payload: Result<Json<CreateTipoDeGastoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TipoDeGasto>), AppError> {
    let Json(request) = payload?;
    let controller = LookupController::new(state.pool.clone());
    let tipo = controller.create_tipo_de_gasto(request).await?;
    Ok((StatusCode::CREATED, Json(tipo)))
}

async fn delete_tipo_de_gasto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = LookupController::new(state.pool.clone());
    controller.delete_tipo_de_gasto(id).await?;
    Ok(Json(MessageResponse::new("Tipo de gasto eliminado")))
}
