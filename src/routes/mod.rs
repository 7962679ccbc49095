use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

pub mod acoplado_routes;
pub mod camion_routes;
pub mod chofer_routes;
pub mod gasto_routes;
pub mod health_routes;
pub mod lookup_routes;
pub mod poliza_routes;
pub mod reset_routes;
pub mod viaje_routes;

/// Router completo de la API con CORS y trazas HTTP
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .nest("/api/health", health_routes::create_health_router())
        .nest("/api/reset", reset_routes::create_reset_router())
        .nest("/api/choferes", chofer_routes::create_chofer_router())
        .nest("/api/camiones", camion_routes::create_camion_router())
        .nest("/api/acoplados", acoplado_routes::create_acoplado_router())
        .nest("/api/viajes", viaje_routes::create_viaje_router())
        .nest("/api/polizas", poliza_routes::create_poliza_router())
        .nest("/api/gastos", gasto_routes::create_gasto_router())
        .merge(lookup_routes::create_lookup_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
