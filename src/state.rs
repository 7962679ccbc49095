//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::services::reset::ResetCoordinator;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub reset: ResetCoordinator,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig, reset: ResetCoordinator) -> Self {
        Self { pool, config, reset }
    }
}
