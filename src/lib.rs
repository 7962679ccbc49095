//! CargoFlow: backend de gestión de flota y viajes de transporte de carga
//!
//! CRUD de choferes, camiones, acoplados, viajes, pólizas y gastos sobre
//! PostgreSQL, más un reinicio en segundo plano que reconstruye el esquema y
//! siembra datos de ejemplo.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app_router;
pub use state::AppState;
