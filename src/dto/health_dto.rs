use serde::Serialize;

// Response del health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub environment: String,
    pub version: &'static str,
}
