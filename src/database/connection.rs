//! Conexión a PostgreSQL
//!
//! Crea el pool de conexiones a partir de [`DatabaseConfig`] y registra la
//! URL enmascarada.

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::config::database::DatabaseConfig;

/// Crear un pool de conexiones a la base de datos
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    info!("🗄️ Conectando a {}", mask_database_url(&config.url));

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.url)
        .await?;

    // Verificar que la conexión funciona
    sqlx::query("SELECT 1").execute(&pool).await?;
    info!("✅ Base de datos conectada");

    Ok(pool)
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|p| p + 3) else {
        return url.to_string();
    };
    match url[scheme_end..].rfind('@') {
        Some(at) => format!("{}***:***@{}", &url[..scheme_end], &url[scheme_end + at + 1..]),
        None => url.to_string(),
    }
}
