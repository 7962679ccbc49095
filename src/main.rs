use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cargoflow::config::{DatabaseConfig, EnvironmentConfig};
use cargoflow::database::create_pool;
use cargoflow::services::reset::{prepare_on_startup, PgSeedStore, ResetCoordinator, SystemClock};
use cargoflow::{create_app_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cargoflow=debug,tower_http=info")),
        )
        .init();

    info!("🚚 CargoFlow - Gestión de flota y viajes");
    info!("=========================================");

    let config = EnvironmentConfig::from_env().context("Configuración del servidor inválida")?;
    let db_config = DatabaseConfig::from_env().context("Configuración de base de datos inválida")?;

    let pool = match create_pool(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let store = Arc::new(PgSeedStore::new(pool.clone()));
    let clock = Arc::new(SystemClock);

    prepare_on_startup(store.as_ref(), clock.as_ref(), config.seed_on_startup)
        .await
        .context("Error creando el esquema")?;

    let reset = ResetCoordinator::new(store, clock);
    let state = AppState::new(pool, config.clone(), reset.clone());
    let app = create_app_router(state);

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    info!("🌐 Servidor iniciando en http://{} ({})", addr, config.environment);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/health - Health check");
    info!("   POST /api/reset - Reiniciar y sembrar la base de datos");
    info!("   GET  /api/reset/status - Estado del reinicio");
    info!("   CRUD /api/choferes, /api/camiones, /api/acoplados");
    info!("   CRUD /api/viajes, /api/polizas, /api/gastos");
    info!("   GET  /api/currencies, /api/vehiculoEstados, /api/viajeEstados, /api/tiposDeGasto");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
    }

    // Un reinicio en curso termina antes de cerrar el pool
    reset.drain().await;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
