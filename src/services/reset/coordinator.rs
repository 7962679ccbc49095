//! Coordinador del reinicio en segundo plano
//!
//! Decide si un pedido de reinicio se acepta, lanza el procedimiento en una
//! tarea de tokio y publica su estado. A lo sumo un procedimiento corre a la
//! vez: la decisión se toma bajo el mutex del estado, que nunca se mantiene
//! durante I/O.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::seed::reset_and_seed;
use super::status::{Clock, ResetOutcome, ResetStatus};
use super::store::SeedStore;

#[derive(Clone)]
pub struct ResetCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    status: Mutex<ResetStatus>,
    task: Mutex<Option<JoinHandle<()>>>,
    store: Arc<dyn SeedStore>,
    clock: Arc<dyn Clock>,
}

impl ResetCoordinator {
    pub fn new(store: Arc<dyn SeedStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Inner {
                status: Mutex::new(ResetStatus::default()),
                task: Mutex::new(None),
                store,
                clock,
            }),
        }
    }

    /// Aceptar un reinicio si no hay otro en curso; no espera a que termine
    pub async fn request_reset(&self) -> ResetOutcome {
        // El slot de la tarea se toma primero para que dos pedidos aceptados
        // seguidos guarden sus handles en orden.
        let mut task = self.inner.task.lock().await;

        {
            let mut status = self.inner.status.lock().await;
            if status.in_progress {
                info!("⏳ Reinicio ya en curso, pedido ignorado");
                return ResetOutcome::AlreadyRunning;
            }
            status.begin(self.inner.clock.now());
        }

        let inner = Arc::clone(&self.inner);
        *task = Some(tokio::spawn(async move { inner.run().await }));

        info!("🔄 Reinicio aceptado");
        ResetOutcome::Accepted
    }

    pub async fn status(&self) -> ResetStatus {
        self.inner.status.lock().await.clone()
    }

    /// Esperar a que termine el último procedimiento lanzado, si lo hay
    pub async fn drain(&self) {
        let handle = self.inner.task.lock().await.take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                error!("❌ Tarea de reinicio terminó de forma anormal: {}", e);
            }
        }
    }
}

impl Inner {
    async fn run(&self) {
        let store = Arc::clone(&self.store);
        let clock = Arc::clone(&self.clock);

        // Tarea anidada: un panic en la siembra llega como JoinError
        let outcome = tokio::spawn(async move { reset_and_seed(store.as_ref(), clock.as_ref()).await }).await;

        let last_error = match outcome {
            Ok(Ok(())) => {
                info!("✅ Reinicio completado");
                None
            }
            Ok(Err(e)) => {
                error!("❌ Reinicio falló: {}", e);
                Some(e.to_string())
            }
            Err(e) => {
                error!("❌ Reinicio abortado: {}", e);
                Some(format!("reset task failed: {}", e))
            }
        };

        self.status.lock().await.finish(self.clock.now(), last_error);
    }
}
