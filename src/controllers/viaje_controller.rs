use sqlx::PgPool;
use validator::Validate;

use crate::models::{CreateViajeRequest, Viaje, UpdateViajeRequest};
use crate::repositories::viaje_repository::ViajeRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct ViajeController {
    repository: ViajeRepository,
}

impl ViajeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ViajeRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Viaje>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Viaje> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Viaje", id))
    }

    pub async fn create(&self, request: CreateViajeRequest) -> AppResult<Viaje> {
        request.validate()?;
        let viaje = self.repository.create(&request).await?;
        tracing::info!("🧭 Viaje {} creado: {} -> {}", viaje.id, viaje.origen, viaje.destino);
        Ok(viaje)
    }

    pub async fn update(&self, id: i32, request: UpdateViajeRequest) -> AppResult<Viaje> {
        request.validate()?;
        self.repository
            .update(id, request)
            .await?
            .ok_or_else(|| not_found_error("Viaje", id))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Viaje", id));
        }
        Ok(())
    }
}
