use sqlx::PgPool;
use validator::Validate;

use crate::models::{Camion, CreateCamionRequest, UpdateCamionRequest};
use crate::repositories::camion_repository::CamionRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct CamionController {
    repository: CamionRepository,
}

impl CamionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CamionRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Camion>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, dominio: &str) -> AppResult<Camion> {
        self.repository
            .find_by_dominio(dominio)
            .await?
            .ok_or_else(|| not_found_error("Camión", dominio))
    }

    pub async fn create(&self, request: CreateCamionRequest) -> AppResult<Camion> {
        request.validate()?;
        let camion = self.repository.create(&request).await?;
        tracing::info!("🚛 Camión {} creado", camion.dominio);
        Ok(camion)
    }

    pub async fn update(&self, dominio: &str, request: UpdateCamionRequest) -> AppResult<Camion> {
        request.validate()?;
        self.repository
            .update(dominio, request)
            .await?
            .ok_or_else(|| not_found_error("Camión", dominio))
    }

    pub async fn delete(&self, dominio: &str) -> AppResult<()> {
        if !self.repository.delete(dominio).await? {
            return Err(not_found_error("Camión", dominio));
        }
        Ok(())
    }
}
