use sqlx::PgPool;
use validator::Validate;

use crate::models::{CreatePolizaRequest, Poliza, UpdatePolizaRequest};
use crate::repositories::poliza_repository::PolizaRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct PolizaController {
    repository: PolizaRepository,
}

impl PolizaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PolizaRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Poliza>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Poliza> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Póliza", id))
    }

    pub async fn create(&self, request: CreatePolizaRequest) -> AppResult<Poliza> {
        request.validate()?;
        self.repository.create(&request).await
    }

    pub async fn update(&self, id: i32, request: UpdatePolizaRequest) -> AppResult<Poliza> {
        request.validate()?;
        self.repository
            .update(id, request)
            .await?
            .ok_or_else(|| not_found_error("Póliza", id))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Póliza", id));
        }
        Ok(())
    }
}
