use sqlx::PgPool;
use validator::Validate;

use crate::models::{CreateGastoRequest, Gasto, UpdateGastoRequest};
use crate::repositories::gasto_repository::GastoRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct GastoController {
    repository: GastoRepository,
}

impl GastoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: GastoRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Gasto>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Gasto> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Gasto", id))
    }

    pub async fn create(&self, request: CreateGastoRequest) -> AppResult<Gasto> {
        request.validate()?;
        self.repository.create(&request).await
    }

    pub async fn update(&self, id: i32, request: UpdateGastoRequest) -> AppResult<Gasto> {
        request.validate()?;
        self.repository
            .update(id, request)
            .await?
            .ok_or_else(|| not_found_error("Gasto", id))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Gasto", id));
        }
        Ok(())
    }
}
