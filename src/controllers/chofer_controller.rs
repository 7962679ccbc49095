use sqlx::PgPool;
use validator::Validate;

use crate::models::{Chofer, CreateChoferRequest, UpdateChoferRequest};
use crate::repositories::chofer_repository::ChoferRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct ChoferController {
    repository: ChoferRepository,
}

impl ChoferController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ChoferRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Chofer>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Chofer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Chofer", id))
    }

    pub async fn create(&self, request: CreateChoferRequest) -> AppResult<Chofer> {
        request.validate()?;
        let chofer = self.repository.create(&request).await?;
        tracing::info!("👤 Chofer {} creado", chofer.id);
        Ok(chofer)
    }

    pub async fn update(&self, id: i32, request: UpdateChoferRequest) -> AppResult<Chofer> {
        request.validate()?;
        self.repository
            .update(id, request)
            .await?
            .ok_or_else(|| not_found_error("Chofer", id))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Chofer", id));
        }
        Ok(())
    }
}
