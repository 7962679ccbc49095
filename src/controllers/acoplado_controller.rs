use sqlx::PgPool;
use validator::Validate;

use crate::models::{Acoplado, CreateAcopladoRequest, UpdateAcopladoRequest};
use crate::repositories::acoplado_repository::AcopladoRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct AcopladoController {
    repository: AcopladoRepository,
}

impl AcopladoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AcopladoRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Acoplado>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, dominio: &str) -> AppResult<Acoplado> {
        self.repository
            .find_by_dominio(dominio)
            .await?
            .ok_or_else(|| not_found_error("Acoplado", dominio))
    }

    pub async fn create(&self, request: CreateAcopladoRequest) -> AppResult<Acoplado> {
        request.validate()?;
        self.repository.create(&request).await
    }

    pub async fn update(&self, dominio: &str, request: UpdateAcopladoRequest) -> AppResult<Acoplado> {
        request.validate()?;
        self.repository
            .update(dominio, request)
            .await?
            .ok_or_else(|| not_found_error("Acoplado", dominio))
    }

    pub async fn delete(&self, dominio: &str) -> AppResult<()> {
        if !self.repository.delete(dominio).await? {
            return Err(not_found_error("Acoplado", dominio));
        }
        Ok(())
    }
}
