use sqlx::PgPool;
use validator::Validate;

use crate::models::{CreateTipoDeGastoRequest, Currency, TipoDeGasto, VehiculoEstado, ViajeEstado};
use crate::repositories::lookup_repository::LookupRepository;
use crate::utils::errors::{not_found_error, AppResult};

/// Tablas de referencia: solo lectura, salvo los tipos de gasto
pub struct LookupController {
    repository: LookupRepository,
}

impl LookupController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LookupRepository::new(pool),
        }
    }

    pub async fn vehiculo_estados(&self) -> AppResult<Vec<VehiculoEstado>> {
        self.repository.vehiculo_estados().await
    }

    pub async fn viaje_estados(&self) -> AppResult<Vec<ViajeEstado>> {
        self.repository.viaje_estados().await
    }

    pub async fn currencies(&self) -> AppResult<Vec<Currency>> {
        self.repository.currencies().await
    }

    pub async fn tipos_de_gasto(&self) -> AppResult<Vec<TipoDeGasto>> {
        self.repository.tipos_de_gasto().await
    }

    pub async fn create_tipo_de_gasto(&self, request: CreateTipoDeGastoRequest) -> AppResult<TipoDeGasto> {
        request.validate()?;
        self.repository.create_tipo_de_gasto(&request).await
    }

    pub async fn delete_tipo_de_gasto(&self, id: i32) -> AppResult<()> {
        if !self.repository.delete_tipo_de_gasto(id).await? {
            return Err(not_found_error("Tipo de gasto", id));
        }
        Ok(())
    }
}
