//! Acceso a las tablas de referencia

use sqlx::{PgExecutor, PgPool};

use crate::models::{CreateTipoDeGastoRequest, Currency, TipoDeGasto, VehiculoEstado, ViajeEstado};
use crate::utils::errors::AppError;

pub struct LookupRepository {
    pool: PgPool,
}

impl LookupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert_vehiculo_estado<'e, E: PgExecutor<'e>>(
        executor: E,
        nombre: &str,
    ) -> Result<VehiculoEstado, sqlx::Error> {
        sqlx::query_as::<_, VehiculoEstado>("INSERT INTO vehiculo_estados (nombre) VALUES ($1) RETURNING *")
            .bind(nombre)
            .fetch_one(executor)
            .await
    }

    pub async fn insert_viaje_estado<'e, E: PgExecutor<'e>>(
        executor: E,
        nombre: &str,
    ) -> Result<ViajeEstado, sqlx::Error> {
        sqlx::query_as::<_, ViajeEstado>("INSERT INTO viaje_estados (nombre) VALUES ($1) RETURNING *")
            .bind(nombre)
            .fetch_one(executor)
            .await
    }

    pub async fn insert_currency<'e, E: PgExecutor<'e>>(
        executor: E,
        code: &str,
        name: &str,
    ) -> Result<Currency, sqlx::Error> {
        sqlx::query_as::<_, Currency>("INSERT INTO currencies (code, name) VALUES ($1, $2) RETURNING *")
            .bind(code)
            .bind(name)
            .fetch_one(executor)
            .await
    }

    pub async fn insert_tipo_de_gasto<'e, E: PgExecutor<'e>>(
        executor: E,
        nombre: &str,
    ) -> Result<TipoDeGasto, sqlx::Error> {
        sqlx::query_as::<_, TipoDeGasto>("INSERT INTO tipos_de_gasto (nombre) VALUES ($1) RETURNING *")
            .bind(nombre)
            .fetch_one(executor)
            .await
    }

    pub async fn vehiculo_estados(&self) -> Result<Vec<VehiculoEstado>, AppError> {
        let estados = sqlx::query_as::<_, VehiculoEstado>("SELECT * FROM vehiculo_estados ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(estados)
    }

    pub async fn viaje_estados(&self) -> Result<Vec<ViajeEstado>, AppError> {
        let estados = sqlx::query_as::<_, ViajeEstado>("SELECT * FROM viaje_estados ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(estados)
    }

    pub async fn currencies(&self) -> Result<Vec<Currency>, AppError> {
        let currencies = sqlx::query_as::<_, Currency>("SELECT * FROM currencies ORDER BY code")
            .fetch_all(&self.pool)
            .await?;
        Ok(currencies)
    }

    pub async fn tipos_de_gasto(&self) -> Result<Vec<TipoDeGasto>, AppError> {
        let tipos = sqlx::query_as::<_, TipoDeGasto>("SELECT * FROM tipos_de_gasto ORDER BY nombre")
            .fetch_all(&self.pool)
            .await?;
        Ok(tipos)
    }

    pub async fn create_tipo_de_gasto(&self, request: &CreateTipoDeGastoRequest) -> Result<TipoDeGasto, AppError> {
        Ok(Self::insert_tipo_de_gasto(&self.pool, &request.nombre).await?)
    }

    pub async fn delete_tipo_de_gasto(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM tipos_de_gasto WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
