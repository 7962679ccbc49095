use sqlx::{PgExecutor, PgPool};

use crate::models::{CreatePolizaRequest, Poliza, UpdatePolizaRequest};
use crate::utils::errors::AppError;

pub struct PolizaRepository {
    pool: PgPool,
}

impl PolizaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert<'e, E: PgExecutor<'e>>(
        executor: E,
        request: &CreatePolizaRequest,
    ) -> Result<Poliza, sqlx::Error> {
        sqlx::query_as::<_, Poliza>(
            r#"
            INSERT INTO polizas (aseguradora, asegurado, vehiculo_dominio, inicio_vigencia, fin_vigencia)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&request.aseguradora)
        .bind(&request.asegurado)
        .bind(&request.vehiculo_dominio)
        .bind(request.inicio_vigencia)
        .bind(request.fin_vigencia)
        .fetch_one(executor)
        .await
    }

    pub async fn create(&self, request: &CreatePolizaRequest) -> Result<Poliza, AppError> {
        Ok(Self::insert(&self.pool, request).await?)
    }

    /// Las que vencen antes primero
    pub async fn find_all(&self) -> Result<Vec<Poliza>, AppError> {
        let polizas = sqlx::query_as::<_, Poliza>(
            "SELECT * FROM polizas ORDER BY fin_vigencia ASC NULLS LAST, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(polizas)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Poliza>, AppError> {
        let poliza = sqlx::query_as::<_, Poliza>("SELECT * FROM polizas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(poliza)
    }

    pub async fn update(&self, id: i32, changes: UpdatePolizaRequest) -> Result<Option<Poliza>, AppError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let merged = changes.apply_to(current);

        let poliza = sqlx::query_as::<_, Poliza>(
            r#"
            UPDATE polizas
            SET aseguradora = $2, asegurado = $3, vehiculo_dominio = $4, inicio_vigencia = $5, fin_vigencia = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(merged.aseguradora)
        .bind(merged.asegurado)
        .bind(merged.vehiculo_dominio)
        .bind(merged.inicio_vigencia)
        .bind(merged.fin_vigencia)
        .fetch_optional(&self.pool)
        .await?;

        Ok(poliza)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM polizas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
