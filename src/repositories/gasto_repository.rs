use sqlx::{PgExecutor, PgPool};

use crate::models::{CreateGastoRequest, Gasto, UpdateGastoRequest};
use crate::utils::errors::AppError;

pub struct GastoRepository {
    pool: PgPool,
}

impl GastoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert<'e, E: PgExecutor<'e>>(
        executor: E,
        request: &CreateGastoRequest,
    ) -> Result<Gasto, sqlx::Error> {
        sqlx::query_as::<_, Gasto>(
            r#"
            INSERT INTO gastos (monto, fecha, descripcion, viaje_id, tipo_id, moneda)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(request.monto)
        .bind(request.fecha)
        .bind(&request.descripcion)
        .bind(request.viaje_id)
        .bind(request.tipo_id)
        .bind(&request.moneda)
        .fetch_one(executor)
        .await
    }

    pub async fn create(&self, request: &CreateGastoRequest) -> Result<Gasto, AppError> {
        Ok(Self::insert(&self.pool, request).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Gasto>, AppError> {
        let gastos = sqlx::query_as::<_, Gasto>("SELECT * FROM gastos ORDER BY fecha DESC NULLS LAST, id DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(gastos)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Gasto>, AppError> {
        let gasto = sqlx::query_as::<_, Gasto>("SELECT * FROM gastos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(gasto)
    }

    pub async fn update(&self, id: i32, changes: UpdateGastoRequest) -> Result<Option<Gasto>, AppError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let merged = changes.apply_to(current);

        let gasto = sqlx::query_as::<_, Gasto>(
            r#"
            UPDATE gastos
            SET monto = $2, fecha = $3, descripcion = $4, viaje_id = $5, tipo_id = $6, moneda = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(merged.monto)
        .bind(merged.fecha)
        .bind(merged.descripcion)
        .bind(merged.viaje_id)
        .bind(merged.tipo_id)
        .bind(merged.moneda)
        .fetch_optional(&self.pool)
        .await?;

        Ok(gasto)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM gastos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
