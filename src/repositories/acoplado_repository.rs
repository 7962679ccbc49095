use sqlx::{PgExecutor, PgPool};

use crate::models::{Acoplado, CreateAcopladoRequest, UpdateAcopladoRequest};
use crate::utils::errors::AppError;

pub struct AcopladoRepository {
    pool: PgPool,
}

impl AcopladoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert<'e, E: PgExecutor<'e>>(
        executor: E,
        request: &CreateAcopladoRequest,
    ) -> Result<Acoplado, sqlx::Error> {
        sqlx::query_as::<_, Acoplado>(
            r#"
            INSERT INTO acoplados (dominio, marca, modelo, anio, color, tipo, chasis, estado)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&request.dominio)
        .bind(&request.marca)
        .bind(&request.modelo)
        .bind(request.anio)
        .bind(&request.color)
        .bind(&request.tipo)
        .bind(&request.chasis)
        .bind(&request.estado)
        .fetch_one(executor)
        .await
    }

    pub async fn create(&self, request: &CreateAcopladoRequest) -> Result<Acoplado, AppError> {
        Ok(Self::insert(&self.pool, request).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Acoplado>, AppError> {
        let acoplados = sqlx::query_as::<_, Acoplado>("SELECT * FROM acoplados ORDER BY dominio")
            .fetch_all(&self.pool)
            .await?;
        Ok(acoplados)
    }

    pub async fn find_by_dominio(&self, dominio: &str) -> Result<Option<Acoplado>, AppError> {
        let acoplado = sqlx::query_as::<_, Acoplado>("SELECT * FROM acoplados WHERE dominio = $1")
            .bind(dominio)
            .fetch_optional(&self.pool)
            .await?;
        Ok(acoplado)
    }

    pub async fn update(&self, dominio: &str, changes: UpdateAcopladoRequest) -> Result<Option<Acoplado>, AppError> {
        let Some(current) = self.find_by_dominio(dominio).await? else {
            return Ok(None);
        };
        let merged = changes.apply_to(current);

        let acoplado = sqlx::query_as::<_, Acoplado>(
            r#"
            UPDATE acoplados
            SET marca = $2, modelo = $3, anio = $4, color = $5, tipo = $6, chasis = $7, estado = $8
            WHERE dominio = $1
            RETURNING *
            "#,
        )
        .bind(dominio)
        .bind(merged.marca)
        .bind(merged.modelo)
        .bind(merged.anio)
        .bind(merged.color)
        .bind(merged.tipo)
        .bind(merged.chasis)
        .bind(merged.estado)
        .fetch_optional(&self.pool)
        .await?;

        Ok(acoplado)
    }

    pub async fn delete(&self, dominio: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM acoplados WHERE dominio = $1")
            .bind(dominio)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
