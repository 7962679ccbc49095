use sqlx::{PgExecutor, PgPool};

use crate::models::{Camion, CreateCamionRequest, UpdateCamionRequest};
use crate::utils::errors::AppError;

pub struct CamionRepository {
    pool: PgPool,
}

impl CamionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert<'e, E: PgExecutor<'e>>(
        executor: E,
        request: &CreateCamionRequest,
    ) -> Result<Camion, sqlx::Error> {
        sqlx::query_as::<_, Camion>(
            r#"
            INSERT INTO camiones (dominio, marca, modelo, anio, color, tipo, chasis, foto, estado)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
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
        .bind(&request.foto)
        .bind(&request.estado)
        .fetch_one(executor)
        .await
    }

    pub async fn create(&self, request: &CreateCamionRequest) -> Result<Camion, AppError> {
        Ok(Self::insert(&self.pool, request).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Camion>, AppError> {
        let camiones = sqlx::query_as::<_, Camion>("SELECT * FROM camiones ORDER BY dominio")
            .fetch_all(&self.pool)
            .await?;
        Ok(camiones)
    }

    pub async fn find_by_dominio(&self, dominio: &str) -> Result<Option<Camion>, AppError> {
        let camion = sqlx::query_as::<_, Camion>("SELECT * FROM camiones WHERE dominio = $1")
            .bind(dominio)
            .fetch_optional(&self.pool)
            .await?;
        Ok(camion)
    }

    pub async fn update(&self, dominio: &str, changes: UpdateCamionRequest) -> Result<Option<Camion>, AppError> {
        let Some(current) = self.find_by_dominio(dominio).await? else {
            return Ok(None);
        };
        let merged = changes.apply_to(current);

        let camion = sqlx::query_as::<_, Camion>(
            r#"
            UPDATE camiones
            SET marca = $2, modelo = $3, anio = $4, color = $5, tipo = $6, chasis = $7, foto = $8, estado = $9
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
        .bind(merged.foto)
        .bind(merged.estado)
        .fetch_optional(&self.pool)
        .await?;

        Ok(camion)
    }

    pub async fn delete(&self, dominio: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM camiones WHERE dominio = $1")
            .bind(dominio)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
