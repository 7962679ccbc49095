use sqlx::{PgExecutor, PgPool};

use crate::models::{CreateViajeRequest, UpdateViajeRequest, Viaje};
use crate::utils::errors::AppError;

pub struct ViajeRepository {
    pool: PgPool,
}

impl ViajeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert<'e, E: PgExecutor<'e>>(
        executor: E,
        request: &CreateViajeRequest,
    ) -> Result<Viaje, sqlx::Error> {
        sqlx::query_as::<_, Viaje>(
            r#"
            INSERT INTO viajes
                (origen, destino, fecha_inicio, fecha_fin, chofer_id, camion_dominio, acoplado_dominio, estado)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&request.origen)
        .bind(&request.destino)
        .bind(request.fecha_inicio)
        .bind(request.fecha_fin)
        .bind(request.chofer_id)
        .bind(&request.camion_dominio)
        .bind(&request.acoplado_dominio)
        .bind(&request.estado)
        .fetch_one(executor)
        .await
    }

    pub async fn create(&self, request: &CreateViajeRequest) -> Result<Viaje, AppError> {
        Ok(Self::insert(&self.pool, request).await?)
    }

    /// Viajes más recientes primero
    pub async fn find_all(&self) -> Result<Vec<Viaje>, AppError> {
        let viajes = sqlx::query_as::<_, Viaje>(
            "SELECT * FROM viajes ORDER BY fecha_inicio DESC NULLS LAST, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(viajes)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Viaje>, AppError> {
        let viaje = sqlx::query_as::<_, Viaje>("SELECT * FROM viajes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(viaje)
    }

    pub async fn update(&self, id: i32, changes: UpdateViajeRequest) -> Result<Option<Viaje>, AppError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let merged = changes.apply_to(current);

        let viaje = sqlx::query_as::<_, Viaje>(
            r#"
            UPDATE viajes
            SET origen = $2, destino = $3, fecha_inicio = $4, fecha_fin = $5,
                chofer_id = $6, camion_dominio = $7, acoplado_dominio = $8, estado = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(merged.origen)
        .bind(merged.destino)
        .bind(merged.fecha_inicio)
        .bind(merged.fecha_fin)
        .bind(merged.chofer_id)
        .bind(merged.camion_dominio)
        .bind(merged.acoplado_dominio)
        .bind(merged.estado)
        .fetch_optional(&self.pool)
        .await?;

        Ok(viaje)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM viajes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
