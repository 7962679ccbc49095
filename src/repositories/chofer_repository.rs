use sqlx::{PgExecutor, PgPool};

use crate::models::{Chofer, CreateChoferRequest, UpdateChoferRequest};
use crate::utils::errors::AppError;

pub struct ChoferRepository {
    pool: PgPool,
}

impl ChoferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// INSERT compartido entre el CRUD y la siembra de datos
    pub async fn insert<'e, E: PgExecutor<'e>>(
        executor: E,
        request: &CreateChoferRequest,
    ) -> Result<Chofer, sqlx::Error> {
        sqlx::query_as::<_, Chofer>(
            r#"
            INSERT INTO choferes
                (nombre, apellido, nacionalidad, identificacion, identificacion_laboral, telefono, email)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&request.nombre)
        .bind(&request.apellido)
        .bind(&request.nacionalidad)
        .bind(&request.identificacion)
        .bind(&request.identificacion_laboral)
        .bind(&request.telefono)
        .bind(&request.email)
        .fetch_one(executor)
        .await
    }

    pub async fn create(&self, request: &CreateChoferRequest) -> Result<Chofer, AppError> {
        Ok(Self::insert(&self.pool, request).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Chofer>, AppError> {
        let choferes = sqlx::query_as::<_, Chofer>("SELECT * FROM choferes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(choferes)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Chofer>, AppError> {
        let chofer = sqlx::query_as::<_, Chofer>("SELECT * FROM choferes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(chofer)
    }

    /// Actualizar un chofer; `None` si no existe
    pub async fn update(&self, id: i32, changes: UpdateChoferRequest) -> Result<Option<Chofer>, AppError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let merged = changes.apply_to(current);

        let chofer = sqlx::query_as::<_, Chofer>(
            r#"
            UPDATE choferes
            SET nombre = $2, apellido = $3, nacionalidad = $4, identificacion = $5,
                identificacion_laboral = $6, telefono = $7, email = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(merged.nombre)
        .bind(merged.apellido)
        .bind(merged.nacionalidad)
        .bind(merged.identificacion)
        .bind(merged.identificacion_laboral)
        .bind(merged.telefono)
        .bind(merged.email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(chofer)
    }

    /// Eliminar un chofer; `false` si no existía
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM choferes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
