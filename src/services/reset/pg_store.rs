//! Implementación de [`SeedStore`] sobre PostgreSQL

use sqlx::{PgPool, Postgres, Transaction};

use super::store::{RowKey, SeedError, SeedRow, SeedStore, SeedTx, Table};
use crate::database::schema;
use crate::repositories::{
    acoplado_repository::AcopladoRepository, camion_repository::CamionRepository,
    chofer_repository::ChoferRepository, gasto_repository::GastoRepository, lookup_repository::LookupRepository,
    poliza_repository::PolizaRepository, viaje_repository::ViajeRepository,
};

#[derive(Clone)]
pub struct PgSeedStore {
    pool: PgPool,
}

impl PgSeedStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SeedStore for PgSeedStore {
    async fn drop_all(&self) -> Result<(), SeedError> {
        Ok(schema::drop_all(&self.pool).await?)
    }

    async fn create_all(&self) -> Result<(), SeedError> {
        Ok(schema::create_all(&self.pool).await?)
    }

    async fn begin(&self) -> Result<Box<dyn SeedTx>, SeedError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgSeedTx { tx }))
    }
}

pub struct PgSeedTx {
    tx: Transaction<'static, Postgres>,
}

#[async_trait::async_trait]
impl SeedTx for PgSeedTx {
    async fn count(&mut self, table: Table) -> Result<i64, SeedError> {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table.name()))
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(count)
    }

    async fn first_key(&mut self, table: Table) -> Result<Option<RowKey>, SeedError> {
        let sql = format!(
            "SELECT {key} FROM {table} ORDER BY {key} ASC LIMIT 1",
            key = table.key_column(),
            table = table.name()
        );

        let key = match table.key_column() {
            "id" => sqlx::query_as::<_, (i32,)>(&sql)
                .fetch_optional(&mut *self.tx)
                .await?
                .map(|(id,)| RowKey::Id(id)),
            _ => sqlx::query_as::<_, (String,)>(&sql)
                .fetch_optional(&mut *self.tx)
                .await?
                .map(|(code,)| RowKey::Code(code)),
        };
        Ok(key)
    }

    async fn insert(&mut self, row: SeedRow) -> Result<RowKey, SeedError> {
        let conn = &mut *self.tx;
        let key = match row {
            SeedRow::VehiculoEstado { nombre } => {
                RowKey::Id(LookupRepository::insert_vehiculo_estado(conn, &nombre).await?.id)
            }
            SeedRow::ViajeEstado { nombre } => {
                RowKey::Id(LookupRepository::insert_viaje_estado(conn, &nombre).await?.id)
            }
            SeedRow::Currency { code, name } => {
                RowKey::Code(LookupRepository::insert_currency(conn, &code, &name).await?.code)
            }
            SeedRow::TipoDeGasto { nombre } => {
                RowKey::Id(LookupRepository::insert_tipo_de_gasto(conn, &nombre).await?.id)
            }
            SeedRow::Chofer(request) => RowKey::Id(ChoferRepository::insert(conn, &request).await?.id),
            SeedRow::Camion(request) => RowKey::Code(CamionRepository::insert(conn, &request).await?.dominio),
            SeedRow::Acoplado(request) => RowKey::Code(AcopladoRepository::insert(conn, &request).await?.dominio),
            SeedRow::Viaje(request) => RowKey::Id(ViajeRepository::insert(conn, &request).await?.id),
            SeedRow::Poliza(request) => RowKey::Id(PolizaRepository::insert(conn, &request).await?.id),
            SeedRow::Gasto(request) => RowKey::Id(GastoRepository::insert(conn, &request).await?.id),
        };
        Ok(key)
    }

    async fn commit(self: Box<Self>) -> Result<(), SeedError> {
        Ok(self.tx.commit().await?)
    }

    async fn rollback(self: Box<Self>) -> Result<(), SeedError> {
        Ok(self.tx.rollback().await?)
    }
}
