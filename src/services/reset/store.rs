//! Contrato de almacenamiento usado por la siembra
//!
//! La siembra no conoce SQL: trabaja con tablas, claves y filas a insertar.
//! Producción lo implementa sobre PostgreSQL ([`super::pg_store`]); los tests
//! usan una implementación en memoria.

use thiserror::Error;

use crate::models::{
    CreateAcopladoRequest, CreateCamionRequest, CreateChoferRequest, CreateGastoRequest, CreatePolizaRequest,
    CreateViajeRequest,
};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("no rows in {0} to reference")]
    MissingReference(&'static str),

    #[error("{0}")]
    Backend(String),

    #[error("seed step '{step}' failed: {source}")]
    Step {
        step: &'static str,
        source: Box<SeedError>,
    },
}

/// Tablas que la siembra lee o escribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    VehiculoEstados,
    ViajeEstados,
    Currencies,
    TiposDeGasto,
    Choferes,
    Camiones,
    Acoplados,
    Viajes,
    Polizas,
    Gastos,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::VehiculoEstados => "vehiculo_estados",
            Table::ViajeEstados => "viaje_estados",
            Table::Currencies => "currencies",
            Table::TiposDeGasto => "tipos_de_gasto",
            Table::Choferes => "choferes",
            Table::Camiones => "camiones",
            Table::Acoplados => "acoplados",
            Table::Viajes => "viajes",
            Table::Polizas => "polizas",
            Table::Gastos => "gastos",
        }
    }

    /// Columna de la clave primaria
    pub fn key_column(&self) -> &'static str {
        match self {
            Table::Currencies => "code",
            Table::Camiones | Table::Acoplados => "dominio",
            _ => "id",
        }
    }
}

/// Clave primaria: entera o de texto (dominio, código de moneda)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(i32),
    Code(String),
}

impl RowKey {
    pub fn as_id(&self) -> Option<i32> {
        match self {
            RowKey::Id(id) => Some(*id),
            RowKey::Code(_) => None,
        }
    }

    pub fn as_code(&self) -> Option<&str> {
        match self {
            RowKey::Code(code) => Some(code),
            RowKey::Id(_) => None,
        }
    }
}

/// Fila a insertar
#[derive(Debug, Clone, PartialEq)]
pub enum SeedRow {
    VehiculoEstado { nombre: String },
    ViajeEstado { nombre: String },
    Currency { code: String, name: String },
    TipoDeGasto { nombre: String },
    Chofer(CreateChoferRequest),
    Camion(CreateCamionRequest),
    Acoplado(CreateAcopladoRequest),
    Viaje(CreateViajeRequest),
    Poliza(CreatePolizaRequest),
    Gasto(CreateGastoRequest),
}

impl SeedRow {
    pub fn table(&self) -> Table {
        match self {
            SeedRow::VehiculoEstado { .. } => Table::VehiculoEstados,
            SeedRow::ViajeEstado { .. } => Table::ViajeEstados,
            SeedRow::Currency { .. } => Table::Currencies,
            SeedRow::TipoDeGasto { .. } => Table::TiposDeGasto,
            SeedRow::Chofer(_) => Table::Choferes,
            SeedRow::Camion(_) => Table::Camiones,
            SeedRow::Acoplado(_) => Table::Acoplados,
            SeedRow::Viaje(_) => Table::Viajes,
            SeedRow::Poliza(_) => Table::Polizas,
            SeedRow::Gasto(_) => Table::Gastos,
        }
    }
}

/// Almacenamiento capaz de reconstruir el esquema y abrir transacciones
#[async_trait::async_trait]
pub trait SeedStore: Send + Sync {
    async fn drop_all(&self) -> Result<(), SeedError>;
    async fn create_all(&self) -> Result<(), SeedError>;
    async fn begin(&self) -> Result<Box<dyn SeedTx>, SeedError>;
}

/// Transacción abierta durante un paso de la siembra
#[async_trait::async_trait]
pub trait SeedTx: Send {
    async fn count(&mut self, table: Table) -> Result<i64, SeedError>;

    /// Clave de la primera fila en orden ascendente de clave
    async fn first_key(&mut self, table: Table) -> Result<Option<RowKey>, SeedError>;

    async fn insert(&mut self, row: SeedRow) -> Result<RowKey, SeedError>;
    async fn commit(self: Box<Self>) -> Result<(), SeedError>;
    async fn rollback(self: Box<Self>) -> Result<(), SeedError>;
}
