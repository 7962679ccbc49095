//! Siembra de datos de ejemplo
//!
//! La siembra es una lista de pasos ([`SeedStep`]); cada paso abre su propia
//! transacción y la confirma antes de que empiece el siguiente. Todos los
//! pasos comprueban si la tabla está vacía antes de insertar, de modo que
//! sembrar dos veces no duplica filas.

use chrono::Duration;
use tracing::{debug, info, warn};

use super::status::Clock;
use super::store::{RowKey, SeedError, SeedRow, SeedStore, SeedTx, Table};
use crate::models::{
    CreateAcopladoRequest, CreateCamionRequest, CreateChoferRequest, CreateGastoRequest, CreatePolizaRequest,
    CreateViajeRequest,
};

const VEHICULO_ESTADOS: &[&str] = &["Disponible", "En Viaje", "En Mantenimiento"];
const VIAJE_ESTADOS: &[&str] = &["Programado", "En Curso", "Finalizado", "Cancelado"];
const CURRENCIES: &[(&str, &str)] = &[("PYG", "Guaraní"), ("USD", "Dólar")];
const TIPOS_DE_GASTO: &[&str] = &["Combustible", "Peaje", "Mantenimiento"];

/// Días de vigencia de la póliza de ejemplo
const POLIZA_VIGENCIA_DIAS: i64 = 90;

/// Pasos de la siembra, en orden de ejecución
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStep {
    Lookups,
    Fleet,
    Trip,
    Policy,
    Expense,
}

impl SeedStep {
    pub const ALL: [SeedStep; 5] = [
        SeedStep::Lookups,
        SeedStep::Fleet,
        SeedStep::Trip,
        SeedStep::Policy,
        SeedStep::Expense,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SeedStep::Lookups => "lookups",
            SeedStep::Fleet => "fleet",
            SeedStep::Trip => "trip",
            SeedStep::Policy => "policy",
            SeedStep::Expense => "expense",
        }
    }

    async fn apply(
        &self,
        tx: &mut dyn SeedTx,
        clock: &dyn Clock,
        ctx: &mut SeedContext,
    ) -> Result<(), SeedError> {
        match self {
            SeedStep::Lookups => seed_lookups(tx).await,
            SeedStep::Fleet => {
                ctx.chofer_id = ensure_row(tx, sample_chofer()).await?.as_id();
                ctx.camion_dominio = ensure_row(tx, sample_camion()).await?.as_code().map(str::to_string);
                ctx.acoplado_dominio = ensure_row(tx, sample_acoplado()).await?.as_code().map(str::to_string);
                Ok(())
            }
            SeedStep::Trip => {
                let row = SeedRow::Viaje(CreateViajeRequest {
                    origen: "Asunción".to_string(),
                    destino: "Encarnación".to_string(),
                    fecha_inicio: Some(clock.now()),
                    fecha_fin: None,
                    chofer_id: ctx.chofer_id,
                    camion_dominio: ctx.camion_dominio.clone(),
                    acoplado_dominio: ctx.acoplado_dominio.clone(),
                    estado: Some("Programado".to_string()),
                });
                ctx.viaje_id = ensure_row(tx, row).await?.as_id();
                Ok(())
            }
            SeedStep::Policy => {
                if tx.count(Table::Polizas).await? > 0 {
                    return Ok(());
                }
                let camion = ctx
                    .camion_dominio
                    .clone()
                    .ok_or(SeedError::MissingReference(Table::Camiones.name()))?;
                let today = clock.today();
                tx.insert(SeedRow::Poliza(CreatePolizaRequest {
                    aseguradora: "Seguros S.A.".to_string(),
                    asegurado: Some("BLSLogistica S.A.".to_string()),
                    vehiculo_dominio: camion,
                    inicio_vigencia: Some(today),
                    fin_vigencia: Some(today + Duration::days(POLIZA_VIGENCIA_DIAS)),
                }))
                .await?;
                Ok(())
            }
            SeedStep::Expense => {
                if tx.count(Table::Gastos).await? > 0 {
                    return Ok(());
                }
                let viaje_id = ctx.viaje_id.ok_or(SeedError::MissingReference(Table::Viajes.name()))?;
                let tipo_id = first_key(tx, Table::TiposDeGasto)
                    .await?
                    .as_id()
                    .ok_or(SeedError::MissingReference(Table::TiposDeGasto.name()))?;
                let moneda = first_key(tx, Table::Currencies)
                    .await?
                    .as_code()
                    .map(str::to_string)
                    .ok_or(SeedError::MissingReference(Table::Currencies.name()))?;

                tx.insert(SeedRow::Gasto(CreateGastoRequest {
                    monto: 150000.0,
                    fecha: Some(clock.now()),
                    descripcion: Some("Carga de combustible inicial".to_string()),
                    viaje_id,
                    tipo_id,
                    moneda,
                }))
                .await?;
                Ok(())
            }
        }
    }
}

/// Claves producidas por un paso y usadas por los siguientes
#[derive(Debug, Default)]
struct SeedContext {
    chofer_id: Option<i32>,
    camion_dominio: Option<String>,
    acoplado_dominio: Option<String>,
    viaje_id: Option<i32>,
}

/// Borrar todas las tablas y recrear el esquema vacío
pub async fn reset_schema(store: &dyn SeedStore) -> Result<(), SeedError> {
    store.drop_all().await?;
    store.create_all().await?;
    info!("🧱 Esquema recreado");
    Ok(())
}

/// Sembrar datos de ejemplo en las tablas vacías
pub async fn seed(store: &dyn SeedStore, clock: &dyn Clock) -> Result<(), SeedError> {
    let mut ctx = SeedContext::default();

    for step in SeedStep::ALL {
        run_step(store, clock, step, &mut ctx)
            .await
            .map_err(|e| SeedError::Step {
                step: step.name(),
                source: Box::new(e),
            })?;
        debug!("🌱 Paso '{}' confirmado", step.name());
    }

    info!("🌱 Datos de ejemplo sembrados");
    Ok(())
}

/// Reinicio completo: esquema vacío y siembra
pub async fn reset_and_seed(store: &dyn SeedStore, clock: &dyn Clock) -> Result<(), SeedError> {
    reset_schema(store).await?;
    seed(store, clock).await
}

/// Preparar la base al arrancar el servidor
///
/// Con `enabled` en falso no toca nada. Si no se puede crear el esquema el
/// error se devuelve; una siembra incompleta solo se registra, y
/// `/api/reset` puede repararla después.
pub async fn prepare_on_startup(store: &dyn SeedStore, clock: &dyn Clock, enabled: bool) -> Result<(), SeedError> {
    if !enabled {
        debug!("Siembra al arrancar deshabilitada");
        return Ok(());
    }

    store.create_all().await?;
    if let Err(e) = seed(store, clock).await {
        warn!("⚠️ Siembra inicial incompleta: {}", e);
    }
    Ok(())
}

async fn run_step(
    store: &dyn SeedStore,
    clock: &dyn Clock,
    step: SeedStep,
    ctx: &mut SeedContext,
) -> Result<(), SeedError> {
    let mut tx = store.begin().await?;

    match step.apply(tx.as_mut(), clock, ctx).await {
        Ok(()) => tx.commit().await,
        Err(e) => {
            if let Err(rollback_error) = tx.rollback().await {
                warn!("⚠️ Rollback del paso '{}' falló: {}", step.name(), rollback_error);
            }
            Err(e)
        }
    }
}

async fn seed_lookups(tx: &mut dyn SeedTx) -> Result<(), SeedError> {
    let lookups: [(Table, Vec<SeedRow>); 4] = [
        (
            Table::VehiculoEstados,
            VEHICULO_ESTADOS
                .iter()
                .map(|n| SeedRow::VehiculoEstado { nombre: n.to_string() })
                .collect(),
        ),
        (
            Table::ViajeEstados,
            VIAJE_ESTADOS
                .iter()
                .map(|n| SeedRow::ViajeEstado { nombre: n.to_string() })
                .collect(),
        ),
        (
            Table::Currencies,
            CURRENCIES
                .iter()
                .map(|(code, name)| SeedRow::Currency {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        ),
        (
            Table::TiposDeGasto,
            TIPOS_DE_GASTO
                .iter()
                .map(|n| SeedRow::TipoDeGasto { nombre: n.to_string() })
                .collect(),
        ),
    ];

    for (table, rows) in lookups {
        if tx.count(table).await? > 0 {
            continue;
        }
        for row in rows {
            tx.insert(row).await?;
        }
    }
    Ok(())
}

/// Insertar la fila si su tabla está vacía; si no, reutilizar la primera
async fn ensure_row(tx: &mut dyn SeedTx, row: SeedRow) -> Result<RowKey, SeedError> {
    let table = row.table();
    if tx.count(table).await? == 0 {
        tx.insert(row).await
    } else {
        first_key(tx, table).await
    }
}

async fn first_key(tx: &mut dyn SeedTx, table: Table) -> Result<RowKey, SeedError> {
    tx.first_key(table)
        .await?
        .ok_or(SeedError::MissingReference(table.name()))
}

fn sample_chofer() -> SeedRow {
    SeedRow::Chofer(CreateChoferRequest {
        nombre: "Juan".to_string(),
        apellido: "Pérez".to_string(),
        nacionalidad: Some("PY".to_string()),
        identificacion: "12345678".to_string(),
        identificacion_laboral: Some("LAB123".to_string()),
        telefono: Some("+595981234567".to_string()),
        email: Some("juan.perez@example.com".to_string()),
    })
}

fn sample_camion() -> SeedRow {
    SeedRow::Camion(CreateCamionRequest {
        dominio: "ABC123".to_string(),
        marca: Some("Scania".to_string()),
        modelo: "R450".to_string(),
        anio: Some(2022),
        color: Some("Rojo".to_string()),
        tipo: Some("Tractor".to_string()),
        chasis: Some("CH123456".to_string()),
        foto: None,
        estado: "Disponible".to_string(),
    })
}

fn sample_acoplado() -> SeedRow {
    SeedRow::Acoplado(CreateAcopladoRequest {
        dominio: "ACP321".to_string(),
        marca: Some("Schmitz".to_string()),
        modelo: "S1".to_string(),
        anio: Some(2020),
        color: Some("Negro".to_string()),
        tipo: Some("Caja".to_string()),
        chasis: Some("AC123456".to_string()),
        estado: "Disponible".to_string(),
    })
}
