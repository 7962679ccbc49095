//! Tests contra una base PostgreSQL real
//!
//! Marcados `#[ignore]`: se ejecutan con
//! `CARGOFLOW_TEST_DATABASE_URL=postgres://... cargo test -- --ignored`.
//! Cada test borra y vuelve a sembrar el esquema, así que usar una base
//! descartable.

mod common;

use std::sync::{Arc, OnceLock};

use axum::http::StatusCode;
use axum::Router;
use cargoflow::config::EnvironmentConfig;
use cargoflow::models::CreateChoferRequest;
use cargoflow::services::reset::{
    reset_and_seed, seed, PgSeedStore, ResetCoordinator, RowKey, SeedRow, SeedStore, Table,
};
use cargoflow::{create_app_router, AppState};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::{Mutex, MutexGuard};

use common::{body_json, delete, get, post_empty, post_json, put_json, send, FixedClock};

const DATABASE_URL_VAR: &str = "CARGOFLOW_TEST_DATABASE_URL";

/// Los tests comparten la misma base y no pueden solaparse
static DB_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const ALL_TABLES: [Table; 10] = [
    Table::VehiculoEstados,
    Table::ViajeEstados,
    Table::Currencies,
    Table::TiposDeGasto,
    Table::Choferes,
    Table::Camiones,
    Table::Acoplados,
    Table::Viajes,
    Table::Polizas,
    Table::Gastos,
];

const SEEDED_COUNTS: [i64; 10] = [3, 4, 2, 3, 1, 1, 1, 1, 1, 1];

struct TestDb {
    app: Router,
    pool: PgPool,
    store: PgSeedStore,
    reset: ResetCoordinator,
    _guard: MutexGuard<'static, ()>,
}

impl TestDb {
    /// Base recién reiniciada y sembrada, o `None` si no hay base configurada
    async fn fresh() -> Option<Self> {
        let Ok(url) = std::env::var(DATABASE_URL_VAR) else {
            eprintln!("{} no está definida, test omitido", DATABASE_URL_VAR);
            return None;
        };

        let guard = DB_LOCK.get_or_init(|| Mutex::new(())).lock().await;
        let pool = PgPoolOptions::new().max_connections(5).connect(&url).await.unwrap();
        let store = PgSeedStore::new(pool.clone());
        reset_and_seed(&store, &FixedClock::default()).await.unwrap();

        let reset = ResetCoordinator::new(Arc::new(store.clone()), Arc::new(FixedClock::default()));
        let app = create_app_router(AppState::new(pool.clone(), EnvironmentConfig::default(), reset.clone()));

        Some(Self {
            app,
            pool,
            store,
            reset,
            _guard: guard,
        })
    }

    async fn counts(&self) -> Vec<i64> {
        let mut tx = self.store.begin().await.unwrap();
        let mut counts = Vec::new();
        for table in ALL_TABLES {
            counts.push(tx.count(table).await.unwrap());
        }
        tx.rollback().await.unwrap();
        counts
    }

    async fn list(&self, uri: &str) -> Vec<Value> {
        let response = send(&self.app, get(uri)).await;
        assert_eq!(response.status(), StatusCode::OK);
        match body_json(response).await {
            Value::Array(items) => items,
            other => panic!("expected a list from {}, got {}", uri, other),
        }
    }

    async fn create(&self, uri: &str, body: Value) -> Value {
        let response = send(&self.app, post_json(uri, &body.to_string())).await;
        assert_eq!(response.status(), StatusCode::CREATED, "POST {}", uri);
        body_json(response).await
    }
}

fn extra_chofer(identificacion: &str) -> SeedRow {
    SeedRow::Chofer(CreateChoferRequest {
        nombre: "Carlos".to_string(),
        apellido: "Giménez".to_string(),
        nacionalidad: None,
        identificacion: identificacion.to_string(),
        identificacion_laboral: None,
        telefono: None,
        email: None,
    })
}

#[tokio::test]
#[ignore]
async fn test_reset_then_seed_again_keeps_expected_counts() {
    let Some(db) = TestDb::fresh().await else { return };

    assert_eq!(db.counts().await, SEEDED_COUNTS);

    seed(&db.store, &FixedClock::default()).await.unwrap();
    assert_eq!(db.counts().await, SEEDED_COUNTS);

    let gasto = &db.list("/api/gastos").await[0];
    assert_eq!(gasto["moneda"], "PYG");
    assert_eq!(gasto["viajeId"], 1);
    assert_eq!(gasto["tipoId"], 1);
    assert_eq!(gasto["monto"], 150000.0);

    let poliza = &db.list("/api/polizas").await[0];
    assert_eq!(poliza["vehiculoDominio"], "ABC123");
    assert_eq!(poliza["inicioVigencia"], "2026-03-14");
    assert_eq!(poliza["finVigencia"], "2026-06-12");
}

#[tokio::test]
#[ignore]
async fn test_first_key_is_lowest_key() {
    let Some(db) = TestDb::fresh().await else { return };

    db.create(
        "/api/choferes",
        json!({"nombre": "Ana", "apellido": "Benítez", "identificacion": "000001"}),
    )
    .await;

    let mut tx = db.store.begin().await.unwrap();
    tx.insert(SeedRow::Currency {
        code: "ARS".to_string(),
        name: "Peso argentino".to_string(),
    })
    .await
    .unwrap();
    assert_eq!(tx.first_key(Table::Choferes).await.unwrap(), Some(RowKey::Id(1)));
    assert_eq!(
        tx.first_key(Table::Currencies).await.unwrap(),
        Some(RowKey::Code("ARS".to_string()))
    );
    assert_eq!(
        tx.first_key(Table::Camiones).await.unwrap(),
        Some(RowKey::Code("ABC123".to_string()))
    );
    tx.rollback().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_transaction_commit_and_rollback() {
    let Some(db) = TestDb::fresh().await else { return };

    let mut tx = db.store.begin().await.unwrap();
    tx.insert(extra_chofer("555001")).await.unwrap();
    assert_eq!(tx.count(Table::Choferes).await.unwrap(), 2);
    tx.rollback().await.unwrap();
    assert_eq!(db.list("/api/choferes").await.len(), 1);

    let mut tx = db.store.begin().await.unwrap();
    let key = tx.insert(extra_chofer("555002")).await.unwrap();
    tx.commit().await.unwrap();
    assert!(matches!(key, RowKey::Id(id) if id > 1));
    assert_eq!(db.list("/api/choferes").await.len(), 2);
}

#[tokio::test]
#[ignore]
async fn test_reset_endpoint_restores_seed_data() {
    let Some(db) = TestDb::fresh().await else { return };

    db.create(
        "/api/choferes",
        json!({"nombre": "Ana", "apellido": "Benítez", "identificacion": "000001"}),
    )
    .await;

    let response = send(&db.app, post_empty("/api/reset")).await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    db.reset.drain().await;

    let status = body_json(send(&db.app, get("/api/reset/status")).await).await;
    assert_eq!(status["in_progress"], false);
    assert_eq!(status["last_error"], Value::Null);
    assert_eq!(db.counts().await, SEEDED_COUNTS);
}

#[tokio::test]
#[ignore]
async fn test_unknown_ids_return_not_found() {
    let Some(db) = TestDb::fresh().await else { return };

    let requests = [
        get("/api/choferes/999"),
        get("/api/camiones/NOEXISTE"),
        put_json("/api/viajes/999", r#"{"destino": "Ciudad del Este"}"#),
        delete("/api/polizas/999"),
        delete("/api/gastos/999"),
        delete("/api/acoplados/NOEXISTE"),
    ];
    for request in requests {
        let uri = request.uri().to_string();
        let response = send(&db.app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body_json(response).await["code"], "NOT_FOUND", "{}", uri);
    }
}

#[tokio::test]
#[ignore]
async fn test_constraint_violations_return_conflict() {
    let Some(db) = TestDb::fresh().await else { return };

    let requests = [
        // identificacion duplicada
        post_json(
            "/api/choferes",
            r#"{"nombre": "Otro", "apellido": "Pérez", "identificacion": "12345678"}"#,
        ),
        // dominio duplicado
        post_json("/api/camiones", r#"{"dominio": "ABC123", "modelo": "FH", "estado": "Disponible"}"#),
        // chofer referenciado por el viaje sembrado
        delete("/api/choferes/1"),
        // viaje inexistente
        post_json(
            "/api/gastos",
            r#"{"monto": 10.0, "viajeId": 999, "tipoId": 1, "moneda": "PYG"}"#,
        ),
    ];
    for request in requests {
        let uri = format!("{} {}", request.method(), request.uri());
        let response = send(&db.app, request).await;
        assert_eq!(response.status(), StatusCode::CONFLICT, "{}", uri);
        assert_eq!(body_json(response).await["code"], "CONFLICT", "{}", uri);
    }

    assert_eq!(db.counts().await, SEEDED_COUNTS);
}

#[tokio::test]
#[ignore]
async fn test_delete_returns_message_and_removes_row() {
    let Some(db) = TestDb::fresh().await else { return };

    let viaje = db
        .create("/api/viajes", json!({"origen": "Asunción", "destino": "Pilar", "choferId": 1}))
        .await;
    let uri = format!("/api/viajes/{}", viaje["id"]);

    let response = send(&db.app, delete(&uri)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": "Viaje eliminado"}));
    assert_eq!(send(&db.app, get(&uri)).await.status(), StatusCode::NOT_FOUND);

    let chofer = db
        .create(
            "/api/choferes",
            json!({"nombre": "Ana", "apellido": "Benítez", "identificacion": "000001"}),
        )
        .await;
    let response = send(&db.app, delete(&format!("/api/choferes/{}", chofer["id"]))).await;
    assert_eq!(body_json(response).await, json!({"message": "Chofer eliminado"}));
}

#[tokio::test]
#[ignore]
async fn test_lists_follow_date_ordering() {
    let Some(db) = TestDb::fresh().await else { return };

    db.create(
        "/api/viajes",
        json!({"origen": "A", "destino": "B", "fechaInicio": "2020-01-01T08:00:00"}),
    )
    .await;
    db.create(
        "/api/viajes",
        json!({"origen": "C", "destino": "D", "fechaInicio": "2030-01-01T08:00:00"}),
    )
    .await;
    db.create("/api/viajes", json!({"origen": "E", "destino": "F"})).await;

    let fechas: Vec<Value> = db
        .list("/api/viajes")
        .await
        .into_iter()
        .map(|v| v["fechaInicio"].clone())
        .collect();
    assert_eq!(
        fechas,
        vec![
            json!("2030-01-01T08:00:00"),
            json!("2026-03-14T10:30:00"),
            json!("2020-01-01T08:00:00"),
            Value::Null,
        ]
    );

    db.create(
        "/api/polizas",
        json!({"aseguradora": "Mapfre", "vehiculoDominio": "ACP321", "finVigencia": "2026-04-01"}),
    )
    .await;
    db.create("/api/polizas", json!({"aseguradora": "Sancor", "vehiculoDominio": "ABC123"}))
        .await;

    let vencimientos: Vec<Value> = db
        .list("/api/polizas")
        .await
        .into_iter()
        .map(|p| p["finVigencia"].clone())
        .collect();
    assert_eq!(vencimientos, vec![json!("2026-04-01"), json!("2026-06-12"), Value::Null]);
}

#[tokio::test]
#[ignore]
async fn test_unparseable_expense_date_is_stored_as_null() {
    let Some(db) = TestDb::fresh().await else { return };

    let gasto = db
        .create(
            "/api/gastos",
            json!({"monto": 5000.0, "fecha": "ayer", "viajeId": 1, "tipoId": 2, "moneda": "USD"}),
        )
        .await;
    assert_eq!(gasto["fecha"], Value::Null);

    let (stored,): (Option<chrono::NaiveDateTime>,) = sqlx::query_as("SELECT fecha FROM gastos WHERE id = $1")
        .bind(gasto["id"].as_i64().unwrap() as i32)
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(stored, None);

    // Sin fecha, el gasto queda al final de la lista
    let ids: Vec<Value> = db.list("/api/gastos").await.into_iter().map(|g| g["id"].clone()).collect();
    assert_eq!(ids.last(), Some(&gasto["id"]));
}
