mod common;

use std::time::Duration;

use cargoflow::models::CreateChoferRequest;
use cargoflow::services::reset::{
    prepare_on_startup, reset_and_seed, seed, ResetOutcome, RowKey, SeedError, SeedRow, Table,
};
use chrono::NaiveDate;
use futures::future::join_all;

use common::{coordinator, FixedClock, MemoryStore};

#[tokio::test]
async fn test_seed_twice_creates_no_duplicates() {
    let store = MemoryStore::new();
    let clock = FixedClock::default();

    seed(&store, &clock).await.unwrap();
    seed(&store, &clock).await.unwrap();

    assert_eq!(store.count(Table::VehiculoEstados), 3);
    assert_eq!(store.count(Table::ViajeEstados), 4);
    assert_eq!(store.count(Table::Currencies), 2);
    assert_eq!(store.count(Table::TiposDeGasto), 3);
    for table in [Table::Choferes, Table::Camiones, Table::Acoplados, Table::Viajes, Table::Polizas, Table::Gastos] {
        assert_eq!(store.count(table), 1, "rows in {}", table.name());
    }
}

#[tokio::test]
async fn test_seed_reuses_existing_driver() {
    let store = MemoryStore::new();
    let existing = store
        .insert_committed(SeedRow::Chofer(CreateChoferRequest {
            nombre: "Ana".to_string(),
            apellido: "Benítez".to_string(),
            nacionalidad: None,
            identificacion: "998877".to_string(),
            identificacion_laboral: None,
            telefono: None,
            email: None,
        }))
        .await;

    seed(&store, &FixedClock::default()).await.unwrap();

    assert_eq!(store.count(Table::Choferes), 1);
    let viajes = store.rows(Table::Viajes);
    match &viajes[0].1 {
        SeedRow::Viaje(viaje) => {
            assert_eq!(viaje.chofer_id, existing.as_id());
            assert_eq!(viaje.camion_dominio.as_deref(), Some("ABC123"));
            assert_eq!(viaje.acoplado_dominio.as_deref(), Some("ACP321"));
            assert_eq!(viaje.estado.as_deref(), Some("Programado"));
            assert_eq!(viaje.fecha_fin, None);
        }
        other => panic!("unexpected row {:?}", other),
    }
}

#[tokio::test]
async fn test_policy_window_and_expense_references() {
    let store = MemoryStore::new();
    seed(&store, &FixedClock::default()).await.unwrap();

    match &store.rows(Table::Polizas)[0].1 {
        SeedRow::Poliza(poliza) => {
            assert_eq!(poliza.vehiculo_dominio, "ABC123");
            assert_eq!(poliza.inicio_vigencia, NaiveDate::from_ymd_opt(2026, 3, 14));
            assert_eq!(poliza.fin_vigencia, NaiveDate::from_ymd_opt(2026, 6, 12));
        }
        other => panic!("unexpected row {:?}", other),
    }

    let viaje_key = store.rows(Table::Viajes)[0].0.clone();
    let first_tipo = store.rows(Table::TiposDeGasto)[0].0.clone();
    match &store.rows(Table::Gastos)[0].1 {
        SeedRow::Gasto(gasto) => {
            assert_eq!(gasto.monto, 150000.0);
            assert_eq!(RowKey::Id(gasto.viaje_id), viaje_key);
            assert_eq!(RowKey::Id(gasto.tipo_id), first_tipo);
            // "PYG" < "USD"
            assert_eq!(gasto.moneda, "PYG");
            assert_eq!(gasto.descripcion.as_deref(), Some("Carga de combustible inicial"));
        }
        other => panic!("unexpected row {:?}", other),
    }
}

#[tokio::test]
async fn test_reset_discards_existing_rows() {
    let store = MemoryStore::new();
    let clock = FixedClock::default();
    seed(&store, &clock).await.unwrap();
    store
        .insert_committed(SeedRow::TipoDeGasto {
            nombre: "Viáticos".to_string(),
        })
        .await;
    assert_eq!(store.count(Table::TiposDeGasto), 4);

    reset_and_seed(&store, &clock).await.unwrap();

    assert_eq!(store.count(Table::TiposDeGasto), 3);
    let events = store.events();
    let drop_at = events.iter().position(|e| *e == "drop_all").unwrap();
    assert_eq!(events[drop_at + 1], "create_all");
}

#[tokio::test]
async fn test_failed_step_is_rolled_back_and_named() {
    let store = MemoryStore::new();
    store.fail_on(Table::Polizas);

    let error = seed(&store, &FixedClock::default()).await.unwrap_err();

    assert!(error.to_string().starts_with("seed step 'policy' failed"));
    assert_eq!(store.count(Table::Viajes), 1);
    assert_eq!(store.count(Table::Polizas), 0);
    assert_eq!(store.count(Table::Gastos), 0);
    assert_eq!(store.events().last(), Some(&"rollback"));
}

#[tokio::test]
async fn test_panic_during_seed_is_recorded() {
    let store = MemoryStore::new();
    store.panic_on(Table::Acoplados);
    let reset = coordinator(&store);

    assert_eq!(reset.request_reset().await, ResetOutcome::Accepted);
    reset.drain().await;

    let status = reset.status().await;
    assert!(!status.in_progress);
    assert!(status.finished_at.is_some());
    assert!(status.last_error.is_some());
    assert_eq!(reset.request_reset().await, ResetOutcome::Accepted);
    reset.drain().await;
}

#[tokio::test]
async fn test_concurrent_requests_run_one_procedure_at_a_time() {
    let store = MemoryStore::new().with_ddl_delay(Duration::from_millis(50));
    let reset = coordinator(&store);

    for _ in 0..3 {
        let outcomes = join_all((0..8).map(|_| reset.request_reset())).await;
        let accepted = outcomes.iter().filter(|o| **o == ResetOutcome::Accepted).count();
        assert_eq!(accepted, 1);
        reset.drain().await;
    }

    // Cada procedimiento completo: drop_all, create_all y cinco pasos
    // confirmados, sin intercalarse con otro
    let events = store.events();
    let expected: Vec<&str> = ["drop_all", "create_all"]
        .into_iter()
        .chain(std::iter::repeat(["begin", "commit"]).take(5).flatten())
        .collect();
    assert_eq!(events.len(), expected.len() * 3);
    for chunk in events.chunks(expected.len()) {
        assert_eq!(chunk, expected.as_slice());
    }
    assert!(!reset.status().await.in_progress);
}

#[tokio::test]
async fn test_startup_preparation_disabled_touches_nothing() {
    let store = MemoryStore::new();

    prepare_on_startup(&store, &FixedClock::default(), false).await.unwrap();

    assert!(store.events().is_empty());
    assert_eq!(store.count(Table::Choferes), 0);
}

#[tokio::test]
async fn test_startup_preparation_creates_schema_and_seeds() {
    let store = MemoryStore::new();

    prepare_on_startup(&store, &FixedClock::default(), true).await.unwrap();

    let events = store.events();
    assert_eq!(events.first(), Some(&"create_all"));
    assert!(!events.contains(&"drop_all"));
    assert_eq!(store.count(Table::Gastos), 1);
}

#[tokio::test]
async fn test_startup_preparation_tolerates_incomplete_seed() {
    let store = MemoryStore::new();
    store.fail_on(Table::Viajes);

    prepare_on_startup(&store, &FixedClock::default(), true).await.unwrap();

    assert_eq!(store.count(Table::Choferes), 1);
    assert_eq!(store.count(Table::Viajes), 0);
    assert_eq!(store.count(Table::Gastos), 0);
}

#[tokio::test]
async fn test_startup_preparation_fails_without_schema() {
    let store = MemoryStore::new();
    store.fail_create_all();

    let result = prepare_on_startup(&store, &FixedClock::default(), true).await;

    assert!(matches!(result, Err(SeedError::Backend(_))));
    assert!(!store.events().contains(&"begin"));
}
