//! DDL del esquema de CargoFlow
//!
//! Las tablas se crean en orden de dependencias (las referenciadas primero)
//! y se eliminan en orden inverso.

use sqlx::PgPool;
use tracing::debug;

/// Sentencias `CREATE TABLE` en orden de dependencias
const CREATE_TABLES: &[(&str, &str)] = &[
    (
        "choferes",
        r#"
        CREATE TABLE IF NOT EXISTS choferes (
            id SERIAL PRIMARY KEY,
            nombre VARCHAR(255) NOT NULL,
            apellido VARCHAR(255) NOT NULL,
            nacionalidad VARCHAR(100),
            identificacion VARCHAR(100) NOT NULL UNIQUE,
            identificacion_laboral VARCHAR(100),
            telefono VARCHAR(50),
            email VARCHAR(255)
        )
        "#,
    ),
    (
        "vehiculo_estados",
        r#"
        CREATE TABLE IF NOT EXISTS vehiculo_estados (
            id SERIAL PRIMARY KEY,
            nombre VARCHAR(50) NOT NULL UNIQUE
        )
        "#,
    ),
    (
        "viaje_estados",
        r#"
        CREATE TABLE IF NOT EXISTS viaje_estados (
            id SERIAL PRIMARY KEY,
            nombre VARCHAR(50) NOT NULL UNIQUE
        )
        "#,
    ),
    (
        "camiones",
        r#"
        CREATE TABLE IF NOT EXISTS camiones (
            dominio VARCHAR(20) PRIMARY KEY,
            marca VARCHAR(100),
            modelo VARCHAR(100) NOT NULL,
            anio INTEGER,
            color VARCHAR(50),
            tipo VARCHAR(100),
            chasis VARCHAR(100) UNIQUE,
            foto TEXT,
            estado VARCHAR(50) NOT NULL
        )
        "#,
    ),
    (
        "acoplados",
        r#"
        CREATE TABLE IF NOT EXISTS acoplados (
            dominio VARCHAR(20) PRIMARY KEY,
            marca VARCHAR(100),
            modelo VARCHAR(100) NOT NULL,
            anio INTEGER,
            color VARCHAR(50),
            tipo VARCHAR(100),
            chasis VARCHAR(100) UNIQUE,
            estado VARCHAR(50) NOT NULL
        )
        "#,
    ),
    (
        "viajes",
        r#"
        CREATE TABLE IF NOT EXISTS viajes (
            id SERIAL PRIMARY KEY,
            origen VARCHAR(255) NOT NULL,
            destino VARCHAR(255) NOT NULL,
            fecha_inicio TIMESTAMP,
            fecha_fin TIMESTAMP,
            chofer_id INTEGER REFERENCES choferes(id),
            camion_dominio VARCHAR(20) REFERENCES camiones(dominio),
            acoplado_dominio VARCHAR(20) REFERENCES acoplados(dominio),
            estado VARCHAR(50)
        )
        "#,
    ),
    (
        "polizas",
        r#"
        CREATE TABLE IF NOT EXISTS polizas (
            id SERIAL PRIMARY KEY,
            aseguradora VARCHAR(255) NOT NULL,
            asegurado VARCHAR(255),
            vehiculo_dominio VARCHAR(20) NOT NULL,
            inicio_vigencia DATE,
            fin_vigencia DATE
        )
        "#,
    ),
    (
        "currencies",
        r#"
        CREATE TABLE IF NOT EXISTS currencies (
            code VARCHAR(3) PRIMARY KEY,
            name VARCHAR(50) NOT NULL
        )
        "#,
    ),
    (
        "tipos_de_gasto",
        r#"
        CREATE TABLE IF NOT EXISTS tipos_de_gasto (
            id SERIAL PRIMARY KEY,
            nombre VARCHAR(100) NOT NULL UNIQUE
        )
        "#,
    ),
    (
        "gastos",
        r#"
        CREATE TABLE IF NOT EXISTS gastos (
            id SERIAL PRIMARY KEY,
            monto DOUBLE PRECISION NOT NULL,
            fecha TIMESTAMP,
            descripcion TEXT,
            viaje_id INTEGER NOT NULL REFERENCES viajes(id),
            tipo_id INTEGER NOT NULL REFERENCES tipos_de_gasto(id),
            moneda VARCHAR(3) NOT NULL REFERENCES currencies(code)
        )
        "#,
    ),
];

/// Nombres de las tablas en orden de creación
pub fn table_names() -> impl DoubleEndedIterator<Item = &'static str> {
    CREATE_TABLES.iter().map(|(name, _)| *name)
}

/// Crear todas las tablas que no existan
pub async fn create_all(pool: &PgPool) -> Result<(), sqlx::Error> {
    for (name, ddl) in CREATE_TABLES {
        debug!("🧱 CREATE TABLE {}", name);
        sqlx::query(*ddl).execute(pool).await?;
    }
    Ok(())
}

/// Eliminar todas las tablas, dependientes primero
pub async fn drop_all(pool: &PgPool) -> Result<(), sqlx::Error> {
    for name in table_names().rev() {
        debug!("🗑️ DROP TABLE {}", name);
        sqlx::query(&format!("DROP TABLE IF EXISTS {} CASCADE", name))
            .execute(pool)
            .await?;
    }
    Ok(())
}
