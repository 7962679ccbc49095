//! Tablas de referencia
//!
//! Estados de vehículo y de viaje, monedas y tipos de gasto. Son tablas
//! pequeñas que el resto del esquema referencia por id o código.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Estado de vehículo (Disponible, En Viaje, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct VehiculoEstado {
    pub id: i32,
    pub nombre: String,
}

/// Estado de viaje (Programado, En Curso, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ViajeEstado {
    pub id: i32,
    pub nombre: String,
}

/// Moneda identificada por su código ISO de tres letras
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TipoDeGasto {
    pub id: i32,
    pub nombre: String,
}

/// Request para crear un tipo de gasto
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CreateTipoDeGastoRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
}
