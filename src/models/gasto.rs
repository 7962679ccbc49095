//! Modelo de Gasto
//!
//! Gasto asociado a un viaje, con tipo y moneda. Una `fecha` que no se puede
//! interpretar se guarda como NULL en lugar de rechazar el gasto.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::dates::{deserialize_datetime_lenient, deserialize_datetime_patch_lenient};

/// Gasto principal - mapea exactamente a la tabla gastos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Gasto {
    pub id: i32,
    pub monto: f64,
    pub fecha: Option<NaiveDateTime>,
    pub descripcion: Option<String>,
    pub viaje_id: i32,
    pub tipo_id: i32,
    pub moneda: String,
}

/// Request para crear un nuevo gasto
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGastoRequest {
    #[validate(range(min = 0.0))]
    pub monto: f64,

    #[serde(default, deserialize_with = "deserialize_datetime_lenient")]
    pub fecha: Option<NaiveDateTime>,

    pub descripcion: Option<String>,

    pub viaje_id: i32,

    pub tipo_id: i32,

    #[validate(length(equal = 3))]
    pub moneda: String,
}

/// Request para actualizar un gasto
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGastoRequest {
    #[validate(range(min = 0.0))]
    pub monto: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_datetime_patch_lenient")]
    pub fecha: Option<Option<NaiveDateTime>>,

    pub descripcion: Option<String>,

    pub viaje_id: Option<i32>,

    pub tipo_id: Option<i32>,

    #[validate(length(equal = 3))]
    pub moneda: Option<String>,
}

impl UpdateGastoRequest {
    pub fn apply_to(self, current: Gasto) -> Gasto {
        Gasto {
            id: current.id,
            monto: self.monto.unwrap_or(current.monto),
            fecha: self.fecha.unwrap_or(current.fecha),
            descripcion: self.descripcion.or(current.descripcion),
            viaje_id: self.viaje_id.unwrap_or(current.viaje_id),
            tipo_id: self.tipo_id.unwrap_or(current.tipo_id),
            moneda: self.moneda.unwrap_or(current.moneda),
        }
    }
}
