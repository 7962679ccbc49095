//! Modelo de Viaje
//!
//! Un viaje referencia a un chofer, un camión y un acoplado. `fechaFin`
//! vacía se guarda como NULL (viaje en curso).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::dates::{deserialize_datetime_opt, deserialize_datetime_patch};

/// Viaje principal - mapea exactamente a la tabla viajes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Viaje {
    pub id: i32,
    pub origen: String,
    pub destino: String,
    pub fecha_inicio: Option<NaiveDateTime>,
    pub fecha_fin: Option<NaiveDateTime>,
    pub chofer_id: Option<i32>,
    pub camion_dominio: Option<String>,
    pub acoplado_dominio: Option<String>,
    pub estado: Option<String>,
}

/// Request para crear un nuevo viaje
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateViajeRequest {
    #[validate(length(min = 1, max = 255))]
    pub origen: String,

    #[validate(length(min = 1, max = 255))]
    pub destino: String,

    #[serde(default, deserialize_with = "deserialize_datetime_opt")]
    pub fecha_inicio: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "deserialize_datetime_opt")]
    pub fecha_fin: Option<NaiveDateTime>,

    pub chofer_id: Option<i32>,

    #[validate(length(max = 20))]
    pub camion_dominio: Option<String>,

    #[validate(length(max = 20))]
    pub acoplado_dominio: Option<String>,

    #[validate(length(max = 50))]
    pub estado: Option<String>,
}

/// Request para actualizar un viaje
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateViajeRequest {
    #[validate(length(min = 1, max = 255))]
    pub origen: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub destino: Option<String>,

    #[serde(default, deserialize_with = "deserialize_datetime_opt")]
    pub fecha_inicio: Option<NaiveDateTime>,

    /// Ausente: sin cambios. Vacío o null: el viaje vuelve a quedar abierto.
    #[serde(default, deserialize_with = "deserialize_datetime_patch")]
    pub fecha_fin: Option<Option<NaiveDateTime>>,

    pub chofer_id: Option<i32>,

    #[validate(length(max = 20))]
    pub camion_dominio: Option<String>,

    #[validate(length(max = 20))]
    pub acoplado_dominio: Option<String>,

    #[validate(length(max = 50))]
    pub estado: Option<String>,
}

impl UpdateViajeRequest {
    pub fn apply_to(self, current: Viaje) -> Viaje {
        Viaje {
            id: current.id,
            origen: self.origen.unwrap_or(current.origen),
            destino: self.destino.unwrap_or(current.destino),
            fecha_inicio: self.fecha_inicio.or(current.fecha_inicio),
            fecha_fin: self.fecha_fin.unwrap_or(current.fecha_fin),
            chofer_id: self.chofer_id.or(current.chofer_id),
            camion_dominio: self.camion_dominio.or(current.camion_dominio),
            acoplado_dominio: self.acoplado_dominio.or(current.acoplado_dominio),
            estado: self.estado.or(current.estado),
        }
    }
}
