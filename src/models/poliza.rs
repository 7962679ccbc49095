//! Modelo de Póliza de seguro
//!
//! `vehiculo_dominio` es la patente de un camión o acoplado, guardada como
//! texto sin clave foránea.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::dates::{deserialize_date_opt, deserialize_date_patch};

/// Póliza principal - mapea exactamente a la tabla polizas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Poliza {
    pub id: i32,
    pub aseguradora: String,
    pub asegurado: Option<String>,
    pub vehiculo_dominio: String,
    pub inicio_vigencia: Option<NaiveDate>,
    pub fin_vigencia: Option<NaiveDate>,
}

/// Request para crear una nueva póliza
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePolizaRequest {
    #[validate(length(min = 1, max = 255))]
    pub aseguradora: String,

    #[validate(length(max = 255))]
    pub asegurado: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub vehiculo_dominio: String,

    #[serde(default, deserialize_with = "deserialize_date_opt")]
    pub inicio_vigencia: Option<NaiveDate>,

    #[serde(default, deserialize_with = "deserialize_date_opt")]
    pub fin_vigencia: Option<NaiveDate>,
}

/// Request para actualizar una póliza
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePolizaRequest {
    #[validate(length(min = 1, max = 255))]
    pub aseguradora: Option<String>,

    #[validate(length(max = 255))]
    pub asegurado: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub vehiculo_dominio: Option<String>,

    #[serde(default, deserialize_with = "deserialize_date_patch")]
    pub inicio_vigencia: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "deserialize_date_patch")]
    pub fin_vigencia: Option<Option<NaiveDate>>,
}

impl UpdatePolizaRequest {
    pub fn apply_to(self, current: Poliza) -> Poliza {
        Poliza {
            id: current.id,
            aseguradora: self.aseguradora.unwrap_or(current.aseguradora),
            asegurado: self.asegurado.or(current.asegurado),
            vehiculo_dominio: self.vehiculo_dominio.unwrap_or(current.vehiculo_dominio),
            inicio_vigencia: self.inicio_vigencia.unwrap_or(current.inicio_vigencia),
            fin_vigencia: self.fin_vigencia.unwrap_or(current.fin_vigencia),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_accept_datetime_strings() {
        let request: CreatePolizaRequest = serde_json::from_str(
            r#"{"aseguradora": "Mapfre", "vehiculoDominio": "ABC123",
                "inicioVigencia": "2026-01-01T00:00:00", "finVigencia": "2026-12-31"}"#,
        )
        .unwrap();
        assert_eq!(request.inicio_vigencia, NaiveDate::from_ymd_opt(2026, 1, 1));
        assert_eq!(request.fin_vigencia, NaiveDate::from_ymd_opt(2026, 12, 31));
    }
}
