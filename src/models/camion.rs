//! Modelo de Camión
//!
//! Mapea la tabla `camiones`, cuya clave primaria es el dominio (patente).
//! El año de fabricación se guarda como `anio` y se expone como `año`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Camión principal - mapea exactamente a la tabla camiones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Camion {
    pub dominio: String,
    pub marca: Option<String>,
    pub modelo: String,
    #[serde(rename = "año")]
    pub anio: Option<i32>,
    pub color: Option<String>,
    pub tipo: Option<String>,
    pub chasis: Option<String>,
    pub foto: Option<String>,
    pub estado: String,
}

/// Request para crear un nuevo camión
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CreateCamionRequest {
    #[validate(length(min = 1, max = 20))]
    pub dominio: String,

    #[validate(length(max = 100))]
    pub marca: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub modelo: String,

    #[serde(rename = "año")]
    #[validate(range(min = 1900, max = 2100))]
    pub anio: Option<i32>,

    #[validate(length(max = 50))]
    pub color: Option<String>,

    #[validate(length(max = 100))]
    pub tipo: Option<String>,

    #[validate(length(max = 100))]
    pub chasis: Option<String>,

    pub foto: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub estado: String,
}

/// Request para actualizar un camión; el dominio no se modifica
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCamionRequest {
    #[validate(length(max = 100))]
    pub marca: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub modelo: Option<String>,

    #[serde(rename = "año")]
    #[validate(range(min = 1900, max = 2100))]
    pub anio: Option<i32>,

    #[validate(length(max = 50))]
    pub color: Option<String>,

    #[validate(length(max = 100))]
    pub tipo: Option<String>,

    #[validate(length(max = 100))]
    pub chasis: Option<String>,

    pub foto: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub estado: Option<String>,
}

impl UpdateCamionRequest {
    /// Combina los cambios con el registro actual
    pub fn apply_to(self, current: Camion) -> Camion {
        Camion {
            dominio: current.dominio,
            marca: self.marca.or(current.marca),
            modelo: self.modelo.unwrap_or(current.modelo),
            anio: self.anio.or(current.anio),
            color: self.color.or(current.color),
            tipo: self.tipo.or(current.tipo),
            chasis: self.chasis.or(current.chasis),
            foto: self.foto.or(current.foto),
            estado: self.estado.unwrap_or(current.estado),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_field_name() {
        let request: CreateCamionRequest = serde_json::from_str(
            r#"{"dominio": "XYZ987", "modelo": "FH 540", "año": 2019, "estado": "Disponible"}"#,
        )
        .unwrap();
        assert_eq!(request.anio, Some(2019));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_year_out_of_range() {
        let request: CreateCamionRequest = serde_json::from_str(
            r#"{"dominio": "XYZ987", "modelo": "FH 540", "año": 1850, "estado": "Disponible"}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }
}
