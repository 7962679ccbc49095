//! Modelo de Chofer
//!
//! Mapea la tabla `choferes`. Los nombres de campo se exponen en camelCase
//! para el frontend (`identificacionLaboral`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Chofer principal - mapea exactamente a la tabla choferes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Chofer {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub nacionalidad: Option<String>,
    pub identificacion: String,
    pub identificacion_laboral: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

/// Request para crear un nuevo chofer
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateChoferRequest {
    #[validate(length(min = 1, max = 255))]
    pub nombre: String,

    #[validate(length(min = 1, max = 255))]
    pub apellido: String,

    #[validate(length(max = 100))]
    pub nacionalidad: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub identificacion: String,

    #[validate(length(max = 100))]
    pub identificacion_laboral: Option<String>,

    #[validate(length(max = 50))]
    pub telefono: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
}

/// Request para actualizar un chofer existente; solo se aplican los campos presentes
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChoferRequest {
    #[validate(length(min = 1, max = 255))]
    pub nombre: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub apellido: Option<String>,

    #[validate(length(max = 100))]
    pub nacionalidad: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub identificacion: Option<String>,

    #[validate(length(max = 100))]
    pub identificacion_laboral: Option<String>,

    #[validate(length(max = 50))]
    pub telefono: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
}

impl UpdateChoferRequest {
    /// Combina los cambios con el registro actual
    pub fn apply_to(self, current: Chofer) -> Chofer {
        Chofer {
            id: current.id,
            nombre: self.nombre.unwrap_or(current.nombre),
            apellido: self.apellido.unwrap_or(current.apellido),
            nacionalidad: self.nacionalidad.or(current.nacionalidad),
            identificacion: self.identificacion.unwrap_or(current.identificacion),
            identificacion_laboral: self.identificacion_laboral.or(current.identificacion_laboral),
            telefono: self.telefono.or(current.telefono),
            email: self.email.or(current.email),
        }
    }
}
