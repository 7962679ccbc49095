//! Modelo de Acoplado (semirremolque)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Acoplado principal - mapea exactamente a la tabla acoplados
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Acoplado {
    pub dominio: String,
    pub marca: Option<String>,
    pub modelo: String,
    #[serde(rename = "año")]
    pub anio: Option<i32>,
    pub color: Option<String>,
    pub tipo: Option<String>,
    pub chasis: Option<String>,
    pub estado: String,
}

/// Request para crear un nuevo acoplado
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CreateAcopladoRequest {
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

    #[validate(length(min = 1, max = 50))]
    pub estado: String,
}

/// Request para actualizar un acoplado; el dominio no se modifica
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAcopladoRequest {
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

    #[validate(length(min = 1, max = 50))]
    pub estado: Option<String>,
}

impl UpdateAcopladoRequest {
    pub fn apply_to(self, current: Acoplado) -> Acoplado {
        Acoplado {
            dominio: current.dominio,
            marca: self.marca.or(current.marca),
            modelo: self.modelo.unwrap_or(current.modelo),
            anio: self.anio.or(current.anio),
            color: self.color.or(current.color),
            tipo: self.tipo.or(current.tipo),
            chasis: self.chasis.or(current.chasis),
            estado: self.estado.unwrap_or(current.estado),
        }
    }
}
