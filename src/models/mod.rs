//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL, junto con los requests de creación y actualización.

pub mod acoplado;
pub mod camion;
pub mod chofer;
pub mod gasto;
pub mod lookup;
pub mod poliza;
pub mod viaje;

pub use acoplado::*;
pub use camion::*;
pub use chofer::*;
pub use gasto::*;
pub use lookup::*;
pub use poliza::*;
pub use viaje::*;
