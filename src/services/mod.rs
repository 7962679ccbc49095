//! Services module
//!
//! Lógica de negocio que involucra varias tablas o trabajo en segundo plano.

pub mod reset;
