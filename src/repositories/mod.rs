pub mod acoplado_repository;
pub mod camion_repository;
pub mod chofer_repository;
pub mod gasto_repository;
pub mod lookup_repository;
pub mod poliza_repository;
pub mod viaje_repository;
