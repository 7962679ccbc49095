pub mod acoplado_controller;
pub mod camion_controller;
pub mod chofer_controller;
pub mod gasto_controller;
pub mod lookup_controller;
pub mod poliza_controller;
pub mod viaje_controller;
