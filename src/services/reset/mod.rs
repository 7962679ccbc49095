//! Reinicio y siembra de la base de datos

pub mod coordinator;
pub mod pg_store;
pub mod seed;
pub mod status;
pub mod store;

pub use coordinator::ResetCoordinator;
pub use pg_store::PgSeedStore;
pub use seed::{prepare_on_startup, reset_and_seed, reset_schema, seed, SeedStep};
pub use status::{Clock, ResetOutcome, ResetStatus, SystemClock};
pub use store::{RowKey, SeedError, SeedRow, SeedStore, SeedTx, Table};
