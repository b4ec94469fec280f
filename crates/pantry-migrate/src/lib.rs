//! pantry-migrate - Migration runner and diagnostics for pantry
//!
//! The runner sequences UP/DOWN execution and ledger bookkeeping; the
//! status module reports applied/pending state and orphaned records.

pub mod error;
pub mod runner;
pub mod status;

pub use error::{MigrateError, MigrateResult};
pub use runner::Runner;
pub use status::{debug, status, DebugReport, MigrationState, StatusReport};
