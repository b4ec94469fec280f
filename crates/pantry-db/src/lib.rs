//! pantry-db - Database access layer for pantry
//!
//! Everything here reaches the database through an external psql process:
//! the [`CommandExecutor`] seam runs the process, [`PsqlClient`] builds
//! the invocations, and [`Ledger`] keeps the applied-migration table.

pub mod client;
pub mod error;
pub mod executor;
pub mod ledger;
pub mod testing;

pub use client::{quote_literal, PsqlClient, PSQL_PROGRAM};
pub use error::{DbError, DbResult};
pub use executor::{CommandExecutor, CommandOutput, ProcessExecutor};
pub use ledger::{Ledger, LEDGER_TABLE};
