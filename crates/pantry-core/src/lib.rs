//! pantry-core - Core library for pantry
//!
//! Shared types, configuration resolution, and the migration file store
//! used across all pantry components.

pub mod config;
pub mod error;
pub mod migration;
pub mod store;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use migration::{Direction, MigrationFile};
pub use store::{slugify, MigrationStore};
