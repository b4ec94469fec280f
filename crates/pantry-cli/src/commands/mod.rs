//! CLI command implementations

pub(crate) mod clean;
pub(crate) mod create;
pub(crate) mod migrate_create;
pub(crate) mod migrate_debug;
pub(crate) mod migrate_down;
pub(crate) mod migrate_status;
pub(crate) mod migrate_up;
pub(crate) mod reset;
pub(crate) mod seed;
pub(crate) mod setup;
