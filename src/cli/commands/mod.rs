//! CLI command implementations.

pub mod check_update;
pub mod metadata;
pub mod show;
pub mod version;
