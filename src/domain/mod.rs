//! Domain layer for the plugin settings provider
//!
//! This module contains the plugin identity, version policy and the
//! metadata model, free of any I/O.

pub mod error;
pub mod models;

// Re-export error types for convenient access
pub use error::LoadError;
