//! Infrastructure layer module
//!
//! This module contains the adapters that touch the outside world:
//! - Metadata document loading from disk
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;
pub mod metadata;
