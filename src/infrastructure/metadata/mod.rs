//! Metadata document loading
//!
//! Reads the build and release metadata JSON files from disk:
//! - Fail fast on a missing or malformed document
//! - Blocking and tokio-based variants with identical semantics

pub mod loader;

pub use loader::MetadataLoader;
