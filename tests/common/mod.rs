//! Common test utilities for integration tests
//!
//! Provides metadata fixtures shared across integration test files.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use wc_plugin_settings::MetadataConfig;

/// Build metadata document used by the fixtures
pub fn build_document() -> Value {
    json!({
        "ui": {},
        "change": "Initial build.",
        "pluginSetup": {
            "prepareInstallation": {
                "description": "Installation inputs",
                "inputs": [{"name": "manager", "type": "address"}]
            },
            "prepareUpdate": {},
            "prepareUninstallation": {"description": "", "inputs": []}
        }
    })
}

/// Release metadata document used by the fixtures
pub fn release_document() -> Value {
    json!({
        "name": "WorkingCapital",
        "description": "Working capital plugin",
        "images": {}
    })
}

/// Write both fixture documents into a fresh temporary directory
///
/// Returns the TempDir (dropped = cleaned up) and a config pointing at it.
pub fn metadata_fixture() -> (TempDir, MetadataConfig) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = MetadataConfig::in_dir(dir.path());
    write_json(&config.build_path(), &build_document());
    write_json(&config.release_path(), &release_document());
    (dir, config)
}

fn write_json(path: &std::path::Path, value: &Value) {
    let content = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
    fs::write(path, content).expect("Failed to write fixture");
}

/// Metadata directory shipped with the crate
pub fn bundled_metadata() -> MetadataConfig {
    MetadataConfig::in_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/metadata"))
}
