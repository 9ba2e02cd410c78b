// The process-wide settings live in a OnceLock, so this file holds a
// single test that walks through the whole lifecycle in order.

mod common;

use std::fs;

use common::metadata_fixture;
use wc_plugin_settings::services::{global, init_global};
use wc_plugin_settings::MetadataConfig;

#[test]
fn test_global_settings_lifecycle() {
    assert!(global().is_none());

    // A failed load installs nothing
    let missing = MetadataConfig::in_dir("/nonexistent/wc-plugin-metadata");
    assert!(init_global(&missing).is_err());
    assert!(global().is_none());

    let (dir, config) = metadata_fixture();
    let installed = init_global(&config).unwrap();
    assert_eq!(installed.contract_name(), "WorkingCapital");

    // Later calls return the installed settings without reloading
    fs::remove_file(config.build_path()).unwrap();
    let again = init_global(&config).unwrap();
    assert!(std::ptr::eq(installed, again));

    let from_global = global().unwrap();
    assert!(std::ptr::eq(installed, from_global));
    assert_eq!(from_global.version(), installed.version());

    drop(dir);
}
