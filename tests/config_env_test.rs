// ConfigLoader::load reads project files relative to the working
// directory; these tests run from the crate root, which has none, so only
// defaults and environment variables apply.

use std::path::PathBuf;
use wc_plugin_settings::ConfigLoader;

#[test]
fn test_load_defaults() {
    temp_env::with_vars_unset(
        [
            "WC_PLUGIN_METADATA__DIR",
            "WC_PLUGIN_LOGGING__LEVEL",
            "WC_PLUGIN_LOGGING__LOG_DIR",
        ],
        || {
            let config = ConfigLoader::load().unwrap();
            assert_eq!(config.metadata.dir, PathBuf::from("metadata"));
            assert_eq!(config.logging.level, "info");
            assert!(config.logging.log_dir.is_none());
        },
    );
}

#[test]
fn test_env_override() {
    temp_env::with_vars(
        [
            ("WC_PLUGIN_METADATA__DIR", Some("/srv/plugin/src")),
            ("WC_PLUGIN_METADATA__BUILD_FILE", Some("build.json")),
            ("WC_PLUGIN_LOGGING__LEVEL", Some("debug")),
        ],
        || {
            let config = ConfigLoader::load().unwrap();
            assert_eq!(config.metadata.dir, PathBuf::from("/srv/plugin/src"));
            assert_eq!(config.metadata.build_file, "build.json");
            assert_eq!(config.metadata.release_file, "release-metadata.json");
            assert_eq!(config.logging.level, "debug");
        },
    );
}

#[test]
fn test_env_override_is_validated() {
    temp_env::with_var("WC_PLUGIN_LOGGING__FORMAT", Some("xml"), || {
        let err = ConfigLoader::load().unwrap_err();
        assert!(err.to_string().contains("Invalid log format"));
    });
}

#[test]
fn test_env_enables_file_logging() {
    use wc_plugin_settings::infrastructure::logging::{LogConfig, RotationPolicy};

    temp_env::with_vars(
        [
            ("WC_PLUGIN_LOGGING__LOG_DIR", Some("/var/log/wc-plugin")),
            ("WC_PLUGIN_LOGGING__ROTATION", Some("hourly")),
        ],
        || {
            let config = ConfigLoader::load().unwrap();
            assert_eq!(config.logging.log_dir, Some(PathBuf::from("/var/log/wc-plugin")));

            let log_config = LogConfig::from(&config.logging);
            assert_eq!(log_config.log_dir, Some(PathBuf::from("/var/log/wc-plugin")));
            assert_eq!(log_config.rotation, RotationPolicy::Hourly);
        },
    );
}

#[test]
fn test_env_rotation_is_validated() {
    temp_env::with_var("WC_PLUGIN_LOGGING__ROTATION", Some("weekly"), || {
        let err = ConfigLoader::load().unwrap_err();
        assert!(err.to_string().contains("Invalid log rotation"));
    });
}
