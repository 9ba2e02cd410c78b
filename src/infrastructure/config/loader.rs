use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "WC_PLUGIN_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Metadata directory cannot be empty")]
    EmptyMetadataDir,

    #[error("Metadata file name for {0} cannot be empty")]
    EmptyMetadataFile(&'static str),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),

    #[error("Log directory cannot be empty when set")]
    EmptyLogDir,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .wc-plugin/config.yaml (project config)
    /// 3. .wc-plugin/local.yaml (project local overrides, optional)
    /// 4. Environment variables (WC_PLUGIN_* prefix, highest priority)
    ///
    /// Plugin identifiers and version are not part of the configuration.
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".wc-plugin/config.yaml"))
            .merge(Yaml::file(".wc-plugin/local.yaml"))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.metadata.dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyMetadataDir);
        }

        if config.metadata.build_file.is_empty() {
            return Err(ConfigError::EmptyMetadataFile("build"));
        }

        if config.metadata.release_file.is_empty() {
            return Err(ConfigError::EmptyMetadataFile("release"));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(config.logging.rotation.clone()));
        }

        if config
            .logging
            .log_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(ConfigError::EmptyLogDir);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.metadata.dir, PathBuf::from("metadata"));
        assert_eq!(config.metadata.build_file, "build-metadata.json");
        assert_eq!(config.metadata.release_file, "release-metadata.json");
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
metadata:
  dir: /srv/plugin/src
  build_file: build.json
logging:
  level: debug
  format: json
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.metadata.dir, PathBuf::from("/srv/plugin/src"));
        assert_eq!(config.metadata.build_file, "build.json");
        assert_eq!(config.metadata.release_file, "release-metadata.json");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_empty_metadata_dir() {
        let mut config = Config::default();
        config.metadata.dir = PathBuf::new();

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::EmptyMetadataDir
        ));
    }

    #[test]
    fn test_validate_empty_file_names() {
        let mut config = Config::default();
        config.metadata.build_file = String::new();
        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::EmptyMetadataFile("build")
        ));

        let mut config = Config::default();
        config.metadata.release_file = String::new();
        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::EmptyMetadataFile("release")
        ));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogLevel(level) => assert_eq!(level, "verbose"),
            _ => panic!("Expected InvalidLogLevel error"),
        }
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogFormat(format) => assert_eq!(format, "xml"),
            _ => panic!("Expected InvalidLogFormat error"),
        }
    }

    #[test]
    fn test_validate_log_file_settings() {
        let mut config = Config::default();
        config.logging.rotation = "weekly".to_string();
        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogRotation(rotation) => assert_eq!(rotation, "weekly"),
            _ => panic!("Expected InvalidLogRotation error"),
        }

        let mut config = Config::default();
        config.logging.log_dir = Some(PathBuf::new());
        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::EmptyLogDir
        ));

        let mut config = Config::default();
        config.logging.log_dir = Some(PathBuf::from("/var/log/wc-plugin"));
        config.logging.rotation = "never".to_string();
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_hierarchical_merging() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut base_file = NamedTempFile::new().unwrap();
        writeln!(
            base_file,
            "metadata:\n  dir: base\nlogging:\n  level: info\n  format: json"
        )
        .unwrap();
        base_file.flush().unwrap();

        let mut override_file = NamedTempFile::new().unwrap();
        writeln!(override_file, "metadata:\n  dir: override\nlogging:\n  level: debug").unwrap();
        override_file.flush().unwrap();

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(base_file.path()))
            .merge(Yaml::file(override_file.path()))
            .extract()
            .unwrap();

        assert_eq!(config.metadata.dir, PathBuf::from("override"), "Override should win");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.logging.format, "json",
            "Base value should persist when not overridden"
        );
        assert_eq!(config.metadata.build_file, "build-metadata.json");
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  level: loud").unwrap();
        file.flush().unwrap();

        let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }
}
