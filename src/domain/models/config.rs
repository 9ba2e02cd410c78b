use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the settings provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Location of the metadata documents
    #[serde(default)]
    pub metadata: MetadataConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the build and release metadata documents live
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MetadataConfig {
    /// Directory containing both documents
    #[serde(default = "default_metadata_dir")]
    pub dir: PathBuf,

    /// File name of the build metadata document
    #[serde(default = "default_build_file")]
    pub build_file: String,

    /// File name of the release metadata document
    #[serde(default = "default_release_file")]
    pub release_file: String,
}

fn default_metadata_dir() -> PathBuf {
    PathBuf::from("metadata")
}

fn default_build_file() -> String {
    "build-metadata.json".to_string()
}

fn default_release_file() -> String {
    "release-metadata.json".to_string()
}

impl MetadataConfig {
    /// Metadata config rooted at `dir` with the default file names
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn build_path(&self) -> PathBuf {
        self.dir.join(&self.build_file)
    }

    pub fn release_path(&self) -> PathBuf {
        self.dir.join(&self.release_file)
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            dir: default_metadata_dir(),
            build_file: default_build_file(),
            release_file: default_release_file(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rotating JSON log files; console only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation: daily, hourly or never
    #[serde(default = "default_log_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_log_rotation(),
        }
    }
}
