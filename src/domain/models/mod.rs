pub mod config;
pub mod metadata;
pub mod plugin;
pub mod settings;

pub use config::{Config, LoggingConfig, MetadataConfig};
pub use metadata::{DocumentKind, PluginMetadata};
pub use plugin::{
    PluginVersion, UpdateCheck, VersionParseError, PLUGIN_CONTRACT_NAME, PLUGIN_REPO_ENS_NAME,
    PLUGIN_SETUP_CONTRACT_NAME,
};
pub use settings::PluginSettings;
