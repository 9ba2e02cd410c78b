//! WorkingCapital plugin settings
//!
//! Identity, version and metadata of the `WorkingCapital` plugin bundle,
//! loaded once at startup and shared read-only afterwards.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): identifiers, version policy, metadata model
//! - **Service Layer** (`services`): the settings provider and its global instance
//! - **Infrastructure Layer** (`infrastructure`): metadata loading, config, logging
//! - **CLI Layer** (`cli`): command-line inspection tool
//!
//! # Example
//!
//! ```no_run
//! use wc_plugin_settings::{MetadataConfig, SettingsProvider};
//!
//! fn main() -> anyhow::Result<()> {
//!     let provider = SettingsProvider::init(&MetadataConfig::in_dir("metadata"))?;
//!     println!("{} {}", provider.contract_name(), provider.version());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, DocumentKind, MetadataConfig, PluginMetadata, PluginSettings, PluginVersion,
    UpdateCheck, VersionParseError, PLUGIN_CONTRACT_NAME, PLUGIN_REPO_ENS_NAME,
    PLUGIN_SETUP_CONTRACT_NAME,
};
pub use domain::LoadError;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::metadata::MetadataLoader;
pub use services::SettingsProvider;
