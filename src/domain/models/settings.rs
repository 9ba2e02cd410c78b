use serde::Serialize;

use super::metadata::PluginMetadata;
use super::plugin::{
    PluginVersion, PLUGIN_CONTRACT_NAME, PLUGIN_REPO_ENS_NAME, PLUGIN_SETUP_CONTRACT_NAME,
};

/// Read-only plugin settings, built once the metadata documents are loaded.
///
/// Identifiers and version are compiled in; only the metadata comes from
/// disk. There are no setters, so a value is immutable for its lifetime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginSettings {
    repo_name: &'static str,
    contract_name: &'static str,
    setup_contract_name: &'static str,
    version: PluginVersion,
    metadata: PluginMetadata,
}

impl PluginSettings {
    pub const fn new(metadata: PluginMetadata) -> Self {
        Self {
            repo_name: PLUGIN_REPO_ENS_NAME,
            contract_name: PLUGIN_CONTRACT_NAME,
            setup_contract_name: PLUGIN_SETUP_CONTRACT_NAME,
            version: PluginVersion::CURRENT,
            metadata,
        }
    }

    /// ENS name of the plugin repository
    pub const fn repo_name(&self) -> &'static str {
        self.repo_name
    }

    pub const fn contract_name(&self) -> &'static str {
        self.contract_name
    }

    pub const fn setup_contract_name(&self) -> &'static str {
        self.setup_contract_name
    }

    pub const fn version(&self) -> PluginVersion {
        self.version
    }

    pub const fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }
}
