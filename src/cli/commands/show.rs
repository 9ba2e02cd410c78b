//! Implementation of the `show` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{key_value_table, output, CommandOutput};
use crate::domain::models::{PluginSettings, PluginVersion};

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub repo_name: String,
    pub contract_name: String,
    pub setup_contract_name: String,
    pub version: PluginVersion,
}

impl From<&PluginSettings> for ShowOutput {
    fn from(settings: &PluginSettings) -> Self {
        Self {
            repo_name: settings.repo_name().to_string(),
            contract_name: settings.contract_name().to_string(),
            setup_contract_name: settings.setup_contract_name().to_string(),
            version: settings.version(),
        }
    }
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        key_value_table([
            ("Repository ENS name", self.repo_name.clone()),
            ("Contract", self.contract_name.clone()),
            ("Setup contract", self.setup_contract_name.clone()),
            ("Release", self.version.release.to_string()),
            ("Build", self.version.build.to_string()),
        ])
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(settings: &PluginSettings, json_mode: bool) -> Result<()> {
    output(&ShowOutput::from(settings), json_mode);
    Ok(())
}
