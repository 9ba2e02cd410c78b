//! Implementation of the `version` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::PluginVersion;

#[derive(Debug, Serialize)]
pub struct VersionOutput {
    pub release: u32,
    pub build: u32,
}

impl From<PluginVersion> for VersionOutput {
    fn from(version: PluginVersion) -> Self {
        Self {
            release: version.release,
            build: version.build,
        }
    }
}

impl CommandOutput for VersionOutput {
    fn to_human(&self) -> String {
        format!("Release {} build {} ({}.{})", self.release, self.build, self.release, self.build)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(version: PluginVersion, json_mode: bool) -> Result<()> {
    output(&VersionOutput::from(version), json_mode);
    Ok(())
}
