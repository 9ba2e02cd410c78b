//! Implementation of the `check-update` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{PluginVersion, UpdateCheck};

#[derive(Debug, Serialize)]
pub struct CheckUpdateOutput {
    pub from: PluginVersion,
    pub to: PluginVersion,
    pub allowed: bool,
    pub check: UpdateCheck,
}

impl CheckUpdateOutput {
    pub fn evaluate(from: PluginVersion, to: PluginVersion) -> Self {
        let check = from.check_update(to);
        Self {
            from,
            to,
            allowed: check.is_allowed(),
            check,
        }
    }
}

impl CommandOutput for CheckUpdateOutput {
    fn to_human(&self) -> String {
        format!("{} -> {}: {}", self.from, self.to, self.check)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print the check result; a disallowed update is reported as an error
pub fn execute(from: PluginVersion, to: PluginVersion, json_mode: bool) -> Result<()> {
    let out = CheckUpdateOutput::evaluate(from, to);
    output(&out, json_mode);

    if !out.allowed {
        anyhow::bail!("Update from {from} to {to} is not possible: {}", out.check);
    }
    Ok(())
}
