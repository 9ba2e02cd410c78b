//! Command-line interface for inspecting the plugin settings.

pub mod commands;
pub mod output;
pub mod types;

use anyhow::{Context, Result};

pub use types::{Cli, Commands, DocumentArg};

use crate::domain::models::{Config, PluginVersion};
use crate::infrastructure::config::ConfigLoader;
use crate::services::SettingsProvider;

/// Resolve the effective configuration for a CLI invocation
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = ConfigLoader::load()?;
    if let Some(ref dir) = cli.metadata_dir {
        config.metadata.dir.clone_from(dir);
    }
    Ok(config)
}

/// Load the settings and dispatch the parsed command
pub async fn run(cli: Cli, config: &Config) -> Result<()> {
    let provider = SettingsProvider::init_async(&config.metadata)
        .await
        .context("Failed to load plugin settings")?;

    match cli.command {
        Commands::Show => commands::show::execute(&provider, cli.json),
        Commands::Version => commands::version::execute(provider.version(), cli.json),
        Commands::Metadata { document } => {
            commands::metadata::execute(provider.metadata(), document.map(Into::into), cli.json)
        }
        Commands::CheckUpdate { target, from } => commands::check_update::execute(
            from.unwrap_or(PluginVersion::CURRENT),
            target,
            cli.json,
        ),
    }
}

/// Render a command failure for stderr
pub fn error_report(err: &anyhow::Error, json_mode: bool) -> String {
    if json_mode {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        let body = serde_json::json!({ "error": err.to_string(), "causes": chain });
        serde_json::to_string_pretty(&body).unwrap_or_default()
    } else {
        format!("Error: {err:#}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_report_human() {
        let err = anyhow::anyhow!("file missing").context("Failed to load plugin settings");
        assert_eq!(
            error_report(&err, false),
            "Error: Failed to load plugin settings: file missing"
        );
    }

    #[test]
    fn test_error_report_json() {
        let err = anyhow::anyhow!("file missing").context("Failed to load plugin settings");
        let body: serde_json::Value = serde_json::from_str(&error_report(&err, true)).unwrap();

        assert_eq!(body["error"], "Failed to load plugin settings");
        assert_eq!(
            body["causes"],
            serde_json::json!(["Failed to load plugin settings", "file missing"])
        );
    }
}
