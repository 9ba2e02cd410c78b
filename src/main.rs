//! WorkingCapital plugin settings CLI entry point.

use clap::Parser;
use std::process::ExitCode;

use wc_plugin_settings::cli::{self, Cli};
use wc_plugin_settings::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    let config = match cli::load_config(&cli) {
        Ok(config) => config,
        Err(err) => return fail(&err, json),
    };

    // Held until main returns so buffered file output is flushed
    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => logger,
        Err(err) => return fail(&err, json),
    };

    match cli::run(cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            fail(&err, json)
        }
    }
}

fn fail(err: &anyhow::Error, json: bool) -> ExitCode {
    eprintln!("{}", cli::error_report(err, json));
    ExitCode::FAILURE
}
