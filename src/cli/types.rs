//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::models::{DocumentKind, PluginVersion};

#[derive(Parser, Debug)]
#[command(name = "wc-plugin-settings")]
#[command(about = "Inspect the WorkingCapital plugin identity, version and metadata", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Directory containing build-metadata.json and release-metadata.json
    ///
    /// Relative paths resolve against the current working directory, not
    /// the executable. Defaults to `metadata.dir` from the configuration
    /// (`./metadata` unless overridden).
    #[arg(long, global = true, value_name = "DIR")]
    pub metadata_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show plugin identifiers and version
    Show,

    /// Show the version descriptor
    Version,

    /// Print the loaded metadata documents
    Metadata {
        /// Only print one document
        #[arg(short, long, value_enum)]
        document: Option<DocumentArg>,
    },

    /// Check whether an installed version can be updated to a target
    CheckUpdate {
        /// Target version as <release>.<build>
        target: PluginVersion,

        /// Installed version (defaults to the current version)
        #[arg(long)]
        from: Option<PluginVersion>,
    },
}

/// Metadata document selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentArg {
    Build,
    Release,
}

impl From<DocumentArg> for DocumentKind {
    fn from(arg: DocumentArg) -> Self {
        match arg {
            DocumentArg::Build => Self::Build,
            DocumentArg::Release => Self::Release,
        }
    }
}
