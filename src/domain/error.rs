use std::path::PathBuf;
use thiserror::Error;

use super::models::metadata::DocumentKind;

/// Errors raised while loading plugin settings.
///
/// Any of these aborts initialization. No partial settings are exposed.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{document} file not found: {}", path.display())]
    Missing { document: DocumentKind, path: PathBuf },

    #[error("Failed to read {document} from {}", path.display())]
    Read {
        document: DocumentKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {document} in {} as JSON", path.display())]
    Parse {
        document: DocumentKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The document that failed to load
    pub const fn document(&self) -> DocumentKind {
        match self {
            Self::Missing { document, .. }
            | Self::Read { document, .. }
            | Self::Parse { document, .. } => *document,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Missing { path, .. } | Self::Read { path, .. } | Self::Parse { path, .. } => {
                path.as_path()
            }
        }
    }
}
