use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::domain::error::LoadError;
use crate::domain::models::config::MetadataConfig;
use crate::domain::models::metadata::{DocumentKind, PluginMetadata};

/// Loads the two metadata documents from fixed paths
#[derive(Debug, Clone)]
pub struct MetadataLoader {
    build_path: PathBuf,
    release_path: PathBuf,
}

impl MetadataLoader {
    pub fn new(build_path: impl Into<PathBuf>, release_path: impl Into<PathBuf>) -> Self {
        Self {
            build_path: build_path.into(),
            release_path: release_path.into(),
        }
    }

    pub fn from_config(config: &MetadataConfig) -> Self {
        Self::new(config.build_path(), config.release_path())
    }

    /// Path of the document of the given kind
    pub fn path(&self, kind: DocumentKind) -> &Path {
        match kind {
            DocumentKind::Build => &self.build_path,
            DocumentKind::Release => &self.release_path,
        }
    }

    /// Read and parse both documents.
    ///
    /// The build document is read first; the first failure is returned.
    #[instrument(skip(self), fields(build = %self.build_path.display(), release = %self.release_path.display()))]
    pub fn load(&self) -> Result<PluginMetadata, LoadError> {
        let build = self.read_document(DocumentKind::Build)?;
        let release = self.read_document(DocumentKind::Release)?;
        Ok(PluginMetadata::new(build, release))
    }

    /// Same as [`load`](Self::load), reading files through `tokio::fs`
    #[instrument(skip(self), fields(build = %self.build_path.display(), release = %self.release_path.display()))]
    pub async fn load_async(&self) -> Result<PluginMetadata, LoadError> {
        let build = self.read_document_async(DocumentKind::Build).await?;
        let release = self.read_document_async(DocumentKind::Release).await?;
        Ok(PluginMetadata::new(build, release))
    }

    fn read_document(&self, kind: DocumentKind) -> Result<Value, LoadError> {
        let path = self.path(kind);
        debug!(document = %kind, path = %path.display(), "reading metadata document");

        let content =
            std::fs::read_to_string(path).map_err(|source| io_error(kind, path, source))?;
        parse_document(kind, path, &content)
    }

    async fn read_document_async(&self, kind: DocumentKind) -> Result<Value, LoadError> {
        let path = self.path(kind);
        debug!(document = %kind, path = %path.display(), "reading metadata document");

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| io_error(kind, path, source))?;
        parse_document(kind, path, &content)
    }
}

fn io_error(document: DocumentKind, path: &Path, source: std::io::Error) -> LoadError {
    let path = path.to_path_buf();
    if source.kind() == ErrorKind::NotFound {
        LoadError::Missing { document, path }
    } else {
        LoadError::Read {
            document,
            path,
            source,
        }
    }
}

fn parse_document(document: DocumentKind, path: &Path, content: &str) -> Result<Value, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Parse {
        document,
        path: path.to_path_buf(),
        source,
    })
}
