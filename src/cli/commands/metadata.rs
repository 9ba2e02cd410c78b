//! Implementation of the `metadata` command.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{DocumentKind, PluginMetadata};

#[derive(Debug, Serialize)]
pub struct MetadataOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<Value>,
}

impl MetadataOutput {
    pub const fn get(&self, kind: DocumentKind) -> Option<&Value> {
        match kind {
            DocumentKind::Build => self.build.as_ref(),
            DocumentKind::Release => self.release.as_ref(),
        }
    }

    /// Select both documents, or only `document` when given
    pub fn select(metadata: &PluginMetadata, document: Option<DocumentKind>) -> Self {
        let wanted = |kind: DocumentKind| document.is_none_or(|d| d == kind);
        Self {
            build: wanted(DocumentKind::Build).then(|| metadata.build.clone()),
            release: wanted(DocumentKind::Release).then(|| metadata.release.clone()),
        }
    }
}

impl CommandOutput for MetadataOutput {
    fn to_human(&self) -> String {
        let mut sections = Vec::new();
        for kind in DocumentKind::ALL {
            if let Some(doc) = self.get(kind) {
                let body = serde_json::to_string_pretty(doc).unwrap_or_default();
                sections.push(format!("== {kind} ==\n{body}"));
            }
        }
        sections.join("\n\n")
    }

    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(metadata: &PluginMetadata, document: Option<DocumentKind>, json_mode: bool) -> Result<()> {
    let out = MetadataOutput::select(metadata, document);

    // A single requested document is printed bare so it can be piped.
    if json_mode {
        if let Some(kind) = document {
            let doc = metadata.document(kind);
            let rendered = serde_json::to_string_pretty(doc)
                .with_context(|| format!("Failed to render {kind}"))?;
            println!("{rendered}");
            return Ok(());
        }
    }

    output(&out, json_mode);
    Ok(())
}
