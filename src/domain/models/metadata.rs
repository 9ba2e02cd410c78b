use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The two metadata documents published alongside a plugin version.
///
/// Both documents are kept as opaque JSON. Their schema belongs to the
/// files themselves, so no validation beyond parsing is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Build metadata (setup inputs, change notes, UI hints)
    pub build: Value,

    /// Release metadata (name, description, images)
    pub release: Value,
}

impl PluginMetadata {
    pub const fn new(build: Value, release: Value) -> Self {
        Self { build, release }
    }

    /// Borrow the document of the given kind
    pub const fn document(&self, kind: DocumentKind) -> &Value {
        match kind {
            DocumentKind::Build => &self.build,
            DocumentKind::Release => &self.release,
        }
    }
}

/// Identifies one of the two metadata documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Build,
    Release,
}

impl DocumentKind {
    pub const ALL: [Self; 2] = [Self::Build, Self::Release];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Release => "release",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} metadata", self.as_str())
    }
}
