//! Plugin identity and version descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name under which the plugin repository is registered in ENS
pub const PLUGIN_REPO_ENS_NAME: &str = "wc-test-0318911";

/// Name of the plugin contract
pub const PLUGIN_CONTRACT_NAME: &str = "WorkingCapital";

/// Name of the setup contract that installs the plugin
pub const PLUGIN_SETUP_CONTRACT_NAME: &str = "WorkingCapitalSetup";

/// Version descriptor of a plugin build.
///
/// `release` is bumped only for breaking changes; updates across releases
/// are not possible. `build` is bumped for compatible changes and updates
/// to a newer build within the same release are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PluginVersion {
    pub release: u32,
    pub build: u32,
}

impl PluginVersion {
    /// Version of this settings snapshot
    pub const CURRENT: Self = Self::new(1, 1);

    pub const fn new(release: u32, build: u32) -> Self {
        Self { release, build }
    }

    /// Next compatible build within the same release, `None` once builds are exhausted
    pub const fn next_build(self) -> Option<Self> {
        match self.build.checked_add(1) {
            Some(build) => Some(Self::new(self.release, build)),
            None => None,
        }
    }

    /// First build of the next release, `None` once releases are exhausted
    pub const fn next_release(self) -> Option<Self> {
        match self.release.checked_add(1) {
            Some(release) => Some(Self::new(release, 1)),
            None => None,
        }
    }

    /// Evaluate whether a deployment at `self` can be updated to `target`
    pub fn check_update(self, target: Self) -> UpdateCheck {
        if self.release != target.release {
            return UpdateCheck::CrossRelease {
                from: self.release,
                to: target.release,
            };
        }

        match target.build.cmp(&self.build) {
            std::cmp::Ordering::Greater => UpdateCheck::Allowed,
            std::cmp::Ordering::Equal => UpdateCheck::AlreadyCurrent,
            std::cmp::Ordering::Less => UpdateCheck::Downgrade,
        }
    }
}

impl Default for PluginVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.release, self.build)
    }
}

/// Error parsing a `release.build` version string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("Invalid version '{0}'. Expected format: <release>.<build>")]
    InvalidFormat(String),

    #[error("Invalid {field} number '{value}' in version")]
    InvalidNumber { field: &'static str, value: String },
}

impl FromStr for PluginVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (release, build) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| VersionParseError::InvalidFormat(s.to_string()))?;

        Ok(Self::new(
            parse_component("release", release)?,
            parse_component("build", build)?,
        ))
    }
}

/// Digits only; `u32::from_str` would also accept a leading `+`
fn parse_component(field: &'static str, value: &str) -> Result<u32, VersionParseError> {
    let invalid = || VersionParseError::InvalidNumber {
        field,
        value: value.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse::<u32>().map_err(|_| invalid())
}

/// Outcome of an update compatibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UpdateCheck {
    /// Same release, newer build
    Allowed,
    /// Target equals the installed version
    AlreadyCurrent,
    /// Same release, older build
    Downgrade,
    /// Release boundary; never updatable in place
    CrossRelease { from: u32, to: u32 },
}

impl UpdateCheck {
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

impl fmt::Display for UpdateCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed => write!(f, "update allowed"),
            Self::AlreadyCurrent => write!(f, "already at target version"),
            Self::Downgrade => write!(f, "downgrades are not possible"),
            Self::CrossRelease { from, to } => {
                write!(f, "cannot update across releases ({from} -> {to})")
            }
        }
    }
}
