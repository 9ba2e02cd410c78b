use std::ops::Deref;
use std::sync::{Arc, OnceLock};
use tracing::{info, instrument};

use crate::domain::error::LoadError;
use crate::domain::models::config::MetadataConfig;
use crate::domain::models::{PluginMetadata, PluginSettings, PluginVersion};
use crate::infrastructure::metadata::MetadataLoader;

/// Process-wide settings, installed once by [`init_global`]
static GLOBAL_SETTINGS: OnceLock<SettingsProvider> = OnceLock::new();

/// Shared, read-only handle to the loaded plugin settings.
///
/// Cloning is cheap and every clone observes the same values. A provider
/// only exists once both metadata documents were loaded successfully.
///
/// # Examples
///
/// ```no_run
/// use wc_plugin_settings::domain::models::MetadataConfig;
/// use wc_plugin_settings::services::SettingsProvider;
///
/// # fn example() -> Result<(), wc_plugin_settings::domain::LoadError> {
/// let provider = SettingsProvider::init(&MetadataConfig::in_dir("metadata"))?;
/// assert_eq!(provider.contract_name(), "WorkingCapital");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SettingsProvider {
    settings: Arc<PluginSettings>,
}

impl SettingsProvider {
    /// Load the metadata documents described by `config`
    pub fn init(config: &MetadataConfig) -> Result<Self, LoadError> {
        Self::from_loader(&MetadataLoader::from_config(config))
    }

    #[instrument(skip(loader))]
    pub fn from_loader(loader: &MetadataLoader) -> Result<Self, LoadError> {
        let metadata = loader.load()?;
        Ok(Self::from_metadata(metadata))
    }

    /// Async variant of [`init`](Self::init)
    #[instrument(skip(config))]
    pub async fn init_async(config: &MetadataConfig) -> Result<Self, LoadError> {
        let metadata = MetadataLoader::from_config(config).load_async().await?;
        Ok(Self::from_metadata(metadata))
    }

    /// Wrap already-loaded metadata
    pub fn from_metadata(metadata: PluginMetadata) -> Self {
        let settings = PluginSettings::new(metadata);
        info!(
            repo = settings.repo_name(),
            contract = settings.contract_name(),
            version = %settings.version(),
            "plugin settings loaded"
        );
        Self {
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    pub fn version(&self) -> PluginVersion {
        self.settings.version()
    }
}

impl Deref for SettingsProvider {
    type Target = PluginSettings;

    fn deref(&self) -> &Self::Target {
        &self.settings
    }
}

/// Install the process-wide settings, loading them on first call.
///
/// Later calls return the already-installed settings without touching the
/// filesystem. On failure nothing is installed and a later call may retry.
pub fn init_global(config: &MetadataConfig) -> Result<&'static SettingsProvider, LoadError> {
    if let Some(provider) = GLOBAL_SETTINGS.get() {
        return Ok(provider);
    }

    let provider = SettingsProvider::init(config)?;
    Ok(GLOBAL_SETTINGS.get_or_init(|| provider))
}

/// Process-wide settings, if [`init_global`] has succeeded
pub fn global() -> Option<&'static SettingsProvider> {
    GLOBAL_SETTINGS.get()
}
