pub mod settings_provider;

pub use settings_provider::{global, init_global, SettingsProvider};
