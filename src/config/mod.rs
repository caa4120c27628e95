//! User preferences and persisted application-shell settings.
//!
//! Settings configure the window the mounted tree is presented in and the
//! seed for the demo state. They never reach the composition root directly.

pub mod settings;

pub use settings::{SettingsError, SettingsManager, UserSettings, get_config_path};
