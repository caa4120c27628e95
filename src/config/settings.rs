//! User preference management with XDG Base Directory compliance.
//!
//! Settings live in a single JSON file under the XDG config home. A missing
//! file means defaults; a present file is validated before use.

use std::{
    env::var,
    fs::{create_dir_all, read_to_string, write},
    io::Error as StdError,
    path::PathBuf,
};

use {
    parking_lot::{RwLock, RwLockReadGuard},
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str, to_string_pretty},
    thiserror::Error,
    tracing::debug,
};

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write settings file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to serialize or deserialize settings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// Invalid settings value.
    #[error("Invalid settings value: {reason}")]
    InvalidValue { reason: String },
}

/// Serializable user settings structure with default values.
///
/// Fields missing from the file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Title of the main window.
    pub window_title: String,
    /// Default window width in pixels.
    pub window_width: i32,
    /// Default window height in pixels.
    pub window_height: i32,
    /// Counter value the demo state starts from.
    pub initial_count: u64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            window_title: "FFI".to_string(),
            window_width: 480,
            window_height: 320,
            initial_count: 0,
        }
    }
}

impl UserSettings {
    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` for non-positive window dimensions.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.window_width <= 0 {
            return Err(SettingsError::InvalidValue {
                reason: format!("window_width must be positive, got {}", self.window_width),
            });
        }
        if self.window_height <= 0 {
            return Err(SettingsError::InvalidValue {
                reason: format!(
                    "window_height must be positive, got {}",
                    self.window_height
                ),
            });
        }
        Ok(())
    }
}

/// Handles loading, saving, and validation of user preferences.
#[derive(Debug)]
pub struct SettingsManager {
    /// Thread-safe user settings storage.
    settings: RwLock<UserSettings>,
    /// Path to the configuration file on disk.
    config_path: PathBuf,
}

impl SettingsManager {
    /// Creates a new settings manager with default config path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if settings cannot be loaded from disk.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_path(get_config_path())
    }

    /// Creates a new settings manager with a custom config path.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Path of the settings file
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the file exists but cannot be read, parsed,
    /// or validated.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        if let Some(parent) = config_path.parent() {
            create_dir_all(parent)?;
        }

        let settings = if config_path.exists() {
            debug!(path = ?config_path, "Loading settings from existing file");
            let contents = read_to_string(&config_path)?;
            let settings: UserSettings = from_str(&contents)?;
            settings.validate()?;
            settings
        } else {
            debug!(path = ?config_path, "No settings file, using defaults");
            UserSettings::default()
        };

        Ok(SettingsManager {
            settings: RwLock::new(settings),
            config_path,
        })
    }

    /// Gets the current settings.
    pub fn get_settings(&self) -> RwLockReadGuard<'_, UserSettings> {
        self.settings.read()
    }

    /// Gets the configuration file path.
    pub fn get_config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Validates and applies new settings, then saves them to disk.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the new settings are invalid or cannot be
    /// saved. Invalid settings leave the current ones untouched.
    pub fn update_settings(&self, new_settings: UserSettings) -> Result<(), SettingsError> {
        new_settings.validate()?;
        *self.settings.write() = new_settings;
        self.save_settings()
    }

    fn save_settings(&self) -> Result<(), SettingsError> {
        debug!(path = ?self.config_path, "Saving settings");
        let contents = to_string_pretty(&*self.settings.read())?;
        write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Ensures proper XDG directory usage for the settings file.
#[must_use]
pub fn get_config_path() -> PathBuf {
    let mut config_dir = get_xdg_config_home();
    config_dir.push("ffi-shell");
    config_dir.push("settings.json");
    config_dir
}

/// Gets the XDG config home directory following XDG Base Directory specification.
///
/// Uses `XDG_CONFIG_HOME` environment variable if set, otherwise defaults to $HOME/.config
fn get_xdg_config_home() -> PathBuf {
    if let Ok(config_home) = var("XDG_CONFIG_HOME")
        && !config_home.is_empty()
    {
        return PathBuf::from(config_home);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".config");
        return path;
    }

    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use {serde_json::from_str, tempfile::TempDir};

    use crate::config::settings::{SettingsError, SettingsManager, UserSettings};

    #[test]
    fn test_user_settings_default() {
        let settings = UserSettings::default();
        assert_eq!(settings.window_title, "FFI");
        assert_eq!(settings.window_width, 480);
        assert_eq!(settings.window_height, 320);
        assert_eq!(settings.initial_count, 0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: UserSettings = from_str(r#"{ "initial_count": 7 }"#).unwrap();
        assert_eq!(settings.initial_count, 7);
        assert_eq!(settings.window_width, 480);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");

        let manager = SettingsManager::with_config_path(path.clone()).unwrap();
        assert_eq!(*manager.get_settings(), UserSettings::default());
        assert_eq!(manager.get_config_path(), &path);
        assert!(!path.exists());
    }

    #[test]
    fn test_settings_persist_across_sessions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let manager = SettingsManager::with_config_path(path.clone()).unwrap();
        let mut settings = manager.get_settings().clone();
        settings.initial_count = 3;
        settings.window_title = "Bridge".to_string();
        manager.update_settings(settings.clone()).unwrap();

        let reloaded = SettingsManager::with_config_path(path).unwrap();
        assert_eq!(*reloaded.get_settings(), settings);
    }

    #[test]
    fn test_invalid_update_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let manager =
            SettingsManager::with_config_path(temp_dir.path().join("settings.json")).unwrap();

        let mut settings = manager.get_settings().clone();
        settings.window_height = 0;

        let result = manager.update_settings(settings);
        assert!(matches!(result, Err(SettingsError::InvalidValue { .. })));
        assert_eq!(manager.get_settings().window_height, 320);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        write(&path, r#"{ "window_width": -5 }"#).unwrap();
        assert!(matches!(
            SettingsManager::with_config_path(path.clone()),
            Err(SettingsError::InvalidValue { .. })
        ));

        write(&path, "not json").unwrap();
        assert!(matches!(
            SettingsManager::with_config_path(path),
            Err(SettingsError::SerializationError(_))
        ));
    }
}
