//! Domain-specific error types using `thiserror`.
//!
//! The state container can refuse to start. The composition root surfaces
//! that refusal as an `InitializationError`, and the application shell adds
//! its own settings and toolkit failures on top.

use thiserror::Error;

use crate::config::SettingsError;

/// State container errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The reducer could not produce a valid initial state.
    #[error("Initial state rejected: {reason}")]
    InitialState { reason: String },
}

/// Raised by the composition root when mounting cannot proceed.
///
/// The only cause at this layer is a state container that failed to
/// construct. It is never retried: construction is deterministic.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Constructing the state container failed.
    #[error("State container construction failed")]
    StoreConstruction(#[from] StoreError),
}

/// Application shell errors.
#[derive(Error, Debug)]
pub enum UiError {
    /// GTK/Libadwaita could not be initialized.
    #[error("Toolkit initialization error: {0}")]
    ToolkitError(String),
    /// The composition root failed to mount.
    #[error("Failed to mount the root view")]
    InitializationError(#[from] InitializationError),
    /// User settings could not be loaded.
    #[error("Failed to load settings")]
    SettingsError(#[from] SettingsError),
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::{
        config::SettingsError,
        error::domain::{InitializationError, StoreError, UiError},
    };

    #[test]
    fn test_store_error_display() {
        let error = StoreError::InitialState {
            reason: "count overflow".to_string(),
        };
        assert_eq!(error.to_string(), "Initial state rejected: count overflow");
    }

    #[test]
    fn test_initialization_error_wraps_store_error() {
        let error: InitializationError = StoreError::InitialState {
            reason: "bad seed".to_string(),
        }
        .into();
        assert_eq!(error.to_string(), "State container construction failed");
        assert_eq!(
            error.source().map(ToString::to_string).as_deref(),
            Some("Initial state rejected: bad seed")
        );
    }

    #[test]
    fn test_ui_error_display() {
        let toolkit_error = UiError::ToolkitError("no display".to_string());
        assert_eq!(
            toolkit_error.to_string(),
            "Toolkit initialization error: no display"
        );

        let settings_error: UiError = SettingsError::InvalidValue {
            reason: "window_width must be positive".to_string(),
        }
        .into();
        assert_eq!(settings_error.to_string(), "Failed to load settings");
        assert!(
            settings_error
                .source()
                .is_some_and(|source| source.to_string().contains("window_width"))
        );
    }
}
