//! FFI Shell
//!
//! Application entry point built around a composition root: one process-wide
//! state container, handed to the view tree through a provider scope, with a
//! single root screen mounted inside it and rendered with Libadwaita.

pub mod config;
pub mod error;
pub mod state;
pub mod ui;

// Re-export key types for convenience
pub use {
    config::{SettingsManager, UserSettings},
    error::{InitializationError, StoreError, UiError},
    state::{AppAction, AppReducer, AppState, AppStore, Reducer, Store},
    ui::{CompositionRoot, FfiApplication, FfiView, MountedTree, ProviderScope, View, ViewContext},
};
