//! Centralized state management with change notifications.
//!
//! `store` holds the generic, thread-safe state container; `app_state`
//! defines the state, actions, and reducer the application mounts with.

pub mod app_state;
pub mod store;

pub use {
    app_state::{AppAction, AppReducer, AppState, AppStore},
    store::{Reducer, Snapshot, Store},
};
