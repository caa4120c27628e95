//! Error handling built on `thiserror` for domain errors and `anyhow` for
//! operational context.
//!
//! Domain errors describe what went wrong inside the state container, the
//! composition root, and the application shell. Operational helpers attach
//! context and route failures to the log.

pub mod domain;
pub mod operational;

pub use {
    domain::{InitializationError, StoreError, UiError},
    operational::{ErrorReporter, ResultExt},
};
