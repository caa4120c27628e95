//! Operational error context propagation with `anyhow`.
//!
//! Start-up failures travel up to `main` as `anyhow::Error` values carrying
//! the step that failed. `ErrorReporter` is the single place they are logged
//! and turned into text for the user.

use std::error::Error as StdError;

use {
    anyhow::{Context, Error, Result as AnyhowResult},
    tracing::error,
};

/// Extension trait for attaching start-up context to domain errors.
pub trait ResultExt<T, E> {
    /// Adds context to an error with a static string.
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(context)
    }
}

/// Centralized error reporting and logging.
pub struct ErrorReporter;

impl ErrorReporter {
    /// Reports a failure that stops the application.
    pub fn error(error: &Error, context: &str) {
        error!(context = context, error = %Self::to_user_message(error), "Fatal error");
    }

    /// Converts an error to a user-facing message.
    ///
    /// The whole cause chain is joined so that the underlying reason (for
    /// example a rejected initial state) is visible next to the step that
    /// failed.
    pub fn to_user_message(error: &Error) -> String {
        error
            .chain()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(": ")
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use crate::error::{
        domain::{InitializationError, StoreError},
        operational::{ErrorReporter, ResultExt},
    };

    #[test]
    fn test_result_ext_with_context() {
        let result: Result<(), StoreError> = Err(StoreError::InitialState {
            reason: "test".to_string(),
        });
        let with_context = result.add_context("Failed to build store");

        let error = with_context.unwrap_err();
        assert_eq!(error.to_string(), "Failed to build store");
        assert!(error.downcast_ref::<StoreError>().is_some());
    }

    #[test]
    fn test_error_reporter_user_message() {
        let error = anyhow!("Test error message");
        assert_eq!(ErrorReporter::to_user_message(&error), "Test error message");
    }

    #[test]
    fn test_error_reporter_includes_cause_chain() {
        let result: Result<(), InitializationError> = Err(StoreError::InitialState {
            reason: "negative seed".to_string(),
        }
        .into());
        let error = result.add_context("Failed to mount").unwrap_err();

        assert_eq!(
            ErrorReporter::to_user_message(&error),
            "Failed to mount: State container construction failed: \
             Initial state rejected: negative seed"
        );
    }
}
