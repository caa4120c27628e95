//! FFI Shell
//!
//! Mounts the application's root view inside its state container and hands
//! it to the GTK main loop.

use {
    ffi_shell::{
        FfiApplication,
        error::{ErrorReporter, ResultExt},
    },
    libadwaita::glib::ExitCode,
    tracing::info,
    tracing_subscriber::EnvFilter,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting FFI Shell");

    match run() {
        Ok(code) => code,
        Err(error) => {
            ErrorReporter::error(&error, "startup");
            eprintln!("{}", ErrorReporter::to_user_message(&error));
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let app = FfiApplication::new().add_context("Failed to create application")?;
    app.run().add_context("Refusing to launch")
}
