//! Application shell around the composition root.
//!
//! `FfiApplication` loads settings, builds the composition root, mounts it
//! before the GTK main loop starts, and presents the mounted tree in the main
//! window. A mount failure means the application refuses to launch.

use std::cell::Cell;

use {
    libadwaita::{
        Application, ApplicationWindow,
        glib::ExitCode,
        gtk::{Box as GtkBox, Orientation::Vertical},
        init,
        prelude::{
            AdwApplicationWindowExt, ApplicationExt, ApplicationExtManual, GtkApplicationExt,
            GtkWindowExt,
        },
    },
    tracing::{debug, info},
};

use crate::{
    config::{SettingsManager, UserSettings},
    error::UiError,
    state::AppReducer,
    ui::{
        renderer::present,
        root::{CompositionRoot, MountedTree},
        views::FfiView,
    },
};

/// Identifier registered with the session bus.
pub const APPLICATION_ID: &str = "com.example.FfiShell";

/// Main application with window management.
pub struct FfiApplication {
    /// The main application instance.
    pub app: Application,
    /// Wiring of the store and the root view.
    pub root: CompositionRoot<AppReducer>,
    /// Settings the application was started with.
    pub settings: UserSettings,
}

impl FfiApplication {
    /// Creates the application from the settings on disk.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if Libadwaita cannot be initialized or the settings
    /// file is unreadable or invalid.
    pub fn new() -> Result<Self, UiError> {
        init().map_err(|e| UiError::ToolkitError(e.to_string()))?;

        let manager = SettingsManager::new()?;
        debug!(path = ?manager.get_config_path(), "Settings loaded");
        let settings = manager.get_settings().clone();

        Ok(Self::with_settings(settings))
    }

    /// Creates the application from explicit settings.
    pub fn with_settings(settings: UserSettings) -> Self {
        let app = Application::builder()
            .application_id(APPLICATION_ID)
            .build();

        Self {
            app,
            root: build_root(&settings),
            settings,
        }
    }

    /// Mounts the root view and runs the GTK main loop.
    ///
    /// # Errors
    ///
    /// Returns `UiError::InitializationError` without starting the main loop
    /// if the composition root cannot mount.
    pub fn run(&self) -> Result<ExitCode, UiError> {
        let tree = self.root.mount()?;
        info!(root_view = tree.root_name(), "Launching application");

        let pending = Cell::new(Some(tree));
        let settings = self.settings.clone();

        self.app.connect_activate(move |app| match pending.take() {
            Some(tree) => build_ui(app, &settings, tree),
            // Re-activation of a running instance.
            None => {
                if let Some(window) = app.active_window() {
                    window.present();
                }
            }
        });

        Ok(self.app.run())
    }
}

/// Builds the composition root the application mounts.
pub fn build_root(settings: &UserSettings) -> CompositionRoot<AppReducer> {
    CompositionRoot::new(
        AppReducer::with_initial_count(settings.initial_count),
        FfiView,
    )
}

/// Builds the main window around the mounted tree.
fn build_ui(app: &Application, settings: &UserSettings, tree: MountedTree<AppReducer>) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title(settings.window_title.as_str())
        .default_width(settings.window_width)
        .default_height(settings.window_height)
        .build();

    let content = GtkBox::builder()
        .orientation(Vertical)
        .margin_top(24)
        .margin_bottom(24)
        .margin_start(24)
        .margin_end(24)
        .build();

    present(tree, &content);

    window.set_content(Some(&content));
    window.present();
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        config::UserSettings,
        ui::application::build_root,
    };

    #[test]
    fn test_build_root_seeds_from_settings() {
        let settings = UserSettings {
            initial_count: 9,
            ..UserSettings::default()
        };

        let root = build_root(&settings);
        let first = root.mount().unwrap();
        let second = root.mount().unwrap();

        assert_eq!(first.root_name(), "Ffi");
        assert!(first.root().texts().contains(&"count: 9"));
        assert!(Arc::ptr_eq(first.store(), second.store()));
    }
}
