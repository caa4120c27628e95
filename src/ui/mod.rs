//! View layer: tree description, provider scope, composition root, and the
//! Libadwaita renderer and application shell on top of them.

pub mod application;
pub mod provider;
pub mod renderer;
pub mod root;
pub mod view;
pub mod views;

pub use {
    application::FfiApplication,
    provider::{ProviderScope, ViewContext},
    root::{CompositionRoot, MountedTree},
    view::{Callback, View, ViewNode},
    views::FfiView,
};
