//! Screens that can be mounted as the root view.

pub mod ffi;

pub use ffi::FfiView;
