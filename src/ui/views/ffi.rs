//! The "Ffi" screen mounted at start-up.
//!
//! It shows the shared counter and offers buttons that dispatch through the
//! provided store. Everything it needs comes from the view context.

use crate::{
    state::{
        AppAction::{Increment, Reset},
        AppReducer,
    },
    ui::{
        provider::ViewContext,
        view::{View, ViewNode},
    },
};

/// Root screen of the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfiView;

impl View<AppReducer> for FfiView {
    fn name(&self) -> &'static str {
        "Ffi"
    }

    fn render(&self, cx: &ViewContext<'_, AppReducer>) -> ViewNode {
        let count = cx.select(|state| state.count);

        ViewNode::Column {
            spacing: 12,
            children: vec![
                ViewNode::heading("FFI"),
                ViewNode::label(format!("count: {count}")),
                ViewNode::Button {
                    label: "Increment".to_string(),
                    on_press: cx.dispatcher(Increment),
                },
                ViewNode::Button {
                    label: "Reset".to_string(),
                    on_press: cx.dispatcher(Reset),
                },
            ],
        }
    }
}
