//! Toolkit-independent view-tree description.
//!
//! Views render into `ViewNode` values. The composition root hands the
//! resulting tree to the platform renderer, which turns it into widgets, so
//! everything above the renderer can be built and inspected without a
//! display.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    rc::Rc,
};

use crate::{state::Reducer, ui::provider::ViewContext};

/// Handler attached to an interactive node.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    /// Wraps a closure as a callback.
    pub fn new(handler: impl Fn() + 'static) -> Self {
        Self(Rc::new(handler))
    }

    /// Runs the handler.
    pub fn invoke(&self) {
        (self.0)();
    }
}

impl Debug for Callback {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Callback")
    }
}

/// A node of the rendered view tree.
#[derive(Debug, Clone)]
pub enum ViewNode {
    /// Static text.
    Label {
        /// Text to display.
        text: String,
        /// Whether the label is styled as a heading.
        heading: bool,
    },
    /// Push button.
    Button {
        /// Button caption.
        label: String,
        /// Handler run on press.
        on_press: Callback,
    },
    /// Vertical stack of children.
    Column {
        /// Pixels between children.
        spacing: i32,
        /// Child nodes, top to bottom.
        children: Vec<ViewNode>,
    },
}

impl ViewNode {
    /// Creates a plain label.
    pub fn label(text: impl Into<String>) -> Self {
        ViewNode::Label {
            text: text.into(),
            heading: false,
        }
    }

    /// Creates a heading label.
    pub fn heading(text: impl Into<String>) -> Self {
        ViewNode::Label {
            text: text.into(),
            heading: true,
        }
    }

    /// Collects the text of every label in the subtree, depth first.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            ViewNode::Label { text, .. } => vec![text.as_str()],
            ViewNode::Button { .. } => Vec::new(),
            ViewNode::Column { children, .. } => {
                children.iter().flat_map(ViewNode::texts).collect()
            }
        }
    }

    /// Finds the handler of the first button captioned `label`.
    pub fn find_button(&self, label: &str) -> Option<&Callback> {
        match self {
            ViewNode::Button {
                label: caption,
                on_press,
            } if caption == label => Some(on_press),
            ViewNode::Column { children, .. } => {
                children.iter().find_map(|child| child.find_button(label))
            }
            _ => None,
        }
    }
}

/// A renderable unit.
///
/// Views receive nothing from their parent except the context; anything they
/// need from application state they read through it.
pub trait View<R: Reducer> {
    /// Name the view is known by in logs.
    fn name(&self) -> &'static str;

    /// Renders the view against the current state.
    fn render(&self, cx: &ViewContext<'_, R>) -> ViewNode;
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use crate::ui::view::{Callback, ViewNode};

    fn sample_tree(pressed: Rc<Cell<u32>>) -> ViewNode {
        ViewNode::Column {
            spacing: 6,
            children: vec![
                ViewNode::heading("Title"),
                ViewNode::Column {
                    spacing: 0,
                    children: vec![ViewNode::label("nested")],
                },
                ViewNode::Button {
                    label: "Press".to_string(),
                    on_press: Callback::new(move || pressed.set(pressed.get() + 1)),
                },
            ],
        }
    }

    #[test]
    fn test_texts_are_collected_depth_first() {
        let tree = sample_tree(Rc::new(Cell::new(0)));
        assert_eq!(tree.texts(), vec!["Title", "nested"]);
    }

    #[test]
    fn test_find_button_invokes_handler() {
        let pressed = Rc::new(Cell::new(0));
        let tree = sample_tree(pressed.clone());

        tree.find_button("Press").unwrap().invoke();
        tree.find_button("Press").unwrap().invoke();

        assert_eq!(pressed.get(), 2);
        assert!(tree.find_button("Missing").is_none());
    }

    #[test]
    fn test_callback_debug_is_opaque() {
        let callback = Callback::new(|| {});
        assert_eq!(format!("{callback:?}"), "Callback");
    }
}
