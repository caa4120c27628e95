//! Libadwaita/GTK renderer for mounted view trees.
//!
//! Turns `ViewNode` descriptions into widgets and keeps a container in sync
//! with the store: every state change re-renders the root view and swaps the
//! container's content.

use {
    libadwaita::{
        glib::MainContext,
        gtk::{Align::Center, Box as GtkBox, Button, Label, Orientation::Vertical, Widget},
        prelude::{BoxExt, ButtonExt, Cast, WidgetExt},
    },
    tracing::debug,
};

use crate::{
    state::Reducer,
    ui::{root::MountedTree, view::ViewNode},
};

/// Builds the widget for a view node and its children.
pub fn build_widget(node: &ViewNode) -> Widget {
    match node {
        ViewNode::Label { text, heading } => {
            let label = Label::builder().label(text.as_str()).build();
            if *heading {
                label.add_css_class("title-1");
            }
            label.upcast::<Widget>()
        }
        ViewNode::Button { label, on_press } => {
            let button = Button::builder()
                .label(label.as_str())
                .halign(Center)
                .css_classes(["pill"])
                .build();
            let on_press = on_press.clone();
            button.connect_clicked(move |_| on_press.invoke());
            button.upcast::<Widget>()
        }
        ViewNode::Column { spacing, children } => {
            let column = GtkBox::builder()
                .orientation(Vertical)
                .spacing(*spacing)
                .build();
            for child in children {
                column.append(&build_widget(child));
            }
            column.upcast::<Widget>()
        }
    }
}

/// Shows `tree` inside `container` and re-renders it on every state change.
///
/// Must be called on the GTK main thread. The update task lives as long as
/// the store has the subscription open.
pub fn present<R: Reducer>(mut tree: MountedTree<R>, container: &GtkBox) {
    replace_content(container, tree.root());

    let receiver = tree.store().subscribe();
    let container = container.clone();

    MainContext::default().spawn_local(async move {
        while let Ok(snapshot) = receiver.recv().await {
            debug!(
                root_view = tree.root_name(),
                version = snapshot.version,
                "Re-rendering root view"
            );
            let root = tree.rerender();
            replace_content(&container, root);
        }
    });
}

fn replace_content(container: &GtkBox, node: &ViewNode) {
    while let Some(child) = container.first_child() {
        container.remove(&child);
    }
    container.append(&build_widget(node));
}
