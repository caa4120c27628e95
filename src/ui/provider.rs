//! Provider scope exposing the state container to a view subtree.
//!
//! The scope owns the only reference the tree needs. Every view receives a
//! borrowed `ViewContext` from its parent and reaches the store through it,
//! so the dependency stays visible in each `render` signature without being
//! threaded as an extra argument.

use std::sync::Arc;

use crate::{
    state::{Reducer, Store},
    ui::view::{Callback, View, ViewNode},
};

/// Wrapper binding a view subtree to one store.
pub struct ProviderScope<R: Reducer> {
    store: Arc<Store<R>>,
}

impl<R: Reducer> ProviderScope<R> {
    /// Creates a scope bound to `store`.
    pub fn new(store: Arc<Store<R>>) -> Self {
        Self { store }
    }

    /// The store this scope provides.
    pub fn store(&self) -> &Arc<Store<R>> {
        &self.store
    }

    /// Renders `child` with this scope's context.
    pub fn render(&self, child: &dyn View<R>) -> ViewNode {
        child.render(&self.context())
    }

    /// Context handed to the top of the subtree.
    pub fn context(&self) -> ViewContext<'_, R> {
        ViewContext { store: &self.store }
    }
}

/// Read-only context passed down through `View::render`.
pub struct ViewContext<'a, R: Reducer> {
    store: &'a Arc<Store<R>>,
}

impl<R: Reducer> Clone for ViewContext<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Reducer> Copy for ViewContext<'_, R> {}

impl<'a, R: Reducer> ViewContext<'a, R> {
    /// The store provided to this subtree.
    pub fn store(&self) -> &'a Arc<Store<R>> {
        self.store
    }

    /// Reads a value from the current state.
    pub fn select<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        self.store.select(selector)
    }

    /// Builds a callback dispatching `action` each time it runs.
    pub fn dispatcher(&self, action: R::Action) -> Callback
    where
        R::Action: Clone,
    {
        let store = self.store.clone();
        Callback::new(move || {
            store.dispatch(action.clone());
        })
    }

    /// Renders a descendant view with the same context.
    pub fn render(&self, child: &dyn View<R>) -> ViewNode {
        child.render(self)
    }
}
