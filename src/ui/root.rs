//! Composition root wiring the state container into the view tree.
//!
//! `CompositionRoot::mount` obtains the store (injected, or built once from a
//! reducer), wraps the designated root view in a `ProviderScope` bound to it,
//! and returns the mounted tree for the renderer. Mounting is synchronous and
//! all-or-nothing: either a complete tree comes back or an
//! `InitializationError` does.

use std::{cell::RefCell, rc::Rc, sync::Arc};

use tracing::{debug, error, info};

use crate::{
    error::{InitializationError, StoreError},
    state::{Reducer, Store},
    ui::{
        provider::ProviderScope,
        view::{View, ViewNode},
    },
};

type StoreFactory<R> = Box<dyn Fn() -> Result<Store<R>, StoreError>>;

/// Where the composition root gets its store from.
enum StoreSource<R: Reducer> {
    /// Constructed by the caller and handed in.
    Injected(Arc<Store<R>>),
    /// Built on first successful mount and kept for every later one.
    Owned {
        factory: StoreFactory<R>,
        built: RefCell<Option<Arc<Store<R>>>>,
    },
}

/// Startup wiring for one store and one root view.
pub struct CompositionRoot<R: Reducer> {
    source: StoreSource<R>,
    /// The single view mounted under the provider scope.
    root_view: Rc<dyn View<R>>,
}

impl<R: Reducer + Clone> CompositionRoot<R> {
    /// Creates a root that builds its own store from `reducer` on first mount.
    pub fn new(reducer: R, root_view: impl View<R> + 'static) -> Self {
        Self::with_factory(move || Store::new(reducer.clone()), root_view)
    }
}

impl<R: Reducer> CompositionRoot<R> {
    /// Creates a root that builds its store with `factory` on first mount.
    ///
    /// A failed build is not remembered; the next mount calls `factory` again.
    pub fn with_factory(
        factory: impl Fn() -> Result<Store<R>, StoreError> + 'static,
        root_view: impl View<R> + 'static,
    ) -> Self {
        Self {
            source: StoreSource::Owned {
                factory: Box::new(factory),
                built: RefCell::new(None),
            },
            root_view: Rc::new(root_view),
        }
    }

    /// Creates a root around an already constructed store.
    pub fn with_store(store: Arc<Store<R>>, root_view: impl View<R> + 'static) -> Self {
        Self {
            source: StoreSource::Injected(store),
            root_view: Rc::new(root_view),
        }
    }

    /// Mounts the root view inside a provider scope.
    ///
    /// Every mount from the same root shares one store instance.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError` if the store has to be built and its
    /// construction fails. No tree is produced in that case.
    pub fn mount(&self) -> Result<MountedTree<R>, InitializationError> {
        let store = self.obtain_store()?;
        let scope = ProviderScope::new(store);
        let root = scope.render(self.root_view.as_ref());

        info!(
            root_view = self.root_view.name(),
            version = scope.store().version(),
            "Mounted root view"
        );

        Ok(MountedTree {
            scope,
            root_view: self.root_view.clone(),
            root,
        })
    }

    fn obtain_store(&self) -> Result<Arc<Store<R>>, InitializationError> {
        let (factory, built) = match &self.source {
            StoreSource::Injected(store) => return Ok(store.clone()),
            StoreSource::Owned { factory, built } => (factory, built),
        };

        if let Some(store) = built.borrow().as_ref() {
            debug!("Reusing existing store");
            return Ok(store.clone());
        }

        let store = Arc::new(factory().map_err(|source| {
            error!(error = %source, "State container construction failed");
            InitializationError::from(source)
        })?);
        *built.borrow_mut() = Some(store.clone());
        Ok(store)
    }
}

/// A mounted view tree: one provider scope with exactly one root view.
pub struct MountedTree<R: Reducer> {
    scope: ProviderScope<R>,
    root_view: Rc<dyn View<R>>,
    root: ViewNode,
}

impl<R: Reducer> MountedTree<R> {
    /// The store shared with every view in the tree.
    pub fn store(&self) -> &Arc<Store<R>> {
        self.scope.store()
    }

    /// Name of the mounted root view.
    pub fn root_name(&self) -> &'static str {
        self.root_view.name()
    }

    /// The root view's rendered output.
    pub fn root(&self) -> &ViewNode {
        &self.root
    }

    /// Renders the root view again against the current state.
    pub fn rerender(&mut self) -> &ViewNode {
        self.root = self.scope.render(self.root_view.as_ref());
        &self.root
    }
}
