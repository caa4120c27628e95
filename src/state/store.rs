//! Process-wide state container with reactive update notifications.
//!
//! A `Store` owns the current state, applies actions through its `Reducer`,
//! and fans every effective change out to its subscribers. It is built once
//! by the composition root and shared by reference with every view.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use {
    async_channel::{Receiver, Sender, unbounded},
    parking_lot::RwLock,
    tracing::debug,
};

use crate::error::StoreError;

/// State transition logic plugged into a `Store`.
pub trait Reducer: Send + Sync + 'static {
    /// State held by the store.
    type State: Clone + Debug + Send + Sync + 'static;
    /// Actions accepted by `Store::dispatch`.
    type Action: Debug + Send + 'static;

    /// Builds the state the store starts with.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the initial state violates the reducer's
    /// invariants. The store is not constructed in that case.
    fn initial_state(&self) -> Result<Self::State, StoreError>;

    /// Applies `action` to `state` in place.
    ///
    /// Returns `true` if the state changed. Subscribers are only notified
    /// about changes.
    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> bool;
}

/// A state value together with the version it was observed at.
///
/// The version starts at 0 and increases by one per effective change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<S> {
    /// Number of effective changes applied before this state.
    pub version: u64,
    /// The state itself.
    pub state: S,
}

/// Thread-safe state container.
pub struct Store<R: Reducer> {
    reducer: R,
    current: RwLock<Snapshot<R::State>>,
    /// Active subscribers for manual broadcast fan-out.
    subscribers: RwLock<Vec<Sender<Snapshot<R::State>>>>,
}

impl<R: Reducer> Store<R> {
    /// Creates a store from a reducer and its initial state.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the reducer cannot produce an initial state.
    pub fn new(reducer: R) -> Result<Self, StoreError> {
        let state = reducer.initial_state()?;
        debug!(?state, "Store: initial state constructed");

        Ok(Self {
            reducer,
            current: RwLock::new(Snapshot { version: 0, state }),
            subscribers: RwLock::new(Vec::new()),
        })
    }

    /// Gets a copy of the current state.
    #[must_use]
    pub fn get_state(&self) -> R::State {
        self.current.read().state.clone()
    }

    /// Gets the current state and its version.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<R::State> {
        self.current.read().clone()
    }

    /// Reads a single value out of the current state without cloning all of it.
    pub fn select<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        selector(&self.current.read().state)
    }

    /// Gets the current state version.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.current.read().version
    }

    /// Applies an action and notifies subscribers if the state changed.
    ///
    /// Notifications are sent while the state lock is held, so every
    /// subscriber sees changes in version order.
    ///
    /// # Returns
    ///
    /// `true` if the action changed the state.
    pub fn dispatch(&self, action: R::Action) -> bool {
        debug!(?action, "Store: dispatching action");

        let mut current = self.current.write();
        if !self.reducer.reduce(&mut current.state, action) {
            return false;
        }

        current.version += 1;
        let delivered = self.broadcast(&current);
        debug!(
            version = current.version,
            delivered, "Store: state changed"
        );
        true
    }

    /// Subscribes to state changes.
    ///
    /// The receiver gets one `Snapshot` per effective change made after this
    /// call. Dropping it unsubscribes.
    pub fn subscribe(&self) -> Receiver<Snapshot<R::State>> {
        let (tx, rx) = unbounded();
        let mut subscribers = self.subscribers.write();
        subscribers.push(tx);
        debug!(subscribers = subscribers.len(), "Store: new subscription");
        rx
    }

    /// Number of registered subscribers. Closed ones are only pruned on the
    /// next change.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Sends a snapshot to every subscriber, dropping closed channels.
    fn broadcast(&self, snapshot: &Snapshot<R::State>) -> usize {
        let mut subscribers = self.subscribers.write();
        subscribers.retain(|tx| tx.try_send(snapshot.clone()).is_ok());
        subscribers.len()
    }
}

impl<R: Reducer> Debug for Store<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Store")
            .field("current", &*self.current.read())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
