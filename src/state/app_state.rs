//! Application state mounted by the composition root.
//!
//! The state is intentionally small: a single counter the root view reads
//! and changes through the store.

use crate::{
    error::StoreError,
    state::store::{Reducer, Store},
};

/// Global application state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Counter shown by the root view.
    pub count: u64,
}

/// Actions accepted by the application store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Adds one to the counter.
    Increment,
    /// Subtracts one from the counter, stopping at zero.
    Decrement,
    /// Restores the counter to the value the store started with.
    Reset,
}

/// Reducer for `AppState`.
#[derive(Debug, Clone, Default)]
pub struct AppReducer {
    seed: AppState,
}

/// The store type the application mounts.
pub type AppStore = Store<AppReducer>;

impl AppReducer {
    /// Creates a reducer whose initial state is empty (`count == 0`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reducer whose initial state starts the counter at `count`.
    #[must_use]
    pub fn with_initial_count(count: u64) -> Self {
        Self {
            seed: AppState { count },
        }
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn initial_state(&self) -> Result<AppState, StoreError> {
        Ok(self.seed.clone())
    }

    fn reduce(&self, state: &mut AppState, action: AppAction) -> bool {
        let next = match action {
            AppAction::Increment => state.count.saturating_add(1),
            AppAction::Decrement => state.count.saturating_sub(1),
            AppAction::Reset => self.seed.count,
        };

        if next == state.count {
            return false;
        }
        state.count = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{
        Store,
        app_state::{
            AppAction::{Decrement, Increment, Reset},
            AppReducer, AppState,
        },
    };

    #[test]
    fn test_default_state_is_empty() {
        let store = Store::new(AppReducer::new()).unwrap();
        assert_eq!(store.get_state(), AppState { count: 0 });
    }

    #[test]
    fn test_increment_and_decrement() {
        let store = Store::new(AppReducer::new()).unwrap();

        assert!(store.dispatch(Increment));
        assert!(store.dispatch(Increment));
        assert!(store.dispatch(Decrement));

        assert_eq!(store.select(|state| state.count), 1);
        assert_eq!(store.version(), 3);
    }

    #[test]
    fn test_decrement_stops_at_zero() {
        let store = Store::new(AppReducer::new()).unwrap();

        assert!(!store.dispatch(Decrement));
        assert_eq!(store.select(|state| state.count), 0);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_reset_restores_seed() {
        let store = Store::new(AppReducer::with_initial_count(5)).unwrap();

        assert!(!store.dispatch(Reset));
        store.dispatch(Increment);
        store.dispatch(Increment);
        assert!(store.dispatch(Reset));

        assert_eq!(store.select(|state| state.count), 5);
    }
}
