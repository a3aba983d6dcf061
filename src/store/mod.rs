//! Application state container.
//!
//! `Store` is the single owner of `AppState`. `Dispatch::dispatch` is the
//! only way to change it: the root reducer runs under the write lock, so
//! readers see either the old state or the new one, never a mix.

mod action;
mod state;

pub use action::Action;
pub use state::{AppReducer, AppState};

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::ui::mvi::Reducer;

/// Entry point for state mutation, injected into every operation.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: Action);
}

type Listener = Arc<dyn Fn(&'static str) + Send + Sync>;

/// Shared handle to the application state.
#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store and run the bootstrap `Init` message through it.
    pub fn new() -> Self {
        let store = Self {
            state: Arc::new(RwLock::new(AppState::default())),
            listeners: Arc::new(Mutex::new(Vec::new())),
        };
        store.dispatch(Action::Init);
        store
    }

    /// Clone of the current state. Slices are shared, so this is cheap.
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    /// Run `f` against the current state under the read lock.
    pub fn select<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.read())
    }

    /// Register a callback invoked with the action type after every dispatch.
    ///
    /// Callbacks run with no lock held, so they may read, dispatch or
    /// subscribe.
    pub fn subscribe(&self, listener: impl Fn(&'static str) + Send + Sync + 'static) {
        self.listeners.lock().push(Arc::new(listener));
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        let action_type = action.action_type();
        {
            let mut guard = self.state.write();
            let current = std::mem::take(&mut *guard);
            *guard = AppReducer::reduce(current, action);
        }
        tracing::trace!("reduced {}", action_type);

        let listeners = self.listeners.lock().clone();
        for listener in listeners {
            listener(action_type);
        }
    }
}
