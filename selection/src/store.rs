//! Explicit single-writer holder for the application state.
//!
//! There is no ambient global: whoever owns the `Store` owns the state.
//! Dispatch is serial and synchronous; each action runs the pure reducer to
//! completion before the next one is looked at. Everything outside the
//! store reads the state, only the store replaces it.

use tracing::trace;

use crate::core::action::Action;
use crate::core::reduce::reduce;
use crate::core::state::ApplicationState;

pub struct Store {
    state: ApplicationState,
}

impl Store {
    /// Holder seeded with the fixed startup default.
    pub fn new() -> Self {
        Self::with_state(ApplicationState::default())
    }

    /// Holder seeded with a previously captured snapshot.
    pub fn with_state(state: ApplicationState) -> Self {
        Self { state }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// Consume the holder, yielding the final state.
    pub fn into_state(self) -> ApplicationState {
        self.state
    }

    /// Apply one action, replacing the held state with the reducer's result.
    pub fn dispatch(&mut self, action: Action) {
        trace!(?action, "dispatch");
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
