// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Navigation editing session
//!
//! The session owns the menu state for its whole lifetime. Mutations update
//! it synchronously, append one change event and persist a detached copy to
//! the local cache. `save` submits the pending changes to the remote store
//! and, once accepted, drops exactly the events it submitted.

use crate::error::SaveError;
use crate::sync::{SaveGuard, SaveOutcome};
use navedit_adapters::RemoteAdapter;
use navedit_core::{
    Clock, EditError, MenuState, NavChangeEvent, NavItem, SavePayload,
};
use navedit_storage::CacheGateway;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// External collaborators of a session
pub struct SessionDeps<R, K> {
    pub remote: R,
    pub cache: K,
}

/// Handle to a navigation editing session.
///
/// Cloning the handle shares the same session.
pub struct NavSession<R, K, C> {
    shared: Arc<Shared<R, K, C>>,
}

struct Shared<R, K, C> {
    state: Mutex<MenuState>,
    remote: R,
    cache: K,
    clock: C,
    saving: AtomicBool,
}

impl<R, K, C> Clone for NavSession<R, K, C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R, K, C> NavSession<R, K, C>
where
    R: RemoteAdapter,
    K: CacheGateway,
    C: Clock,
{
    /// Start a session from the cached state, or the built-in menu if the
    /// cache is empty or unusable
    pub fn open(deps: SessionDeps<R, K>, clock: C) -> Self {
        let state = restore(&deps.cache);
        tracing::info!(
            items = state.store().len(),
            pending = state.log().len(),
            "navigation session opened"
        );
        Self::with_state(state, deps, clock)
    }

    /// Start a session from an explicit state
    pub fn with_state(state: MenuState, deps: SessionDeps<R, K>, clock: C) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                remote: deps.remote,
                cache: deps.cache,
                clock,
                saving: AtomicBool::new(false),
            }),
        }
    }

    /// Rank-ordered copy of all items
    pub fn snapshot(&self) -> Vec<NavItem> {
        self.lock_state().store().snapshot()
    }

    /// Copy of the unconfirmed change log
    pub fn pending_changes(&self) -> Vec<NavChangeEvent> {
        self.lock_state().log().drain_snapshot()
    }

    /// Payload a save would submit right now
    pub fn pending_payload(&self) -> SavePayload {
        let state = self.lock_state();
        payload_for(&state, &self.shared.clock)
    }

    /// Whether a save is waiting on the remote
    pub fn is_saving(&self) -> bool {
        self.shared.saving.load(Ordering::Acquire)
    }

    pub fn set_visibility(&self, id: &str, visible: bool) -> Result<NavChangeEvent, EditError> {
        self.mutate(|state, clock| state.set_visibility(id, visible, clock))
    }

    pub fn set_title(&self, id: &str, title: &str) -> Result<NavChangeEvent, EditError> {
        self.mutate(|state, clock| state.set_title(id, title, clock))
    }

    pub fn move_item(&self, from: usize, to: usize) -> Result<NavChangeEvent, EditError> {
        self.mutate(|state, clock| state.move_item(from, to, clock))
    }

    /// Submit pending changes to the remote store.
    ///
    /// Only one save runs at a time; a call made while another is in flight
    /// fails with [`SaveError::InProgress`]. Edits made during the round trip
    /// stay in the log for the next save.
    pub async fn save(&self) -> Result<SaveOutcome, SaveError> {
        let _guard = SaveGuard::acquire(&self.shared.saving).ok_or_else(|| {
            tracing::warn!("save requested while another save is in flight");
            SaveError::InProgress
        })?;

        let payload = {
            let state = self.lock_state();
            if state.log().is_empty() {
                tracing::debug!("nothing to save");
                return Ok(SaveOutcome::NothingToSave);
            }
            payload_for(&state, &self.shared.clock)
        };

        let result = self.shared.remote.submit(&payload).await;

        let mut state = self.lock_state();
        match result {
            Ok(()) => {
                let submitted = state.clear_confirmed(&payload.changes);
                self.persist(&state);
                let remaining = state.log().len();
                tracing::info!(submitted, remaining, "navigation changes saved");
                Ok(SaveOutcome::Saved {
                    submitted,
                    remaining,
                })
            }
            Err(e) => {
                self.persist(&state);
                tracing::warn!(
                    error = %e,
                    pending = state.log().len(),
                    "save failed, changes kept for retry"
                );
                Err(SaveError::Transport(e))
            }
        }
    }

    fn mutate<F>(&self, op: F) -> Result<NavChangeEvent, EditError>
    where
        F: FnOnce(&mut MenuState, &C) -> Result<NavChangeEvent, EditError>,
    {
        let mut state = self.lock_state();
        match op(&mut state, &self.shared.clock) {
            Ok(event) => {
                // Persist under the lock so cache writes land in mutation order
                self.persist(&state);
                tracing::debug!(change = %event, "change recorded");
                Ok(event)
            }
            Err(e) => {
                tracing::warn!(error = %e, "edit rejected");
                Err(e)
            }
        }
    }

    fn persist(&self, state: &MenuState) {
        if let Err(e) = self.shared.cache.save(&state.to_record()) {
            tracing::warn!(error = %e, "failed to persist navigation state");
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, MenuState> {
        self.shared.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn payload_for(state: &MenuState, clock: &impl Clock) -> SavePayload {
    SavePayload {
        items: state.store().snapshot(),
        changes: state.log().drain_snapshot(),
        timestamp: clock.now(),
    }
}

/// Load cached state, falling back to the built-in menu
fn restore(cache: &impl CacheGateway) -> MenuState {
    let Some(record) = cache.load() else {
        return MenuState::defaults();
    };

    match MenuState::from_record(record) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!(error = %e, "cached navigation state is invalid, using defaults");
            MenuState::defaults()
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
