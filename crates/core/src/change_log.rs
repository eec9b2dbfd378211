// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pending change log
//!
//! Holds every change event since the last confirmed save. Events are only
//! ever appended at the tail; the head is trimmed once a remote save confirms
//! a snapshot of it.

use crate::change::NavChangeEvent;
use serde::{Deserialize, Serialize};

/// Append-only sequence of unconfirmed change events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeLog {
    events: Vec<NavChangeEvent>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event to the tail
    pub fn append(&mut self, event: NavChangeEvent) {
        self.events.push(event);
    }

    /// Copy of the full sequence, used to build a save payload
    pub fn drain_snapshot(&self) -> Vec<NavChangeEvent> {
        self.events.clone()
    }

    /// Remove the head events that a confirmed save included.
    ///
    /// Only the prefix matching `snapshot` is removed, so events appended
    /// after the snapshot was taken survive. Returns how many were removed.
    pub fn clear_confirmed(&mut self, snapshot: &[NavChangeEvent]) -> usize {
        let confirmed = self
            .events
            .iter()
            .zip(snapshot)
            .take_while(|(held, sent)| held == sent)
            .count();

        if confirmed < snapshot.len() {
            tracing::warn!(
                confirmed,
                snapshot_len = snapshot.len(),
                "change log diverged from confirmed snapshot"
            );
        }

        self.events.drain(..confirmed);
        confirmed
    }

    pub fn events(&self) -> &[NavChangeEvent] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavChangeEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl From<Vec<NavChangeEvent>> for ChangeLog {
    fn from(events: Vec<NavChangeEvent>) -> Self {
        Self { events }
    }
}

#[cfg(test)]
#[path = "change_log_tests.rs"]
mod tests;
