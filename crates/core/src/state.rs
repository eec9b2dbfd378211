// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Menu state: the item store plus its pending change log

use crate::change::NavChangeEvent;
use crate::change_log::ChangeLog;
use crate::clock::Clock;
use crate::item::NavItem;
use crate::store::{EditError, InvalidItems, ItemStore};
use serde::{Deserialize, Serialize};

/// Persisted `{items, changes}` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub items: Vec<NavItem>,
    #[serde(default)]
    pub changes: Vec<NavChangeEvent>,
}

/// In-memory menu state owned by a single editing session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    store: ItemStore,
    log: ChangeLog,
}

impl MenuState {
    /// Built-in menu with an empty change log
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Rebuild state from a persisted record
    pub fn from_record(record: NavState) -> Result<Self, InvalidItems> {
        Ok(Self {
            store: ItemStore::from_items(record.items)?,
            log: ChangeLog::from(record.changes),
        })
    }

    /// Detached copy suitable for persisting
    pub fn to_record(&self) -> NavState {
        NavState {
            items: self.store.snapshot(),
            changes: self.log.drain_snapshot(),
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn log(&self) -> &ChangeLog {
        &self.log
    }

    /// Show or hide an item, logging the change
    pub fn set_visibility(
        &mut self,
        id: &str,
        visible: bool,
        clock: &impl Clock,
    ) -> Result<NavChangeEvent, EditError> {
        let event = self.store.set_visibility(id, visible, clock)?;
        Ok(self.record(event))
    }

    /// Rename an item, logging the change
    pub fn set_title(
        &mut self,
        id: &str,
        title: &str,
        clock: &impl Clock,
    ) -> Result<NavChangeEvent, EditError> {
        let event = self.store.set_title(id, title, clock)?;
        Ok(self.record(event))
    }

    /// Reorder by index, logging the change
    pub fn move_item(
        &mut self,
        from: usize,
        to: usize,
        clock: &impl Clock,
    ) -> Result<NavChangeEvent, EditError> {
        let event = self.store.move_item(from, to, clock)?;
        Ok(self.record(event))
    }

    /// Drop the confirmed head of the change log
    pub fn clear_confirmed(&mut self, snapshot: &[NavChangeEvent]) -> usize {
        self.log.clear_confirmed(snapshot)
    }

    fn record(&mut self, event: NavChangeEvent) -> NavChangeEvent {
        self.log.append(event.clone());
        event
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
