// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered item store
//!
//! Items are kept physically sorted by rank, so `items[i].order == i` holds
//! after every operation. Each successful mutation yields the change event
//! describing it; the caller decides where the event goes.

use crate::change::NavChangeEvent;
use crate::clock::Clock;
use crate::item::{default_items, NavItem};
use std::collections::HashSet;
use thiserror::Error;

/// Errors from mutating the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("unknown item: {0}")]
    UnknownItem(String),
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Reasons an item set cannot seed a store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidItems {
    #[error("item with empty id")]
    EmptyId,
    #[error("duplicate item id: {0}")]
    DuplicateId(String),
}

/// Owns the ordered navigation items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<NavItem>,
}

impl ItemStore {
    /// Store seeded with the built-in menu
    pub fn defaults() -> Self {
        Self {
            items: default_items(),
        }
    }

    /// Build a store from an arbitrary item set.
    ///
    /// Ids must be unique and non-empty. Ranks are normalized: items are
    /// stably sorted by their stored `order` and renumbered `0..N-1`.
    pub fn from_items(mut items: Vec<NavItem>) -> Result<Self, InvalidItems> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.id.is_empty() {
                return Err(InvalidItems::EmptyId);
            }
            if !seen.insert(item.id.as_str()) {
                return Err(InvalidItems::DuplicateId(item.id.clone()));
            }
        }

        items.sort_by_key(|item| item.order);
        let mut store = Self { items };
        store.renumber();
        Ok(store)
    }

    /// Owned, rank-ordered copy of all items
    pub fn snapshot(&self) -> Vec<NavItem> {
        self.items.clone()
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Show or hide an item
    pub fn set_visibility(
        &mut self,
        id: &str,
        visible: bool,
        clock: &impl Clock,
    ) -> Result<NavChangeEvent, EditError> {
        let item = self.find_mut(id)?;
        let previous = item.visible;
        item.visible = visible;
        Ok(NavChangeEvent::visibility(id, previous, visible, clock.now()))
    }

    /// Rename an item
    pub fn set_title(
        &mut self,
        id: &str,
        title: &str,
        clock: &impl Clock,
    ) -> Result<NavChangeEvent, EditError> {
        let item = self.find_mut(id)?;
        let previous = std::mem::replace(&mut item.title, title.to_string());
        Ok(NavChangeEvent::title(id, &previous, title, clock.now()))
    }

    /// Move the item at `from` so that it ends up at `to`
    pub fn move_item(
        &mut self,
        from: usize,
        to: usize,
        clock: &impl Clock,
    ) -> Result<NavChangeEvent, EditError> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(EditError::IndexOutOfRange { index, len });
            }
        }

        let moved = self.items.remove(from);
        let event = NavChangeEvent::reorder(&moved.id, from, to, clock.now());
        self.items.insert(to, moved);
        self.renumber();
        Ok(event)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut NavItem, EditError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| EditError::UnknownItem(id.to_string()))
    }

    fn renumber(&mut self) {
        for (rank, item) in self.items.iter_mut().enumerate() {
            item.order = rank as u32;
        }
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
