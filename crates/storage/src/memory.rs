// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory cache slot for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::cache::{CacheError, CacheGateway};
use navedit_core::NavState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Cache slot that lives in memory and can simulate write failures
#[derive(Clone, Default)]
pub struct MemoryCache {
    slot: Arc<Mutex<Option<NavState>>>,
    writes: Arc<Mutex<Vec<NavState>>>,
    reject_writes: Arc<AtomicBool>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with a record
    pub fn with_state(state: NavState) -> Self {
        let cache = Self::default();
        *cache.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(state);
        cache
    }

    /// Make subsequent writes fail, as if storage quota were exhausted
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Current slot contents
    pub fn stored(&self) -> Option<NavState> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Every successful write, oldest first
    pub fn writes(&self) -> Vec<NavState> {
        self.writes.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl CacheGateway for MemoryCache {
    fn read(&self) -> Result<Option<NavState>, CacheError> {
        Ok(self.stored())
    }

    fn save(&self, state: &NavState) -> Result<(), CacheError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(CacheError::Rejected("quota exceeded".to_string()));
        }
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(state.clone());
        self.writes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(state.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
