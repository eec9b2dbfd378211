// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Save outcomes and the single-flight guard

use std::sync::atomic::{AtomicBool, Ordering};

/// Result of a save that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The change log was empty; the remote was not contacted
    NothingToSave,
    /// The remote accepted the payload
    Saved {
        /// Events confirmed and removed from the log
        submitted: usize,
        /// Events appended while the save was in flight
        remaining: usize,
    },
}

/// Marks a save as in flight for as long as it lives.
///
/// Dropping the guard, including by dropping the save future, clears the
/// flag.
pub(crate) struct SaveGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SaveGuard<'a> {
    /// Claim the flag, or `None` if another save holds it
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for SaveGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
