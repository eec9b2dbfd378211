// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! navedit-core: navigation menu model
//!
//! This crate provides:
//! - The ordered item store and its dense-rank invariant
//! - Change events and the pending change log
//! - The persisted `{items, changes}` record and the remote save payload

pub mod clock;

pub mod change;
pub mod change_log;
pub mod item;
pub mod payload;
pub mod state;
pub mod store;

pub use change::{ChangeDetails, ChangeKind, ChangeValue, NavChangeEvent};
pub use change_log::ChangeLog;
pub use clock::{Clock, FakeClock, SystemClock};
pub use item::{default_items, NavItem};
pub use payload::SavePayload;
pub use state::{MenuState, NavState};
pub use store::{EditError, InvalidItems, ItemStore};
