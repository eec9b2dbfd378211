// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! navedit-engine: the navigation editing session
//!
//! Ties the menu state to the local cache and the remote store, and runs
//! saves one at a time.

mod error;
mod session;
mod sync;

pub use error::SaveError;
pub use session::{NavSession, SessionDeps};
pub use sync::SaveOutcome;
