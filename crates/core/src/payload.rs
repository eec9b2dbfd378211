// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Body submitted to the remote navigation store

use crate::change::NavChangeEvent;
use crate::item::NavItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `{items, changes, timestamp}` sent on save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePayload {
    pub items: Vec<NavItem>,
    pub changes: Vec<NavChangeEvent>,
    pub timestamp: DateTime<Utc>,
}
