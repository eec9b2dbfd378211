// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Navigation item records

use serde::{Deserialize, Serialize};

/// One navigation menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Stable identifier, never changes after creation
    pub id: String,
    pub title: String,
    pub url: String,
    pub visible: bool,
    /// Dense zero-based rank among all items
    pub order: u32,
}

impl NavItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            visible: true,
            order,
        }
    }
}

/// Built-in menu used when nothing usable is cached
pub fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::new("1", "Home", "/", 0),
        NavItem::new("2", "About", "/about", 1),
        NavItem::new("3", "Services", "/services", 2),
        NavItem::new("4", "Contact", "/contact", 3),
    ]
}
