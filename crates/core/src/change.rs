// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Change events recorded for every mutation of the menu

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which field of the menu a change touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Visibility,
    Title,
    Reorder,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Visibility => write!(f, "visibility"),
            ChangeKind::Title => write!(f, "title"),
            ChangeKind::Reorder => write!(f, "reorder"),
        }
    }
}

/// Value carried in a change's `from`/`to` slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChangeValue {
    Flag(bool),
    Index(u64),
    Text(String),
}

impl fmt::Display for ChangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeValue::Flag(b) => write!(f, "{}", b),
            ChangeValue::Index(i) => write!(f, "{}", i),
            ChangeValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for ChangeValue {
    fn from(value: bool) -> Self {
        ChangeValue::Flag(value)
    }
}

impl From<usize> for ChangeValue {
    fn from(value: usize) -> Self {
        ChangeValue::Index(value as u64)
    }
}

impl From<&str> for ChangeValue {
    fn from(value: &str) -> Self {
        ChangeValue::Text(value.to_string())
    }
}

impl From<String> for ChangeValue {
    fn from(value: String) -> Self {
        ChangeValue::Text(value)
    }
}

/// Prior and new value of a change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ChangeValue>,
    pub to: ChangeValue,
}

/// Immutable record of a single mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavChangeEvent {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub item_id: String,
    pub timestamp: DateTime<Utc>,
    pub details: ChangeDetails,
}

impl NavChangeEvent {
    pub fn visibility(item_id: &str, from: bool, to: bool, at: DateTime<Utc>) -> Self {
        Self::new(ChangeKind::Visibility, item_id, Some(from.into()), to.into(), at)
    }

    pub fn title(item_id: &str, from: &str, to: &str, at: DateTime<Utc>) -> Self {
        Self::new(ChangeKind::Title, item_id, Some(from.into()), to.into(), at)
    }

    pub fn reorder(item_id: &str, from: usize, to: usize, at: DateTime<Utc>) -> Self {
        Self::new(ChangeKind::Reorder, item_id, Some(from.into()), to.into(), at)
    }

    fn new(
        kind: ChangeKind,
        item_id: &str,
        from: Option<ChangeValue>,
        to: ChangeValue,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            item_id: item_id.to_string(),
            timestamp,
            details: ChangeDetails { from, to },
        }
    }
}

impl fmt::Display for NavChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: ", self.kind, self.item_id)?;
        if let Some(from) = &self.details.from {
            write!(f, "{} -> ", from)?;
        }
        write!(f, "{}", self.details.to)
    }
}

#[cfg(test)]
#[path = "change_tests.rs"]
mod tests;
