// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file-backed cache slot

use crate::cache::{CacheError, CacheGateway};
use navedit_core::NavState;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Cache slot stored as a single pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CacheGateway for JsonFileCache {
    fn read(&self) -> Result<Option<NavState>, CacheError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&self, state: &NavState) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Stage then rename so readers never see a partial file
        let staging = self.staging_path();
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&staging, json)?;
        fs::rename(&staging, &self.path)?;

        tracing::trace!(
            path = %self.path.display(),
            items = state.items.len(),
            changes = state.changes.len(),
            "cache written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
