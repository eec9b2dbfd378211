// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the editing session

use navedit_adapters::RemoteError;
use thiserror::Error;

/// Errors that can end a save attempt
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("a save is already in progress")]
    InProgress,
    #[error("remote save failed: {0}")]
    Transport(#[from] RemoteError),
}
