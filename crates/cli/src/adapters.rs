// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session factory for CLI commands

use crate::config::Config;
use async_trait::async_trait;
use navedit_adapters::{HttpRemote, RemoteAdapter, RemoteError, TracedRemote};
use navedit_core::{SavePayload, SystemClock};
use navedit_engine::{NavSession, SessionDeps};
use navedit_storage::JsonFileCache;

/// Session type used by every command
pub type CliSession = NavSession<CliRemote, JsonFileCache, SystemClock>;

/// Remote store as configured, or a placeholder that refuses to save.
///
/// Local edits never need the remote, so configuration problems that only
/// matter for saving surface when a save is attempted.
#[derive(Clone)]
pub enum CliRemote {
    Http(TracedRemote<HttpRemote>),
    /// The remote is configured but its credential could not be resolved
    Unavailable(String),
    Unconfigured,
}

#[async_trait]
impl RemoteAdapter for CliRemote {
    async fn submit(&self, payload: &SavePayload) -> Result<(), RemoteError> {
        match self {
            CliRemote::Http(remote) => remote.submit(payload).await,
            CliRemote::Unavailable(reason) => Err(RemoteError::Transport(reason.clone())),
            CliRemote::Unconfigured => Err(RemoteError::Transport(
                "no remote endpoint configured (add a [remote] section to navctl.toml, or use --dry-run)"
                    .to_string(),
            )),
        }
    }
}

/// Build the remote for `config`, resolving the token through `lookup`
pub fn cli_remote(config: &Config, lookup: impl FnOnce(&str) -> Option<String>) -> CliRemote {
    let Some(remote) = &config.remote else {
        return CliRemote::Unconfigured;
    };

    match remote.token_with(lookup) {
        Ok(token) => CliRemote::Http(TracedRemote::new(HttpRemote::new(
            remote.endpoint.clone(),
            token,
            remote.timeout,
        ))),
        Err(e) => {
            tracing::debug!(error = %e, "remote unavailable, saving disabled");
            CliRemote::Unavailable(e.to_string())
        }
    }
}

/// Open a session against the configured cache and remote
pub fn open_session(config: &Config) -> CliSession {
    let deps = SessionDeps {
        remote: cli_remote(config, |name| std::env::var(name).ok()),
        cache: JsonFileCache::new(&config.cache_path),
    };
    NavSession::open(deps, SystemClock)
}

#[cfg(test)]
#[path = "adapters_tests.rs"]
mod tests;
