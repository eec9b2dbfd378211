// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Save pending changes to the remote store

use crate::adapters::CliSession;
use navedit_engine::SaveOutcome;

pub async fn save(session: &CliSession, dry_run: bool) -> anyhow::Result<()> {
    if dry_run {
        let payload = session.pending_payload();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    match session.save().await? {
        SaveOutcome::NothingToSave => println!("Nothing to save"),
        SaveOutcome::Saved {
            submitted,
            remaining,
        } => {
            println!("Saved {} change(s)", submitted);
            if remaining > 0 {
                println!("{} change(s) still pending", remaining);
            }
        }
    }
    Ok(())
}
