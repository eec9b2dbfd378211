// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Menu edits
//!
//! Each edit is applied to the cached state immediately and queued for the
//! next save.

use crate::adapters::CliSession;

pub fn set_visibility(session: &CliSession, id: &str, visible: bool) -> anyhow::Result<()> {
    let event = session.set_visibility(id, visible)?;
    println!("{}", event);
    Ok(())
}

pub fn rename(session: &CliSession, id: &str, title: &str) -> anyhow::Result<()> {
    let event = session.set_title(id, title)?;
    println!("{}", event);
    Ok(())
}

pub fn move_item(session: &CliSession, from: usize, to: usize) -> anyhow::Result<()> {
    let event = session.move_item(from, to)?;
    println!("{}", event);
    Ok(())
}
