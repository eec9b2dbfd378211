// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only views of the session

use crate::adapters::CliSession;
use crate::output::{self, OutputFormat};
use navedit_core::NavItem;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
#[serde(transparent)]
struct ItemRow(NavItem);

impl fmt::Display for ItemRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = &self.0;
        let visible = if item.visible { "yes" } else { "no" };
        write!(
            f,
            "{:<6} {:<8} {:<8} {:<20} {}",
            item.order, item.id, visible, item.title, item.url
        )
    }
}

/// Rows in display order, optionally only the visible ones
fn rows(items: Vec<NavItem>, visible_only: bool) -> Vec<ItemRow> {
    items
        .into_iter()
        .filter(|item| !visible_only || item.visible)
        .map(ItemRow)
        .collect()
}

/// Print the menu in display order
pub fn list(
    session: &CliSession,
    visible_only: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rows = rows(session.snapshot(), visible_only);

    if format == OutputFormat::Text {
        println!(
            "{:<6} {:<8} {:<8} {:<20} URL",
            "ORDER", "ID", "VISIBLE", "TITLE"
        );
    }
    output::print_list(&rows, format)
}

/// Print changes not yet confirmed by the remote
pub fn changes(session: &CliSession, format: OutputFormat) -> anyhow::Result<()> {
    let pending = session.pending_changes();

    if pending.is_empty() && format == OutputFormat::Text {
        println!("No pending changes");
        return Ok(());
    }
    output::print_list(&pending, format)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
