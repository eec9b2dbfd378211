// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! navctl - navigation menu editor

mod adapters;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{edit, list, save};
use config::Config;
use output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "navctl",
    version,
    about = "Edit a site navigation menu and sync it to the server"
)]
struct Cli {
    /// Config file (defaults to ./navctl.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Local cache file, overriding the config
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List menu items in display order
    List {
        #[arg(long)]
        json: bool,
        /// Only items shown on the public menu
        #[arg(long)]
        visible: bool,
    },
    /// Make an item visible
    Show {
        /// Item id
        id: String,
    },
    /// Hide an item
    Hide {
        /// Item id
        id: String,
    },
    /// Change an item's title
    Rename {
        /// Item id
        id: String,
        title: String,
    },
    /// Move the item at one position to another
    Move { from: usize, to: usize },
    /// Show changes not yet saved to the server
    Changes {
        #[arg(long)]
        json: bool,
    },
    /// Save pending changes to the server
    Save {
        /// Print the payload instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(cache) = cli.cache {
        config.cache_path = cache;
    }
    let session = adapters::open_session(&config);

    match cli.command {
        Commands::List { json, visible } => {
            list::list(&session, visible, OutputFormat::from_json_flag(json))?
        }
        Commands::Show { id } => edit::set_visibility(&session, &id, true)?,
        Commands::Hide { id } => edit::set_visibility(&session, &id, false)?,
        Commands::Rename { id, title } => edit::rename(&session, &id, &title)?,
        Commands::Move { from, to } => edit::move_item(&session, from, to)?,
        Commands::Changes { json } => {
            list::changes(&session, OutputFormat::from_json_flag(json))?
        }
        Commands::Save { dry_run } => save::save(&session, dry_run).await?,
    }

    Ok(())
}

/// Log to stderr so stdout stays parseable
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
