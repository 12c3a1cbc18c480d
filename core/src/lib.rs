/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod access;
pub mod consts;
pub mod database;
pub mod input;
pub mod permission;
pub mod role;
pub mod types;

use anyhow::{Context, Result};
use clap::Parser;
use database::connect_db;
use input::load_secret;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use types::*;

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},hirebase_core={level},web={level},sqlx=warn",
            level = log_level
        ))
    });

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let jwt_secret = load_secret(&cli.jwt_secret_file);
    if jwt_secret.is_empty() {
        anyhow::bail!("JWT secret file {} is empty or unreadable", cli.jwt_secret_file);
    }

    tracing::info!("Starting HireBase server on {}:{}", cli.ip, cli.port);

    let db = connect_db(&cli)
        .await
        .context("Failed to initialize database")?;

    Ok(Arc::new(ServerState {
        db,
        cli,
        jwt_secret,
    }))
}
