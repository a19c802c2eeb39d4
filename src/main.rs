// iptags - IP address tagging service
// Copyright (C) 2025 iptags contributors
// Licensed under GPL-3.0

use anyhow::Result;
use clap::Parser;
use iptags::commands::CommandRouter;
use iptags::Args;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let command = CommandRouter::route(args)?;
    debug!("Executing {}", command.name());
    command.execute().await
}
