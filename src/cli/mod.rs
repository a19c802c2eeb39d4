// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 iptags contributors
// Licensed under GPL-3.0

use crate::api::ApiConfig;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

mod api_server_args;

pub use api_server_args::ApiServerArgs;

/// iptags - Tag IP addresses by the CIDR networks that contain them
///
/// Without a mode flag the HTTP service is started. `--lookup` and `--check`
/// work against the same database without opening a socket.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
#[command(name = "iptags")]
pub struct Args {
    /// Tag database (JSON array of {"tag", "ip_network"} records)
    #[arg(short = 'd', long = "database", value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Print the tags of one address as JSON and exit
    #[arg(short = 'l', long = "lookup", value_name = "IP")]
    pub lookup: Option<String>,

    /// Pretty-print JSON output of --lookup
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Load the database, report malformed entries and exit
    #[arg(long = "check")]
    pub check: bool,

    #[command(flatten)]
    pub api_server: ApiServerArgs,
}

impl Args {
    /// Build the effective configuration: config file (or defaults) with
    /// command line overrides applied on top
    pub fn resolve_config(&self) -> anyhow::Result<ApiConfig> {
        let mut config = match &self.api_server.config {
            Some(path) => {
                let path_str = path
                    .to_str()
                    .ok_or_else(|| anyhow::anyhow!("Invalid config file path"))?;
                ApiConfig::from_file(path_str)
                    .with_context(|| format!("Failed to load configuration from {}", path.display()))?
            }
            None => ApiConfig::default(),
        };

        if let Some(database) = &self.database {
            config.database_path = database.clone();
        }
        if let Some(host) = &self.api_server.host {
            config.host = host.clone();
        }
        if let Some(port) = self.api_server.port {
            config.port = port;
        }
        if let Some(timeout) = self.api_server.timeout {
            config.request_timeout_seconds = timeout;
        }
        config.enable_cors = self.api_server.cors || config.enable_cors;
        config.enable_swagger = self.api_server.swagger || config.enable_swagger;

        config.validate()?;
        Ok(config)
    }
}
