// HTTP server configuration arguments
// Copyright (C) 2025 iptags contributors
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// HTTP server configuration
///
/// Values given here override the ones read from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct ApiServerArgs {
    /// Server host address
    #[arg(long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(short = 'p', long = "port", value_name = "PORT")]
    pub port: Option<u16>,

    /// Configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Enable permissive CORS for GET requests
    #[arg(long = "cors")]
    pub cors: bool,

    /// Enable Swagger UI documentation
    #[arg(long = "swagger")]
    pub swagger: bool,

    /// Generate example configuration file
    #[arg(long = "config-example", value_name = "FILE")]
    pub config_example: Option<PathBuf>,
}
