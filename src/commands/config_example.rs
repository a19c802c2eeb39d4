// ConfigExampleCommand - Write an example configuration file
// Copyright (C) 2025 iptags contributors
// Licensed under GPL-3.0

use super::Command;
use crate::api::ApiConfig;
use crate::{Args, Result};
use async_trait::async_trait;

/// ConfigExampleCommand writes the default configuration as TOML
pub struct ConfigExampleCommand {
    args: Args,
}

impl ConfigExampleCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ConfigExampleCommand {
    async fn execute(&self) -> Result<()> {
        let path = self
            .args
            .api_server
            .config_example
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No output path given to --config-example"))?;

        ApiConfig::create_example(
            path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Invalid file path"))?,
        )?;
        println!("✓ Example configuration saved to: {}", path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ConfigExampleCommand"
    }
}
