// LookupCommand - One-shot tag lookup
// Copyright (C) 2025 iptags contributors
// Licensed under GPL-3.0

use super::Command;
use crate::output::json::generate_json;
use crate::tags::TagDatabase;
use crate::{Args, Result};
use async_trait::async_trait;

/// LookupCommand prints the tags of a single address as a JSON array
pub struct LookupCommand {
    args: Args,
}

impl LookupCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Resolve the tags without printing them
    pub fn run_lookup(&self) -> Result<Vec<String>> {
        let address = self
            .args
            .lookup
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("No address given to --lookup"))?;

        let config = self.args.resolve_config()?;
        let database = TagDatabase::load(&config.database_path)?;
        Ok(database.tags_for_address(address)?)
    }
}

#[async_trait]
impl Command for LookupCommand {
    async fn execute(&self) -> Result<()> {
        let tags = self.run_lookup()?;
        println!("{}", generate_json(&tags, self.args.pretty)?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LookupCommand"
    }
}
