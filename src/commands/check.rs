// CheckCommand - Database validation
// Copyright (C) 2025 iptags contributors
// Licensed under GPL-3.0

use super::Command;
use crate::tags::TagDatabase;
use crate::{Args, Result};
use async_trait::async_trait;
use colored::Colorize;

/// CheckCommand loads the database and lists the entries every query will skip
///
/// Malformed entries do not make the check fail; only an unreadable or
/// structurally invalid database does.
pub struct CheckCommand {
    args: Args,
}

impl CheckCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for CheckCommand {
    async fn execute(&self) -> Result<()> {
        let config = self.args.resolve_config()?;
        let database = TagDatabase::load(&config.database_path)?;

        println!(
            "{} {}: {} entries, {} usable",
            "✓".green(),
            config.database_path.display(),
            database.len(),
            database.valid_count()
        );

        let malformed = database.malformed_count();
        if malformed > 0 {
            println!(
                "{} {} entries will never match:",
                "!".yellow(),
                malformed
            );
            for entry in database.malformed_entries() {
                let reason = entry
                    .parse_error()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                println!("  {:?} -> {:?}: {}", entry.tag(), entry.ip_network(), reason);
            }
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "CheckCommand"
    }
}
