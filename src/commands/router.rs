// CommandRouter - Routes CLI arguments to appropriate Command
// Copyright (C) 2025 iptags contributors
// Licensed under GPL-3.0

use super::{ApiServerCommand, CheckCommand, Command, ConfigExampleCommand, LookupCommand};
use crate::{Args, Result};

/// CommandRouter determines which Command to execute based on CLI arguments
///
/// Priority order:
/// 1. Example configuration (--config-example)
/// 2. One-shot lookup (--lookup)
/// 3. Database check (--check)
/// 4. HTTP service (default)
pub struct CommandRouter;

impl CommandRouter {
    /// Route CLI arguments to the appropriate Command
    pub fn route(args: Args) -> Result<Box<dyn Command>> {
        Self::validate_routing(&args)?;

        if args.api_server.config_example.is_some() {
            return Ok(Box::new(ConfigExampleCommand::new(args)));
        }

        if args.lookup.is_some() {
            return Ok(Box::new(LookupCommand::new(args)));
        }

        if args.check {
            return Ok(Box::new(CheckCommand::new(args)));
        }

        Ok(Box::new(ApiServerCommand::new(args)))
    }

    /// Reject argument combinations that select more than one mode
    pub fn validate_routing(args: &Args) -> Result<()> {
        if args.lookup.is_some() && args.check {
            anyhow::bail!("Cannot combine --lookup with --check");
        }

        if args.pretty && args.lookup.is_none() {
            anyhow::bail!("--pretty only applies to --lookup");
        }

        Ok(())
    }
}
