// Command trait - Defines the interface for all command implementations
// Copyright (C) 2025 iptags contributors
// Licensed under GPL-3.0

use crate::Result;
use async_trait::async_trait;

/// One operational mode of the binary
///
/// Each command validates its own preconditions, runs, and reports failure
/// through the returned `Result`.
#[async_trait]
pub trait Command: Send + Sync {
    /// Execute the command asynchronously
    async fn execute(&self) -> Result<()>;

    /// Get a human-readable name for this command (for logging/debugging)
    fn name(&self) -> &'static str;
}
