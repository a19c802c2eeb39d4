// ApiServerCommand - HTTP service mode
// Copyright (C) 2025 iptags contributors
// Licensed under GPL-3.0

use super::Command;
use crate::{Args, Result};
use async_trait::async_trait;
use tracing::{error, info};

/// ApiServerCommand loads the tag database and serves lookups over HTTP
///
/// The database is loaded before the listener is bound; a load failure ends
/// the command with an error and nothing is served.
pub struct ApiServerCommand {
    args: Args,
}

impl ApiServerCommand {
    /// Create a new ApiServerCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ApiServerCommand {
    async fn execute(&self) -> Result<()> {
        use crate::api::ApiServer;

        info!("Starting iptags in API server mode");

        let config = self.args.resolve_config()?;
        let server = ApiServer::new(config).inspect_err(|e| {
            error!("Cannot start without a tag database: {}", e);
        })?;
        server.run().await?;

        Ok(())
    }

    fn name(&self) -> &'static str {
        "ApiServerCommand"
    }
}
