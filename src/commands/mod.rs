// Commands module - Command Pattern implementation
// Copyright (C) 2025 iptags contributors
// Licensed under GPL-3.0

mod command;
mod router;

// Individual command implementations
mod api_server;
mod check;
mod config_example;
mod lookup;

pub use command::Command;
pub use router::CommandRouter;

pub use api_server::ApiServerCommand;
pub use check::CheckCommand;
pub use config_example::ConfigExampleCommand;
pub use lookup::LookupCommand;
