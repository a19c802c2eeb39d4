// iptags - IP address tagging service
// Copyright (C) 2025 iptags contributors
// Licensed under GPL-3.0

//! iptags answers "which tags apply to this IP address?".
//!
//! A [`TagDatabase`] holds `(tag, network)` entries loaded once at startup.
//! Looking up an address returns the tags of every entry whose CIDR network
//! contains it, deduplicated and sorted. Entries whose network text does not
//! parse are kept but never match. The [`api`] module serves lookups over
//! HTTP as JSON and as an HTML report.

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod tags;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::error::{AddressError, LoadError, NetworkParseError};
pub use crate::tags::{TagDatabase, TagEntry, TagRecord};

/// Result type for iptags command operations
pub type Result<T> = anyhow::Result<T>;

/// Error type for iptags command operations
pub use anyhow::Error;
