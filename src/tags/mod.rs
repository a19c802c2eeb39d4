// Tag database module
// Matches IP addresses against tagged CIDR networks

pub mod database;
pub mod entry;
pub mod network;

pub use database::TagDatabase;
pub use entry::{TagEntry, TagRecord};
pub use network::{parse_address, parse_network};
