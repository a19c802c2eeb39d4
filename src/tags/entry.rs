// Tag entries

use crate::error::NetworkParseError;
use crate::tags::network::parse_network;
use ipnetwork::IpNetwork;
use serde::Deserialize;
use std::net::IpAddr;

/// A record as it appears in the database source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagRecord {
    /// Label applied to every address inside `ip_network`
    pub tag: String,

    /// CIDR literal or bare address
    pub ip_network: String,
}

/// A loaded tag entry
///
/// The network text is parsed once on construction and the outcome is kept
/// alongside the original text. An entry whose text failed to parse stays in
/// the database but never matches.
#[derive(Debug, Clone)]
pub struct TagEntry {
    tag: String,
    ip_network: String,
    network: Result<IpNetwork, NetworkParseError>,
}

impl TagEntry {
    pub fn new(tag: impl Into<String>, ip_network: impl Into<String>) -> Self {
        let ip_network = ip_network.into();
        let network = parse_network(&ip_network);

        Self {
            tag: tag.into(),
            ip_network,
            network,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Network text exactly as loaded
    pub fn ip_network(&self) -> &str {
        &self.ip_network
    }

    /// Parsed network, if the text was valid
    pub fn network(&self) -> Option<&IpNetwork> {
        self.network.as_ref().ok()
    }

    /// Why the network text was rejected, if it was
    pub fn parse_error(&self) -> Option<&NetworkParseError> {
        self.network.as_ref().err()
    }

    pub fn is_valid(&self) -> bool {
        self.network.is_ok()
    }

    /// Containment test; false for malformed entries and across families
    pub fn contains(&self, address: IpAddr) -> bool {
        match &self.network {
            Ok(network) => network.contains(address),
            Err(_) => false,
        }
    }
}

impl From<TagRecord> for TagEntry {
    fn from(record: TagRecord) -> Self {
        Self::new(record.tag, record.ip_network)
    }
}
