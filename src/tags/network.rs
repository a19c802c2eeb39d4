// Address and network literal parsing

use crate::error::{AddressError, NetworkParseError};
use ipnetwork::{ipv4_mask_to_prefix, IpNetwork, Ipv4Network};
use std::net::{IpAddr, Ipv4Addr};

/// Parse a queried address as an IPv4 or IPv6 literal
///
/// IPv4 must be dotted-quad without leading zeros; IPv6 follows RFC 4291 text
/// form, including an embedded IPv4 tail. No trimming is applied.
pub fn parse_address(text: &str) -> Result<IpAddr, AddressError> {
    text.parse::<IpAddr>()
        .map_err(|_| AddressError::InvalidFormat {
            input: text.to_string(),
        })
}

/// Parse the network text of a tag entry
///
/// Accepts `addr/prefix` and a bare address (host network). The prefix is
/// either decimal digits or, for IPv4, a dotted netmask or hostmask. The base
/// address must not have bits set below the prefix length, so `192.0.2.10/24`
/// is rejected rather than silently widened to `192.0.2.0/24`.
pub fn parse_network(text: &str) -> Result<IpNetwork, NetworkParseError> {
    let network = match text.split_once('/') {
        Some((addr, mask)) if !mask.is_empty() && !mask.bytes().all(|b| b.is_ascii_digit()) => {
            parse_with_mask(text, addr, mask)?
        }
        _ => text
            .parse::<IpNetwork>()
            .map_err(|e| syntax_error(text, e.to_string()))?,
    };

    if network.network() != network.ip() {
        return Err(NetworkParseError::HostBitsSet {
            text: text.to_string(),
        });
    }

    Ok(network)
}

/// IPv4 network with a dotted mask; netmask is tried before hostmask
fn parse_with_mask(text: &str, addr: &str, mask: &str) -> Result<IpNetwork, NetworkParseError> {
    let addr: Ipv4Addr = addr
        .parse()
        .map_err(|_| syntax_error(text, "dotted masks require an IPv4 address".to_string()))?;
    let mask: Ipv4Addr = mask.parse().map_err(|_| {
        syntax_error(text, "prefix must be decimal digits or a dotted mask".to_string())
    })?;

    let prefix = ipv4_mask_to_prefix(mask)
        .or_else(|_| ipv4_mask_to_prefix(Ipv4Addr::from(!u32::from(mask))))
        .map_err(|_| syntax_error(text, format!("{} is neither a netmask nor a hostmask", mask)))?;

    Ipv4Network::new(addr, prefix)
        .map(IpNetwork::V4)
        .map_err(|e| syntax_error(text, e.to_string()))
}

fn syntax_error(text: &str, reason: String) -> NetworkParseError {
    NetworkParseError::Syntax {
        text: text.to_string(),
        reason,
    }
}
