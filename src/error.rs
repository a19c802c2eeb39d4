// Error types for iptags
//
// Structured error types using thiserror. Loading the tag database and parsing
// a queried address are the only fallible operations of the core; everything
// else propagates through anyhow at the binary level.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the tag database at startup
///
/// Both variants are fatal: the service must not start serving traffic.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Backing source could not be opened or read
    #[error("Error loading database {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Backing source is not a valid record sequence
    #[error("Error decoding JSON data from {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the source that failed to load
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::NotFound { path, .. } | LoadError::Malformed { path, .. } => path,
        }
    }
}

/// Failure to interpret a queried address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Text is not a valid IPv4 or IPv6 literal
    #[error("Invalid IP address format: {input:?}")]
    InvalidFormat { input: String },
}

/// Failure to parse the network text of a single tag entry
///
/// Never surfaced to callers; an entry carrying one of these is skipped by
/// every query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkParseError {
    /// Not a CIDR literal or bare address
    #[error("invalid network literal {text:?}: {reason}")]
    Syntax { text: String, reason: String },

    /// Valid literal, but bits are set below the prefix length
    #[error("{text:?} has host bits set")]
    HostBitsSet { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_found_message_names_path() {
        let err = LoadError::NotFound {
            path: PathBuf::from("/srv/ip_base.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        let msg = err.to_string();
        assert!(msg.contains("Error loading database"));
        assert!(msg.contains("/srv/ip_base.json"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_malformed_preserves_source() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err = LoadError::Malformed {
            path: PathBuf::from("ip_base.json"),
            source: json_err,
        };

        assert!(err.to_string().starts_with("Error decoding JSON data"));
        assert_eq!(err.path(), std::path::Path::new("ip_base.json"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_format_message() {
        let err = AddressError::InvalidFormat {
            input: "198.51..22".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid IP address format: \"198.51..22\"");
    }

    #[test]
    fn test_host_bits_message() {
        let err = NetworkParseError::HostBitsSet {
            text: "192.0.2.10/24".to_string(),
        };
        assert!(err.to_string().contains("host bits"));
    }
}
