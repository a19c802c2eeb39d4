// Tag Database
//
// Immutable collection of tagged networks, loaded once at startup and shared
// read-only by every query.

use crate::error::{AddressError, LoadError};
use crate::tags::entry::{TagEntry, TagRecord};
use crate::tags::network::parse_address;
use std::collections::BTreeSet;
use std::io::Read;
use std::net::IpAddr;
use std::path::Path;
use tracing::{debug, info};

/// In-memory tag database
#[derive(Debug, Clone, Default)]
pub struct TagDatabase {
    entries: Vec<TagEntry>,
}

impl TagDatabase {
    /// Load the database from a JSON file of `{tag, ip_network}` records
    ///
    /// Records whose network text does not parse are kept and skipped by every
    /// query; only an unreadable file or a structurally invalid document fails
    /// the load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        let content = std::fs::read(path).map_err(|source| LoadError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<TagRecord> =
            serde_json::from_slice(&content).map_err(|source| LoadError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let db = Self::from_records(records);
        info!(
            "Loaded {} tag entries from {} ({} malformed)",
            db.len(),
            path.display(),
            db.malformed_count()
        );

        Ok(db)
    }

    /// Parse a JSON document held in memory
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<TagRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Parse a JSON document from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        let records: Vec<TagRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    /// Build from raw records
    pub fn from_records(records: impl IntoIterator<Item = TagRecord>) -> Self {
        Self::from_entries(records.into_iter().map(TagEntry::from))
    }

    /// Build from already constructed entries
    pub fn from_entries(entries: impl IntoIterator<Item = TagEntry>) -> Self {
        let entries: Vec<TagEntry> = entries.into_iter().collect();

        for entry in entries.iter().filter(|e| !e.is_valid()) {
            if let Some(err) = entry.parse_error() {
                debug!("Skipping entry tagged {:?}: {}", entry.tag(), err);
            }
        }

        Self { entries }
    }

    /// Tags of every entry whose network contains `address`
    ///
    /// Deduplicated and sorted by code point. Malformed entries and entries of
    /// the other address family never contribute.
    pub fn matching_tags(&self, address: IpAddr) -> Vec<String> {
        let tags: BTreeSet<&str> = self
            .entries
            .iter()
            .filter(|entry| entry.contains(address))
            .map(TagEntry::tag)
            .collect();

        tags.into_iter().map(str::to_string).collect()
    }

    /// Parse `address` and return its tags
    pub fn tags_for_address(&self, address: &str) -> Result<Vec<String>, AddressError> {
        let ip = parse_address(address)?;
        let tags = self.matching_tags(ip);
        debug!("Address {} matched {} tag(s)", ip, tags.len());
        Ok(tags)
    }

    /// All stored entries in load order, malformed ones included
    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    /// Entries whose network text failed to parse
    pub fn malformed_entries(&self) -> impl Iterator<Item = &TagEntry> {
        self.entries.iter().filter(|e| !e.is_valid())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_valid()).count()
    }

    pub fn malformed_count(&self) -> usize {
        self.len() - self.valid_count()
    }
}
