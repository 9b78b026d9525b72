use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::record_store::{RecordStore, Zone};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZoneConfig {
    #[serde(default)]
    pub records: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    #[serde(default = "default_dns_port")]
    pub port: u16,

    /// TTL stamped on every answer, in seconds.
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    /// Global `name -> address` table, checked before any zone.
    #[serde(default)]
    pub records: BTreeMap<String, String>,

    /// Zone tables keyed by name suffix.
    #[serde(default)]
    pub zones: BTreeMap<String, ZoneConfig>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            port: default_dns_port(),
            default_ttl: default_ttl(),
            records: BTreeMap::new(),
            zones: BTreeMap::new(),
        }
    }
}

impl DnsConfig {
    /// Snapshot the configured tables into a read-only store.
    ///
    /// Addresses are copied verbatim; a malformed one only surfaces when a
    /// response containing it is encoded.
    pub fn record_store(&self) -> RecordStore {
        let mut builder = RecordStore::builder();
        for (name, address) in &self.records {
            builder = builder.global_record(name.as_str(), address.as_str());
        }
        for (suffix, zone) in &self.zones {
            builder = builder.zone(
                suffix.as_str(),
                Zone::with_records(
                    zone.records
                        .iter()
                        .map(|(name, address)| (name.as_str(), address.as_str())),
                ),
            );
        }
        builder.build()
    }
}

fn default_dns_port() -> u16 {
    53
}

fn default_ttl() -> u32 {
    300
}
