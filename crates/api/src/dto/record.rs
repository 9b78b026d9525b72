use serde::{Deserialize, Serialize};
use zonelight_domain::{RecordStore, Zone};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDto {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDto {
    pub suffix: String,
    pub records: Vec<RecordDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSummaryDto {
    pub global: Vec<RecordDto>,
    pub zones: Vec<ZoneDto>,
}

impl RecordDto {
    fn sorted<'a>(records: impl Iterator<Item = (&'a str, &'a str)>) -> Vec<Self> {
        let mut dtos: Vec<Self> = records
            .map(|(name, address)| Self {
                name: name.to_string(),
                address: address.to_string(),
            })
            .collect();
        dtos.sort_by(|a, b| a.name.cmp(&b.name));
        dtos
    }

    pub fn global_from_store(store: &RecordStore) -> Vec<Self> {
        Self::sorted(store.global_records())
    }
}

impl ZoneDto {
    pub fn from_zone(suffix: &str, zone: &Zone) -> Self {
        Self {
            suffix: suffix.to_string(),
            records: RecordDto::sorted(zone.records()),
        }
    }

    pub fn all_from_store(store: &RecordStore) -> Vec<Self> {
        let mut zones: Vec<Self> = store
            .zones()
            .map(|(suffix, zone)| Self::from_zone(suffix, zone))
            .collect();
        zones.sort_by(|a, b| a.suffix.cmp(&b.suffix));
        zones
    }
}

impl StoreSummaryDto {
    pub fn from_store(store: &RecordStore) -> Self {
        Self {
            global: RecordDto::global_from_store(store),
            zones: ZoneDto::all_from_store(store),
        }
    }
}
