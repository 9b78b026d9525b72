use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Records served for names that end with the zone's suffix.
#[derive(Debug, Clone, Default)]
pub struct Zone {
    records: FxHashMap<Arc<str>, Arc<str>>,
}

impl Zone {
    pub fn with_records<I, K, V>(records: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Arc<str>>,
        V: Into<Arc<str>>,
    {
        Self {
            records: records
                .into_iter()
                .map(|(name, address)| (name.into(), address.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<str>> {
        self.records.get(name)
    }

    pub fn records(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records
            .iter()
            .map(|(name, address)| (name.as_ref(), address.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Name to address tables loaded once at startup.
///
/// The store has no mutating methods; it is shared behind an `Arc` by every
/// in-flight request and by the status page, so readers never take a lock.
/// Building happens exclusively through [`RecordStoreBuilder`].
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    global: FxHashMap<Arc<str>, Arc<str>>,
    zones: FxHashMap<Arc<str>, Zone>,
}

impl RecordStore {
    pub fn builder() -> RecordStoreBuilder {
        RecordStoreBuilder::default()
    }

    /// Exact-match lookup in the global table.
    pub fn global(&self, name: &str) -> Option<&Arc<str>> {
        self.global.get(name)
    }

    pub fn global_records(&self) -> impl Iterator<Item = (&str, &str)> {
        self.global
            .iter()
            .map(|(name, address)| (name.as_ref(), address.as_ref()))
    }

    /// Zones keyed by suffix, in hash order. Callers must not rely on the
    /// order when more than one zone could match a name.
    pub fn zones(&self) -> impl Iterator<Item = (&Arc<str>, &Zone)> {
        self.zones.iter()
    }

    pub fn zone(&self, suffix: &str) -> Option<&Zone> {
        self.zones.get(suffix)
    }

    pub fn global_len(&self) -> usize {
        self.global.len()
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn record_count(&self) -> usize {
        self.global.len() + self.zones.values().map(Zone::len).sum::<usize>()
    }
}

#[derive(Debug, Default)]
pub struct RecordStoreBuilder {
    global: FxHashMap<Arc<str>, Arc<str>>,
    zones: FxHashMap<Arc<str>, Zone>,
}

impl RecordStoreBuilder {
    pub fn global_record(
        mut self,
        name: impl Into<Arc<str>>,
        address: impl Into<Arc<str>>,
    ) -> Self {
        self.global.insert(name.into(), address.into());
        self
    }

    pub fn zone_record(
        mut self,
        suffix: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        address: impl Into<Arc<str>>,
    ) -> Self {
        self.zones
            .entry(suffix.into())
            .or_default()
            .records
            .insert(name.into(), address.into());
        self
    }

    /// Adds a whole zone, replacing any zone already registered under `suffix`.
    pub fn zone(mut self, suffix: impl Into<Arc<str>>, zone: Zone) -> Self {
        self.zones.insert(suffix.into(), zone);
        self
    }

    pub fn build(self) -> RecordStore {
        RecordStore {
            global: self.global,
            zones: self.zones,
        }
    }
}
