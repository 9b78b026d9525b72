use std::sync::Arc;
use zonelight_application::ports::RecordResolver;
use zonelight_domain::{RecordSource, RecordStore, Resolution};

/// Resolves names against a [`RecordStore`]: global table first, then zones.
///
/// A zone is consulted when its suffix is a plain string suffix of the name.
/// This is not label-aware, so zone `ample.com` is consulted for
/// `example.com`. When several zones qualify, the first one in the store's
/// iteration order that holds the name wins, and that order is unspecified.
pub struct StoreResolver {
    store: Arc<RecordStore>,
    default_ttl: u32,
}

impl StoreResolver {
    pub fn new(store: Arc<RecordStore>, default_ttl: u32) -> Self {
        Self { store, default_ttl }
    }
}

impl RecordResolver for StoreResolver {
    fn resolve(&self, name: &str) -> Option<Resolution> {
        if let Some(address) = self.store.global(name) {
            return Some(Resolution::new(
                Arc::clone(address),
                self.default_ttl,
                RecordSource::Global,
            ));
        }

        self.store
            .zones()
            .filter(|(suffix, _)| name.ends_with(suffix.as_ref()))
            .find_map(|(suffix, zone)| {
                zone.get(name).map(|address| {
                    Resolution::new(
                        Arc::clone(address),
                        self.default_ttl,
                        RecordSource::Zone(Arc::clone(suffix)),
                    )
                })
            })
    }
}
