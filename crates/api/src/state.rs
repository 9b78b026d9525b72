use std::sync::Arc;
use zonelight_domain::RecordStore;

/// Shared state for the status endpoints. The store is the same snapshot the
/// DNS handler reads and exposes no mutating methods.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}
