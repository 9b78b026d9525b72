use std::sync::Arc;
use tracing::info;
use zonelight_application::ports::{QueryEventSink, RecordResolver};
use zonelight_application::use_cases::HandleDnsQueryUseCase;
use zonelight_domain::{Config, RecordStore};
use zonelight_infrastructure::dns::{DnsServerHandler, StoreResolver, TracingEventSink};

pub struct DnsServices {
    pub store: Arc<RecordStore>,
    pub handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let store = Arc::new(config.dns.record_store());

        info!(
            global_records = store.global_len(),
            zones = store.zone_count(),
            total_records = store.record_count(),
            "Record store loaded"
        );

        let events: Arc<dyn QueryEventSink> = Arc::new(TracingEventSink);
        let resolver: Arc<dyn RecordResolver> =
            Arc::new(StoreResolver::new(store.clone(), config.dns.default_ttl));

        let use_case = Arc::new(HandleDnsQueryUseCase::new(resolver, events.clone()));
        let handler = Arc::new(DnsServerHandler::new(use_case, events));

        Self { store, handler }
    }
}
