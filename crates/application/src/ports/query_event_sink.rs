use zonelight_domain::QueryEvent;

/// Receives the observable steps of request handling.
pub trait QueryEventSink: Send + Sync {
    fn record(&self, event: &QueryEvent<'_>);
}
