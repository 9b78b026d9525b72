mod query_event_sink;
mod record_resolver;

pub use query_event_sink::QueryEventSink;
pub use record_resolver::RecordResolver;
