//! Zonelight Domain Layer
pub mod config;
pub mod dns_answer;
pub mod dns_query;
pub mod errors;
pub mod query_event;
pub mod record_store;

pub use config::{CliOverrides, Config, ConfigError, DnsConfig};
pub use dns_answer::{Answer, RecordSource, Resolution};
pub use dns_query::{DnsQuery, DnsQuestion};
pub use errors::DomainError;
pub use query_event::QueryEvent;
pub use record_store::{RecordStore, RecordStoreBuilder, Zone};
