use tracing::{error, info, warn};
use zonelight_application::ports::QueryEventSink;
use zonelight_domain::QueryEvent;

/// Writes query events as structured `tracing` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl QueryEventSink for TracingEventSink {
    fn record(&self, event: &QueryEvent<'_>) {
        match event {
            QueryEvent::RequestReceived {
                client,
                id,
                questions,
            } => {
                info!(client = %client, id = *id, questions = *questions, "DNS request received");
            }
            QueryEvent::Question { id, question } => {
                info!(
                    id = *id,
                    name = %question.name,
                    qtype = question.qtype,
                    qclass = question.qclass,
                    "DNS question"
                );
            }
            QueryEvent::Resolved { name, resolution } => {
                info!(
                    name = %name,
                    address = %resolution.address,
                    ttl = resolution.ttl,
                    source = %resolution.source,
                    "Record resolved"
                );
            }
            QueryEvent::NotFound { name } => {
                warn!(name = %name, "Record not found");
            }
            QueryEvent::Malformed { client, error } => {
                error!(client = %client, error = %error, "Failed to parse DNS request");
            }
            QueryEvent::EncodeFailed { client, id, error } => {
                error!(client = %client, id = *id, error = %error, "Failed to encode DNS response");
            }
            QueryEvent::ResponseReady {
                client,
                id,
                answers,
                bytes,
            } => {
                info!(
                    client = %client,
                    id = *id,
                    answers = *answers,
                    bytes = *bytes,
                    "Sending DNS response"
                );
            }
            QueryEvent::ListenerReady { addr } => {
                info!(bind_address = %addr, "DNS server ready");
            }
            QueryEvent::RecvFailed { error } => {
                error!(error = %error, "UDP recv error");
            }
            QueryEvent::SendFailed { client, error } => {
                warn!(client = %client, error = %error, "Failed to send DNS response");
            }
        }
    }
}
