use crate::dns::wire::{decode_query, encode_response};
use std::net::SocketAddr;
use std::sync::Arc;
use zonelight_application::ports::QueryEventSink;
use zonelight_application::use_cases::HandleDnsQueryUseCase;
use zonelight_domain::QueryEvent;

/// Turns one request datagram into at most one response datagram.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
    events: Arc<dyn QueryEventSink>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>, events: Arc<dyn QueryEventSink>) -> Self {
        Self { use_case, events }
    }

    pub fn events(&self) -> &Arc<dyn QueryEventSink> {
        &self.events
    }

    /// Returns the response bytes for `datagram`, or `None` when nothing
    /// should be sent back. Malformed requests and responses that cannot be
    /// encoded are dropped silently from the client's point of view; the
    /// reason only goes to the event sink.
    pub fn handle_datagram(&self, datagram: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let query = match decode_query(datagram) {
            Ok(query) => query,
            Err(error) => {
                self.events.record(&QueryEvent::Malformed {
                    client,
                    error: &error,
                });
                return None;
            }
        };

        self.events.record(&QueryEvent::RequestReceived {
            client,
            id: query.id,
            questions: query.questions.len(),
        });

        let answers = self.use_case.execute(&query);

        match encode_response(&query, &answers) {
            Ok(response) => {
                self.events.record(&QueryEvent::ResponseReady {
                    client,
                    id: query.id,
                    answers: answers.iter().filter(|a| a.is_resolved()).count(),
                    bytes: response.len(),
                });
                Some(response)
            }
            Err(error) => {
                self.events.record(&QueryEvent::EncodeFailed {
                    client,
                    id: query.id,
                    error: &error,
                });
                None
            }
        }
    }
}
