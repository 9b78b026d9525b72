#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use zonelight_application::ports::{QueryEventSink, RecordResolver};
use zonelight_domain::{QueryEvent, RecordSource, Resolution};

#[derive(Clone, Default)]
pub struct MockRecordResolver {
    responses: Arc<RwLock<HashMap<String, Resolution>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockRecordResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, name: &str, address: &str, ttl: u32) {
        self.responses.write().unwrap().insert(
            name.to_string(),
            Resolution::new(address, ttl, RecordSource::Global),
        );
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl RecordResolver for MockRecordResolver {
    fn resolve(&self, name: &str) -> Option<Resolution> {
        self.calls.lock().unwrap().push(name.to_string());
        self.responses.read().unwrap().get(name).cloned()
    }
}

/// Captures events as short strings, e.g. `resolved:api.example.com`.
#[derive(Clone, Default)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl QueryEventSink for RecordingEventSink {
    fn record(&self, event: &QueryEvent<'_>) {
        let line = match event {
            QueryEvent::RequestReceived { id, questions, .. } => {
                format!("received:{}:{}", id, questions)
            }
            QueryEvent::Question { question, .. } => format!("question:{}", question.name),
            QueryEvent::Resolved { name, .. } => format!("resolved:{}", name),
            QueryEvent::NotFound { name } => format!("not_found:{}", name),
            QueryEvent::Malformed { .. } => "malformed".to_string(),
            QueryEvent::EncodeFailed { .. } => "encode_failed".to_string(),
            QueryEvent::ResponseReady { answers, .. } => format!("response:{}", answers),
            QueryEvent::ListenerReady { .. } => "listener_ready".to_string(),
            QueryEvent::RecvFailed { .. } => "recv_failed".to_string(),
            QueryEvent::SendFailed { .. } => "send_failed".to_string(),
        };
        self.events.lock().unwrap().push(line);
    }
}
