use std::sync::{Arc, Mutex};
use zonelight_application::ports::QueryEventSink;
use zonelight_domain::QueryEvent;

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

    pub fn contains(&self, prefix: &str) -> bool {
        self.events().iter().any(|e| e.starts_with(prefix))
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
