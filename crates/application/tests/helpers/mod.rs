#![allow(dead_code, unused_imports)]

mod mock_ports;

pub use mock_ports::{MockRecordResolver, RecordingEventSink};
