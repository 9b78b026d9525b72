#![allow(dead_code, unused_imports)]

mod builders;
mod recording_sink;

pub use builders::{scenario_store, QueryPacketBuilder, ResponseReader};
pub use recording_sink::RecordingEventSink;
