pub mod event_sink;
pub mod listener;
pub mod resolver;
pub mod server;
pub mod wire;

pub use event_sink::TracingEventSink;
pub use listener::{BoundListener, UdpListener};
pub use resolver::StoreResolver;
pub use server::DnsServerHandler;
