use anyhow::Context;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::info;
use zonelight_infrastructure::dns::{BoundListener, DnsServerHandler, UdpListener};

pub fn socket_addr(bind_address: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let ip: IpAddr = bind_address
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", bind_address))?;
    Ok(SocketAddr::new(ip, port))
}

/// A taken or privileged port is fatal at startup.
pub fn bind_dns_server(addr: SocketAddr) -> anyhow::Result<BoundListener> {
    let listener = UdpListener::new(addr).bind()?;
    info!(bind_address = %addr, "DNS socket bound");
    Ok(listener)
}

pub async fn start_dns_server(listener: BoundListener, handler: Arc<DnsServerHandler>) {
    listener.serve(handler).await;
}
