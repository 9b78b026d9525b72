//! UDP front end.
//!
//! The listener moves through `Idle -> Bound -> Serving` as a pair of types:
//! a [`UdpListener`] only knows its address, [`UdpListener::bind`] turns it
//! into a [`BoundListener`] owning the socket, and [`BoundListener::serve`]
//! never returns. There is no graceful stop; the process ends the loop.

use crate::dns::server::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use zonelight_application::ports::QueryEventSink;
use zonelight_domain::{DomainError, QueryEvent};

/// Requests longer than this are truncated by the receive call.
pub const RECV_BUFFER_SIZE: usize = 512;

#[derive(Debug, Clone, Copy)]
pub struct UdpListener {
    addr: SocketAddr,
}

impl UdpListener {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Binds the DNS socket. Must be called from within a Tokio runtime.
    ///
    /// The socket is created without `SO_REUSEADDR`, so a port that is
    /// already taken fails here instead of silently sharing traffic.
    pub fn bind(self) -> Result<BoundListener, DomainError> {
        let socket = create_udp_socket(self.addr).map_err(|e| DomainError::Bind {
            addr: self.addr.to_string(),
            reason: e.to_string(),
        })?;

        Ok(BoundListener {
            socket: Arc::new(socket),
        })
    }
}

pub struct BoundListener {
    socket: Arc<UdpSocket>,
}

impl BoundListener {
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Receive loop. Each datagram is handed to its own task, which runs the
    /// handler and writes the reply; a failing or panicking task affects only
    /// its own datagram. Receive errors are reported to the handler's event
    /// sink and the loop carries on.
    ///
    /// In-flight tasks are not bounded.
    pub async fn serve(self, handler: Arc<DnsServerHandler>) {
        let events = Arc::clone(handler.events());

        if let Ok(addr) = self.socket.local_addr() {
            events.record(&QueryEvent::ListenerReady { addr });
        }

        let mut recv_buf = [0u8; RECV_BUFFER_SIZE];

        loop {
            let (len, from) = match self.socket.recv_from(&mut recv_buf).await {
                Ok(received) => received,
                Err(error) => {
                    events.record(&QueryEvent::RecvFailed { error: &error });
                    continue;
                }
            };

            let datagram = recv_buf[..len].to_vec();
            let handler = Arc::clone(&handler);
            let socket = Arc::clone(&self.socket);
            let events = Arc::clone(&events);

            tokio::spawn(async move {
                if let Some(response) = handler.handle_datagram(&datagram, from) {
                    send_reply(&socket, &response, from, events.as_ref()).await;
                }
            });
        }
    }
}

pub(crate) async fn send_reply(
    socket: &UdpSocket,
    response: &[u8],
    client: SocketAddr,
    events: &dyn QueryEventSink,
) {
    if let Err(error) = socket.send_to(response, client).await {
        events.record(&QueryEvent::SendFailed {
            client,
            error: &error,
        });
    }
}

fn create_udp_socket(addr: SocketAddr) -> io::Result<UdpSocket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.bind(&addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}
