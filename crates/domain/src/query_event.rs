use crate::{DnsQuestion, DomainError, Resolution};
use std::io;
use std::net::SocketAddr;

/// Observable steps of serving one datagram.
#[derive(Debug)]
pub enum QueryEvent<'a> {
    RequestReceived {
        client: SocketAddr,
        id: u16,
        questions: usize,
    },
    Question {
        id: u16,
        question: &'a DnsQuestion,
    },
    Resolved {
        name: &'a str,
        resolution: &'a Resolution,
    },
    NotFound {
        name: &'a str,
    },
    Malformed {
        client: SocketAddr,
        error: &'a DomainError,
    },
    EncodeFailed {
        client: SocketAddr,
        id: u16,
        error: &'a DomainError,
    },
    ResponseReady {
        client: SocketAddr,
        id: u16,
        answers: usize,
        bytes: usize,
    },
    ListenerReady {
        addr: SocketAddr,
    },
    RecvFailed {
        error: &'a io::Error,
    },
    SendFailed {
        client: SocketAddr,
        error: &'a io::Error,
    },
}
