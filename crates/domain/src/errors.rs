use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed DNS packet: {0}")]
    MalformedPacket(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Failed to bind DNS socket on {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("Resource not found: {0}")]
    NotFound(String),
}
