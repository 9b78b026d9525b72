use std::sync::Arc;

pub const TYPE_A: u16 = 1;
pub const CLASS_IN: u16 = 1;

/// One entry of a request's question section. Type and class are carried
/// through to the response untouched; only the name takes part in lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    /// Labels exactly as received, joined with `.`. Echoed back verbatim.
    pub raw_name: Arc<[u8]>,
    /// UTF-8 view of `raw_name` used for lookup and logging. Invalid
    /// sequences become U+FFFD, so such names never match a record.
    pub name: Arc<str>,
    pub qtype: u16,
    pub qclass: u16,
}

impl DnsQuestion {
    pub fn new(name: impl Into<Arc<str>>, qtype: u16, qclass: u16) -> Self {
        let name: Arc<str> = name.into();
        Self {
            raw_name: Arc::from(name.as_bytes()),
            name,
            qtype,
            qclass,
        }
    }

    /// Builds a question from name bytes read off the wire.
    pub fn from_wire(raw_name: Vec<u8>, qtype: u16, qclass: u16) -> Self {
        let name: Arc<str> = String::from_utf8_lossy(&raw_name).into();
        Self {
            raw_name: raw_name.into(),
            name,
            qtype,
            qclass,
        }
    }

    /// Shorthand for an `A`/`IN` question.
    pub fn a(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, TYPE_A, CLASS_IN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub id: u16,
    pub flags: u16,
    pub questions: Vec<DnsQuestion>,
}

impl DnsQuery {
    pub fn new(id: u16, questions: Vec<DnsQuestion>) -> Self {
        Self {
            id,
            flags: 0x0100,
            questions,
        }
    }
}
