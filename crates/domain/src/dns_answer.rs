use std::fmt;
use std::sync::Arc;

/// Which table of the record store produced a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    Global,
    Zone(Arc<str>),
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSource::Global => write!(f, "global"),
            RecordSource::Zone(suffix) => write!(f, "zone:{}", suffix),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Address exactly as configured; parsed only when the answer is encoded.
    pub address: Arc<str>,
    pub ttl: u32,
    pub source: RecordSource,
}

impl Resolution {
    pub fn new(address: impl Into<Arc<str>>, ttl: u32, source: RecordSource) -> Self {
        Self {
            address: address.into(),
            ttl,
            source,
        }
    }
}

/// Outcome of resolving a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Resolved(Resolution),
    Unresolved,
}

impl Answer {
    pub fn resolution(&self) -> Option<&Resolution> {
        match self {
            Answer::Resolved(resolution) => Some(resolution),
            Answer::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Answer::Resolved(_))
    }
}

impl From<Option<Resolution>> for Answer {
    fn from(resolution: Option<Resolution>) -> Self {
        resolution.map_or(Answer::Unresolved, Answer::Resolved)
    }
}
