use super::labels::read_name;
use super::{read_u16, HEADER_LEN};
use zonelight_domain::{DnsQuery, DnsQuestion, DomainError};

/// Smallest possible question: root name byte, type and class.
const MIN_QUESTION_LEN: usize = 5;

/// Decodes a request datagram into a [`DnsQuery`].
///
/// Only the id, flags and question section are read; the answer, authority
/// and additional counts are ignored. Every read is bounds-checked and any
/// overrun is reported as [`DomainError::MalformedPacket`].
pub fn decode_query(buf: &[u8]) -> Result<DnsQuery, DomainError> {
    if buf.len() < HEADER_LEN {
        return Err(DomainError::MalformedPacket(format!(
            "packet is {} bytes, header needs {}",
            buf.len(),
            HEADER_LEN
        )));
    }

    let id = u16::from_be_bytes([buf[0], buf[1]]);
    let flags = u16::from_be_bytes([buf[2], buf[3]]);
    let qdcount = u16::from_be_bytes([buf[4], buf[5]]) as usize;

    let capacity = qdcount.min((buf.len() - HEADER_LEN) / MIN_QUESTION_LEN);
    let mut questions = Vec::with_capacity(capacity);
    let mut pos = HEADER_LEN;

    for index in 0..qdcount {
        let (name, next) = read_name(buf, pos)?;
        let (qtype, qclass) = read_u16(buf, next)
            .zip(read_u16(buf, next + 2))
            .ok_or_else(|| {
                DomainError::MalformedPacket(format!(
                    "question {} of {} is truncated after its name",
                    index + 1,
                    qdcount
                ))
            })?;
        pos = next + 4;

        questions.push(DnsQuestion::from_wire(name, qtype, qclass));
    }

    Ok(DnsQuery {
        id,
        flags,
        questions,
    })
}
