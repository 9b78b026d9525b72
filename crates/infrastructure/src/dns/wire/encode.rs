use super::labels::write_name;
use super::RESPONSE_FLAGS;
use std::net::Ipv4Addr;
use zonelight_domain::{Answer, DnsQuery, DnsQuestion, DomainError, Resolution};

/// Encodes the response to `query`.
///
/// `answers[i]` is the outcome for `query.questions[i]`; a missing entry is
/// treated as unresolved. Each question is echoed, and a resolved one is
/// immediately followed by its A record.
///
/// ANCOUNT is always the number of questions, not the number of records
/// actually written. Strict parsers will see fewer records than declared
/// whenever a name did not resolve.
pub fn encode_response(query: &DnsQuery, answers: &[Answer]) -> Result<Vec<u8>, DomainError> {
    let count = u16::try_from(query.questions.len()).map_err(|_| {
        DomainError::InvalidDnsResponse(format!(
            "{} questions do not fit in a DNS header",
            query.questions.len()
        ))
    })?;

    let mut buf = Vec::with_capacity(512);
    buf.extend_from_slice(&query.id.to_be_bytes());
    buf.extend_from_slice(&RESPONSE_FLAGS.to_be_bytes());
    buf.extend_from_slice(&count.to_be_bytes());
    buf.extend_from_slice(&count.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());

    for (index, question) in query.questions.iter().enumerate() {
        write_question(&mut buf, question)?;

        if let Some(resolution) = answers.get(index).and_then(Answer::resolution) {
            write_answer(&mut buf, question, resolution)?;
        }
    }

    Ok(buf)
}

fn write_question(buf: &mut Vec<u8>, question: &DnsQuestion) -> Result<(), DomainError> {
    write_name(buf, &question.raw_name)?;
    buf.extend_from_slice(&question.qtype.to_be_bytes());
    buf.extend_from_slice(&question.qclass.to_be_bytes());
    Ok(())
}

fn write_answer(
    buf: &mut Vec<u8>,
    question: &DnsQuestion,
    resolution: &Resolution,
) -> Result<(), DomainError> {
    let address: Ipv4Addr = resolution.address.parse().map_err(|_| {
        DomainError::InvalidIpAddress(format!(
            "'{}' configured for {}",
            resolution.address, question.name
        ))
    })?;

    write_question(buf, question)?;
    buf.extend_from_slice(&resolution.ttl.to_be_bytes());
    buf.extend_from_slice(&4u16.to_be_bytes());
    buf.extend_from_slice(&address.octets());
    Ok(())
}
