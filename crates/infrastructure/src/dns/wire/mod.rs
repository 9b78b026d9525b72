//! Hand-rolled DNS wire format for the subset this server speaks: a 12-byte
//! header, uncompressed names, and IPv4 answer records.

mod decode;
mod encode;
mod labels;

pub use decode::decode_query;
pub use encode::encode_response;
pub use labels::{read_name, write_name, MAX_LABEL_LEN};

pub const HEADER_LEN: usize = 12;

/// QR=1, RD=1, RA=1, RCODE=0.
pub const RESPONSE_FLAGS: u16 = 0x8180;

pub(crate) fn read_u16(buf: &[u8], pos: usize) -> Option<u16> {
    buf.get(pos..pos + 2)
        .map(|bytes| u16::from_be_bytes([bytes[0], bytes[1]]))
}
