use zonelight_domain::DomainError;

/// Longest label whose length byte cannot be mistaken for a compression
/// pointer. Anything the decoder accepts can be echoed back.
pub const MAX_LABEL_LEN: usize = 0xBF;

const POINTER_MASK: u8 = 0xC0;

/// Reads an uncompressed name starting at `pos`.
///
/// Returns the label bytes joined with `.` and the offset just past the
/// terminating zero byte. Label bytes are kept as received, whatever their
/// encoding. Compression pointers (both high bits set) are not followed and
/// are reported as malformed.
pub fn read_name(buf: &[u8], mut pos: usize) -> Result<(Vec<u8>, usize), DomainError> {
    let mut name = Vec::new();

    loop {
        let len = *buf
            .get(pos)
            .ok_or_else(|| malformed(format!("name at offset {} runs past end of packet", pos)))?;
        pos += 1;

        if len == 0 {
            return Ok((name, pos));
        }

        if len & POINTER_MASK == POINTER_MASK {
            return Err(malformed(format!(
                "compression pointer 0x{:02X} at offset {} is not supported",
                len,
                pos - 1
            )));
        }

        let end = pos + len as usize;
        let label = buf.get(pos..end).ok_or_else(|| {
            malformed(format!(
                "label of {} bytes at offset {} runs past end of packet",
                len, pos
            ))
        })?;

        if !name.is_empty() {
            name.push(b'.');
        }
        name.extend_from_slice(label);
        pos = end;
    }
}

/// Appends `name` as length-prefixed labels followed by the root byte.
///
/// The empty name is the root and encodes as a single zero byte.
pub fn write_name(buf: &mut Vec<u8>, name: &[u8]) -> Result<(), DomainError> {
    if !name.is_empty() {
        for label in name.split(|&b| b == b'.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    String::from_utf8_lossy(name)
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label of {} bytes in '{}' exceeds {}",
                    label.len(),
                    String::from_utf8_lossy(name),
                    MAX_LABEL_LEN
                )));
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label);
        }
    }
    buf.push(0);
    Ok(())
}

fn malformed(reason: String) -> DomainError {
    DomainError::MalformedPacket(reason)
}
