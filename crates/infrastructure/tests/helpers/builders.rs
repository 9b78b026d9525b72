use std::net::Ipv4Addr;
use zonelight_domain::RecordStore;

/// Global `api.example.com`, zone `example.com` holding `db.example.com`.
pub fn scenario_store() -> RecordStore {
    RecordStore::builder()
        .global_record("api.example.com", "10.0.0.5")
        .zone_record("example.com", "db.example.com", "10.0.0.9")
        .build()
}

/// Builds raw request datagrams.
pub struct QueryPacketBuilder {
    id: u16,
    flags: u16,
    questions: Vec<(String, u16, u16)>,
    declared_count: Option<u16>,
}

impl QueryPacketBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x0100,
            questions: Vec::new(),
            declared_count: None,
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(self, name: &str) -> Self {
        self.typed_question(name, 1, 1)
    }

    pub fn typed_question(mut self, name: &str, qtype: u16, qclass: u16) -> Self {
        self.questions.push((name.to_string(), qtype, qclass));
        self
    }

    /// Overrides QDCOUNT, e.g. to declare more questions than are present.
    pub fn declared_count(mut self, count: u16) -> Self {
        self.declared_count = Some(count);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let count = self
            .declared_count
            .unwrap_or(self.questions.len() as u16);

        let mut buf = Vec::new();
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&count.to_be_bytes());
        buf.extend_from_slice(&[0, 0, 0, 0, 0, 0]);

        for (name, qtype, qclass) in &self.questions {
            for label in name.split('.').filter(|l| !l.is_empty()) {
                buf.push(label.len() as u8);
                buf.extend_from_slice(label.as_bytes());
            }
            buf.push(0);
            buf.extend_from_slice(&qtype.to_be_bytes());
            buf.extend_from_slice(&qclass.to_be_bytes());
        }
        buf
    }
}

/// Minimal reader for response datagrams produced by the server, which
/// interleave each question with its optional answer record.
pub struct ResponseReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParsedAnswer {
    pub name: String,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub address: Ipv4Addr,
}

impl<'a> ResponseReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 12 }
    }

    pub fn id(&self) -> u16 {
        self.u16_at(0)
    }

    pub fn flags(&self) -> u16 {
        self.u16_at(2)
    }

    pub fn qdcount(&self) -> u16 {
        self.u16_at(4)
    }

    pub fn ancount(&self) -> u16 {
        self.u16_at(6)
    }

    pub fn nscount(&self) -> u16 {
        self.u16_at(8)
    }

    pub fn arcount(&self) -> u16 {
        self.u16_at(10)
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Reads a question entry: `(name, type, class)`.
    pub fn question(&mut self) -> (String, u16, u16) {
        let name = self.name();
        let qtype = self.u16();
        let qclass = self.u16();
        (name, qtype, qclass)
    }

    /// Reads an A record following a question.
    pub fn answer(&mut self) -> ParsedAnswer {
        let name = self.name();
        let rtype = self.u16();
        let rclass = self.u16();
        let ttl = (self.u16() as u32) << 16 | self.u16() as u32;
        let rdlength = self.u16();
        assert_eq!(rdlength, 4, "A record must carry 4 bytes of RDATA");
        let b = &self.buf[self.pos..self.pos + 4];
        let address = Ipv4Addr::new(b[0], b[1], b[2], b[3]);
        self.pos += 4;
        ParsedAnswer {
            name,
            rtype,
            rclass,
            ttl,
            address,
        }
    }

    /// Peeks at the name at the cursor without consuming it.
    pub fn peek_name(&self) -> Option<String> {
        if self.is_exhausted() {
            return None;
        }
        let mut probe = ResponseReader {
            buf: self.buf,
            pos: self.pos,
        };
        Some(probe.name())
    }

    fn name(&mut self) -> String {
        let mut labels = Vec::new();
        loop {
            let len = self.buf[self.pos] as usize;
            self.pos += 1;
            if len == 0 {
                break;
            }
            labels.push(String::from_utf8(self.buf[self.pos..self.pos + len].to_vec()).unwrap());
            self.pos += len;
        }
        labels.join(".")
    }

    fn u16(&mut self) -> u16 {
        let value = self.u16_at(self.pos);
        self.pos += 2;
        value
    }

    fn u16_at(&self, pos: usize) -> u16 {
        u16::from_be_bytes([self.buf[pos], self.buf[pos + 1]])
    }
}
