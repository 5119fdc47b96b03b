use std::fmt;
use std::str::FromStr;

/// Query types the encoder knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordType {
    #[default]
    A,
}

impl RecordType {
    /// QTYPE value on the wire (RFC 1035 §3.2.2)
    pub fn to_u16(self) -> u16 {
        match self {
            RecordType::A => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::A => "A",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            other => Err(format!("Unsupported record type: {}", other)),
        }
    }
}
