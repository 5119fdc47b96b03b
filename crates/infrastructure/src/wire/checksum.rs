//! Internet checksum (RFC 1071)
//!
//! Bytes are summed as big-endian 16-bit words into a 32-bit accumulator,
//! carries are folded back into the low half, and the result is the one's
//! complement of the folded sum. An odd trailing byte is treated as the high
//! byte of a zero-padded word.

/// Incremental RFC 1071 sum, so a pseudo-header and a datagram can be summed
/// without first being copied into one buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecksumAccumulator {
    sum: u32,
    pending: Option<u8>,
}

impl ChecksumAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mut bytes: &[u8]) -> &mut Self {
        // A previous odd-length span left a high byte waiting for its partner.
        if let Some(high) = self.pending.take() {
            match bytes.split_first() {
                Some((&low, rest)) => {
                    self.add_word(u16::from_be_bytes([high, low]));
                    bytes = rest;
                }
                None => {
                    self.pending = Some(high);
                    return self;
                }
            }
        }

        let mut words = bytes.chunks_exact(2);
        for word in &mut words {
            self.add_word(u16::from_be_bytes([word[0], word[1]]));
        }
        if let [last] = words.remainder() {
            self.pending = Some(*last);
        }
        self
    }

    fn add_word(&mut self, word: u16) {
        self.sum += u32::from(word);
        self.sum = (self.sum & 0xFFFF) + (self.sum >> 16);
    }

    pub fn finish(&self) -> u16 {
        let mut sum = self.sum;
        if let Some(high) = self.pending {
            sum += u32::from(u16::from_be_bytes([high, 0]));
        }
        while sum >> 16 != 0 {
            sum = (sum & 0xFFFF) + (sum >> 16);
        }
        !(sum as u16)
    }
}

pub fn internet_checksum(bytes: &[u8]) -> u16 {
    ChecksumAccumulator::new().add(bytes).finish()
}
