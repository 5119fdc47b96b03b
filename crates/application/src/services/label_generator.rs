use fastrand::Rng;

pub const LABEL_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Builds a label of `len` characters drawn from [`LABEL_ALPHABET`].
pub fn random_label(rng: &mut Rng, len: usize) -> String {
    (0..len)
        .map(|_| LABEL_ALPHABET[rng.usize(..LABEL_ALPHABET.len())] as char)
        .collect()
}
