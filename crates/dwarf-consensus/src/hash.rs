use sha2::{Digest, Sha256};

pub fn sha256(b: &[u8]) -> [u8; 32] {
    let out = Sha256::digest(b);
    let mut r = [0u8; 32];
    r.copy_from_slice(&out);
    r
}

pub fn sha256d(b: &[u8]) -> [u8; 32] {
    sha256(&sha256(b))
}

/// Renders a hash the way block explorers print it (byte-reversed hex).
pub fn hash_to_display_hex(h: &[u8; 32]) -> String {
    let mut rev = *h;
    rev.reverse();
    rev.iter().map(|byte| format!("{:02x}", byte)).collect()
}
