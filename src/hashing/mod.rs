//! BLAKE3 helpers used by the embedders.

/// Truncates a BLAKE3 digest of `data` to its first 8 bytes.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    truncate(&blake3::hash(data))
}

#[inline]
fn truncate(hash: &blake3::Hash) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Hashes a single token, case-folded, for feature hashing.
#[inline]
pub fn hash_token(token: &str) -> u64 {
    hash_to_u64(token.to_ascii_lowercase().as_bytes())
}

/// Stable fingerprint of a cleaned segment text.
#[inline]
pub fn fingerprint(text: &str) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"segment|");
    hasher.update(text.as_bytes());

    truncate(&hasher.finalize())
}
