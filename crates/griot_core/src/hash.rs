//! Content hashing for exact-duplicate detection.

use sha2::{Digest, Sha256};

/// Compute the deterministic fingerprint of a finished message.
///
/// SHA-256 over the UTF-8 bytes, rendered as lowercase hex. Equal inputs
/// always produce equal hashes; this is exact-match deduplication, not
/// similarity detection, so paraphrases hash differently.
///
/// # Examples
///
/// ```
/// use griot_core::content_hash;
///
/// let a = content_hash("Hello, world!");
/// let b = content_hash("Hello, world!");
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// assert_ne!(a, content_hash("Hello, world"));
/// ```
pub fn content_hash(message: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(message.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(content_hash("same text"), content_hash("same text"));
    }

    #[test]
    fn hash_distinguishes_whitespace() {
        assert_ne!(content_hash("same text"), content_hash("same  text"));
    }

    #[test]
    fn hash_of_empty_string_is_valid_hex() {
        let hash = content_hash("");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
