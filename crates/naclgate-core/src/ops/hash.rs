//! Truncated SHA-512 (`crypto_hash`, first 32 bytes).

use sha2::{Digest, Sha512};

use crate::constants::HASH_SIZE;

/// Hash `message`, keeping the first [`HASH_SIZE`] bytes of its SHA-512
/// digest.
pub fn hash(message: &[u8]) -> Vec<u8> {
    let digest = Sha512::digest(message);
    digest[..HASH_SIZE].to_vec()
}
