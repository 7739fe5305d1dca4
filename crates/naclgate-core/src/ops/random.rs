//! Bounded random byte requests.

use crate::{
    constants::RANDOM_BYTES_LIMIT,
    entropy::EntropySource,
    error::{ErrorKind, Result},
};

/// Return `count` random bytes.
///
/// # Errors
///
/// - `ArgumentError` if `count` is [`RANDOM_BYTES_LIMIT`] or more
pub fn random_bytes(entropy: &impl EntropySource, count: u32) -> Result<Vec<u8>> {
    if count >= RANDOM_BYTES_LIMIT {
        return Err(ErrorKind::Argument.error(format!(
            "count must be less than {RANDOM_BYTES_LIMIT}, got {count}"
        )));
    }

    let mut bytes = vec![0u8; count as usize];
    entropy.fill_bytes(&mut bytes);
    Ok(bytes)
}
