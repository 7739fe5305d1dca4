//! Length guards on untrusted cryptographic input.
//!
//! These checks run after argument validation and before any primitive is
//! invoked. Classic NaCl `crypto_sign_open` computes `smlen - SIGNATURE_SIZE`
//! without checking it, so an undersized signed message underflows and reads
//! out of bounds. The gateway never lets such input reach a primitive.
//!
//! Keys and nonces must have their exact published size. A wrong-sized nonce
//! is rejected, never truncated or padded.

use crate::{
    constants::{AUTH_SIZE, MIN_SIGNED_MESSAGE_SIZE},
    error::{ErrorKind, Result},
};

/// Split a signed message into its signature prefix and payload.
///
/// # Errors
///
/// `BadSignatureError` if the message is shorter than one signature.
pub fn signed_message(signed: &[u8]) -> Result<(&[u8; MIN_SIGNED_MESSAGE_SIZE], &[u8])> {
    signed.split_first_chunk::<MIN_SIGNED_MESSAGE_SIZE>().ok_or_else(|| {
        tracing::debug!(len = signed.len(), "signed message below minimum size");
        ErrorKind::BadSignature.error("message is smaller than the minimum signed message size")
    })
}

/// Check that a ciphertext is long enough to carry its authentication tag.
pub fn sealed(ciphertext: &[u8], mac_size: usize, kind: ErrorKind) -> Result<()> {
    if ciphertext.len() < mac_size {
        tracing::debug!(len = ciphertext.len(), mac_size, "ciphertext below tag size");
        return Err(kind.error("ciphertext is smaller than the authenticator size"));
    }
    Ok(())
}

/// Check that an authenticator has exactly the published size.
///
/// A truncated tag would otherwise be compared on its prefix only, and an
/// empty one would compare equal to anything.
pub fn authenticator(tag: &[u8]) -> Result<&[u8; AUTH_SIZE]> {
    exact(tag, "authenticator", ErrorKind::BadAuthenticator)
}

/// View `bytes` as a fixed-size array, failing in `kind`'s domain.
///
/// `what` names the value in the message, e.g. `"secret-key"` gives
/// `"incorrect secret-key length: 12"`.
pub fn exact<'a, const N: usize>(
    bytes: &'a [u8],
    what: &str,
    kind: ErrorKind,
) -> Result<&'a [u8; N]> {
    <&[u8; N]>::try_from(bytes)
        .map_err(|_| kind.error(format!("incorrect {what} length: {}", bytes.len())))
}
