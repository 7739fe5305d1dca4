//! Message authentication (`crypto_auth`): HMAC-SHA-512-256.
//!
//! The authenticator is the first 32 bytes of HMAC-SHA-512, as in NaCl's
//! `crypto_auth_hmacsha512256`. Verification compares in constant time and
//! surfaces a mismatch as an error, never as a boolean.

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::{
    constants::{AUTH_KEY_SIZE, AUTH_SIZE},
    error::{ErrorKind, Result},
    guard,
};

type HmacSha512 = Hmac<Sha512>;

const DOMAIN: ErrorKind = ErrorKind::BadAuthenticator;

/// Compute the authenticator of `message` under `key`.
///
/// # Errors
///
/// - `BadAuthenticatorError` if the key has the wrong length
pub fn authenticate(message: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let tag = mac(key)?.chain_update(message).finalize().into_bytes();
    Ok(tag[..AUTH_SIZE].to_vec())
}

/// Check that `authenticator` was computed over `message` under `key`.
///
/// # Errors
///
/// - `BadAuthenticatorError` if the key or authenticator has the wrong length
/// - `BadAuthenticatorError` if the authenticator does not match
pub fn verify(authenticator: &[u8], message: &[u8], key: &[u8]) -> Result<()> {
    let authenticator = guard::authenticator(authenticator)?;

    mac(key)?
        .chain_update(message)
        .verify_truncated_left(authenticator)
        .map_err(|_| DOMAIN.error("authenticator fails verification"))
}

fn mac(key: &[u8]) -> Result<HmacSha512> {
    let key = guard::exact::<AUTH_KEY_SIZE>(key, "key", DOMAIN)?;
    let Ok(mac) = HmacSha512::new_from_slice(key) else {
        unreachable!("HMAC-SHA512 accepts any key size");
    };
    Ok(mac)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; AUTH_KEY_SIZE] = [0x0B; AUTH_KEY_SIZE];

    #[test]
    fn authenticate_verify_roundtrip() {
        let tag = authenticate(b"message", &KEY).unwrap();

        assert_eq!(tag.len(), AUTH_SIZE);
        assert!(verify(&tag, b"message", &KEY).is_ok());
    }

    #[test]
    fn authenticator_is_truncated_hmac_sha512() {
        let mut full = HmacSha512::new_from_slice(&KEY).unwrap();
        full.update(b"message");
        let full = full.finalize().into_bytes();

        assert_eq!(authenticate(b"message", &KEY).unwrap(), &full[..AUTH_SIZE]);
    }

    #[test]
    fn other_message_is_rejected() {
        let tag = authenticate(b"message", &KEY).unwrap();
        let err = verify(&tag, b"massage", &KEY).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BadAuthenticator);
        assert_eq!(err.message(), "authenticator fails verification");
    }

    #[test]
    fn other_key_is_rejected() {
        let tag = authenticate(b"message", &KEY).unwrap();
        assert!(verify(&tag, b"message", &[0x0C; AUTH_KEY_SIZE]).is_err());
    }

    #[test]
    fn truncated_authenticator_is_rejected() {
        let tag = authenticate(b"message", &KEY).unwrap();

        let err = verify(&tag[..16], b"message", &KEY).unwrap_err();
        assert_eq!(err.message(), "incorrect authenticator length: 16");

        // An empty tag would match any message if it reached the comparison
        let err = verify(&[], b"message", &KEY).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadAuthenticator);
    }

    #[test]
    fn malformed_key_is_rejected() {
        let err = authenticate(b"message", &KEY[..31]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadAuthenticator);
        assert_eq!(err.message(), "incorrect key length: 31");
    }
}
