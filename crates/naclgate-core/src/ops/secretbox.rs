//! Secret-key authenticated encryption (`crypto_secretbox`).
//!
//! XSalsa20-Poly1305 with a single shared key, wire-compatible with NaCl's
//! `crypto_secretbox_xsalsa20poly1305`. The same nonce rules as box apply: a
//! nonce must never repeat under one key.

use crypto_secretbox::{
    XSalsa20Poly1305,
    aead::{Aead, KeyInit, Nonce},
};
use zeroize::Zeroizing;

use crate::{
    constants::{SECRETBOX_KEY_SIZE, SECRETBOX_MAC_SIZE, SECRETBOX_NONCE_SIZE},
    entropy::EntropySource,
    error::{ErrorKind, Result},
    guard,
};

const DOMAIN: ErrorKind = ErrorKind::BadSecretBox;

/// Random secretbox key.
pub fn keygen(entropy: &impl EntropySource) -> Vec<u8> {
    let key = Zeroizing::new(entropy.array::<SECRETBOX_KEY_SIZE>());
    key.to_vec()
}

/// Random nonce for [`seal`].
pub fn random_nonce(entropy: &impl EntropySource) -> Vec<u8> {
    entropy.array::<SECRETBOX_NONCE_SIZE>().to_vec()
}

/// Encrypt and authenticate `message` under `key`.
///
/// # Errors
///
/// - `BadSecretBoxError` if the nonce or key has the wrong length
pub fn seal(message: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let nonce = guard::exact::<SECRETBOX_NONCE_SIZE>(nonce, "nonce", DOMAIN)?;
    let cipher = cipher(key)?;

    cipher
        .encrypt(Nonce::<XSalsa20Poly1305>::from_slice(nonce), message)
        .map_err(|_| DOMAIN.error("inexplicably failed to secretbox message"))
}

/// Authenticate and decrypt a ciphertext produced by [`seal`].
///
/// # Errors
///
/// - `BadSecretBoxError` if the nonce or key has the wrong length
/// - `BadSecretBoxError` if the ciphertext is shorter than its tag
/// - `BadSecretBoxError` if authentication fails
pub fn open(ciphertext: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let nonce = guard::exact::<SECRETBOX_NONCE_SIZE>(nonce, "nonce", DOMAIN)?;
    guard::sealed(ciphertext, SECRETBOX_MAC_SIZE, DOMAIN)?;
    let cipher = cipher(key)?;

    cipher
        .decrypt(Nonce::<XSalsa20Poly1305>::from_slice(nonce), ciphertext)
        .map_err(|_| DOMAIN.error("ciphertext fails verification"))
}

fn cipher(key: &[u8]) -> Result<XSalsa20Poly1305> {
    let key = guard::exact::<SECRETBOX_KEY_SIZE>(key, "key", DOMAIN)?;
    Ok(XSalsa20Poly1305::new(key.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; SECRETBOX_KEY_SIZE] = [0x5A; SECRETBOX_KEY_SIZE];
    const NONCE: [u8; SECRETBOX_NONCE_SIZE] = [0x01; SECRETBOX_NONCE_SIZE];

    #[test]
    fn seal_open_roundtrip() {
        let boxed = seal(b"shared secret", &NONCE, &KEY).unwrap();
        assert_eq!(open(&boxed, &NONCE, &KEY).unwrap(), b"shared secret");
    }

    #[test]
    fn large_message_roundtrip() {
        let plaintext = vec![0x42u8; 64 * 1024]; // 64KB
        let boxed = seal(&plaintext, &NONCE, &KEY).unwrap();

        assert_eq!(boxed.len(), plaintext.len() + SECRETBOX_MAC_SIZE);
        assert_eq!(open(&boxed, &NONCE, &KEY).unwrap(), plaintext);
    }

    #[test]
    fn tampered_ciphertext_is_rejected() {
        let mut boxed = seal(b"original message", &NONCE, &KEY).unwrap();
        boxed[0] ^= 0xFF;

        let err = open(&boxed, &NONCE, &KEY).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadSecretBox);
        assert_eq!(err.message(), "ciphertext fails verification");
    }

    #[test]
    fn wrong_key_is_rejected() {
        let boxed = seal(b"secret message", &NONCE, &KEY).unwrap();
        let err = open(&boxed, &NONCE, &[0xA5; SECRETBOX_KEY_SIZE]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BadSecretBox);
    }

    #[test]
    fn different_nonces_give_different_ciphertexts() {
        let a = seal(b"test", &NONCE, &KEY).unwrap();
        let b = seal(b"test", &[0x02; SECRETBOX_NONCE_SIZE], &KEY).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn short_ciphertext_is_rejected_before_decryption() {
        let err = open(b"tiny", &NONCE, &KEY).unwrap_err();
        assert_eq!(err.message(), "ciphertext is smaller than the authenticator size");
    }

    #[test]
    fn malformed_key_and_nonce_are_rejected() {
        assert_eq!(seal(b"m", &NONCE, &KEY[..16]).unwrap_err().message(), "incorrect key length: 16");
        assert_eq!(
            seal(b"m", &[0u8; 25], &KEY).unwrap_err().message(),
            "incorrect nonce length: 25"
        );
    }
}
