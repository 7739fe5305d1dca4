//! Public-key authenticated encryption (`crypto_box`).
//!
//! X25519 key agreement with XSalsa20-Poly1305, wire-compatible with NaCl's
//! `crypto_box_curve25519xsalsa20poly1305`. The sender boxes with the
//! recipient's public key and its own secret key; the recipient opens with
//! the sender's public key and its own secret key.
//!
//! # Security
//!
//! - A nonce must never be reused for the same pair of keys. The gateway does
//!   not track nonces; use [`random_nonce`] or a counter the caller owns
//! - Opening is all-or-nothing: a ciphertext that fails authentication yields
//!   an error, never partial plaintext

use crypto_box::{
    PublicKey, SalsaBox, SecretKey,
    aead::{Aead, Nonce},
};
use zeroize::Zeroizing;

use crate::{
    constants::{BOX_MAC_SIZE, BOX_NONCE_SIZE, BOX_PUBLIC_KEY_SIZE, BOX_SECRET_KEY_SIZE},
    entropy::EntropySource,
    error::{ErrorKind, Result},
    guard,
    keys::KeyPair,
};

const DOMAIN: ErrorKind = ErrorKind::BadBox;

/// Generate a box keypair from fresh entropy.
pub fn keypair(entropy: &impl EntropySource) -> KeyPair {
    let secret = Zeroizing::new(entropy.array::<BOX_SECRET_KEY_SIZE>());
    keypair_from_secret(&secret)
}

/// Derive the box keypair for a 32-byte secret key.
pub fn keypair_from_secret(secret: &[u8; BOX_SECRET_KEY_SIZE]) -> KeyPair {
    let public_key = SecretKey::from(*secret).public_key();
    KeyPair::new(public_key.as_bytes().to_vec(), secret.to_vec())
}

/// Random nonce for [`seal`].
pub fn random_nonce(entropy: &impl EntropySource) -> Vec<u8> {
    entropy.array::<BOX_NONCE_SIZE>().to_vec()
}

/// Encrypt and authenticate `message` for the holder of `public_key`.
///
/// Returns the ciphertext, [`BOX_MAC_SIZE`] bytes longer than `message`.
///
/// # Errors
///
/// - `BadBoxError` if the nonce or either key has the wrong length
pub fn seal(message: &[u8], nonce: &[u8], public_key: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
    let nonce = guard::exact::<BOX_NONCE_SIZE>(nonce, "nonce", DOMAIN)?;
    let cipher = cipher(public_key, secret_key)?;

    cipher
        .encrypt(Nonce::<SalsaBox>::from_slice(nonce), message)
        .map_err(|_| DOMAIN.error("inexplicably failed to box message"))
}

/// Authenticate and decrypt a ciphertext produced by [`seal`].
///
/// # Errors
///
/// - `BadBoxError` if the nonce or either key has the wrong length
/// - `BadBoxError` if the ciphertext is shorter than its tag
/// - `BadBoxError` if authentication fails
pub fn open(
    ciphertext: &[u8],
    nonce: &[u8],
    public_key: &[u8],
    secret_key: &[u8],
) -> Result<Vec<u8>> {
    let nonce = guard::exact::<BOX_NONCE_SIZE>(nonce, "nonce", DOMAIN)?;
    guard::sealed(ciphertext, BOX_MAC_SIZE, DOMAIN)?;
    let cipher = cipher(public_key, secret_key)?;

    cipher
        .decrypt(Nonce::<SalsaBox>::from_slice(nonce), ciphertext)
        .map_err(|_| DOMAIN.error("ciphertext fails verification"))
}

fn cipher(public_key: &[u8], secret_key: &[u8]) -> Result<SalsaBox> {
    let public_key = guard::exact::<BOX_PUBLIC_KEY_SIZE>(public_key, "public-key", DOMAIN)?;
    let secret_key = guard::exact::<BOX_SECRET_KEY_SIZE>(secret_key, "secret-key", DOMAIN)?;

    Ok(SalsaBox::new(&PublicKey::from(*public_key), &SecretKey::from(*secret_key)))
}
