//! Ed25519 signing in NaCl combined mode.
//!
//! A signed message is the 64-byte signature followed by the payload. Secret
//! keys use the NaCl layout: 32-byte seed followed by the 32-byte public key.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use zeroize::Zeroizing;

use crate::{
    constants::{MIN_SIGNED_MESSAGE_SIZE, SIGN_PUBLIC_KEY_SIZE, SIGN_SECRET_KEY_SIZE},
    entropy::EntropySource,
    error::{ErrorKind, Result},
    guard,
    keys::KeyPair,
};

const DOMAIN: ErrorKind = ErrorKind::BadSignature;

/// Generate a signing keypair from fresh entropy.
pub fn keypair(entropy: &impl EntropySource) -> KeyPair {
    let seed = Zeroizing::new(entropy.array::<32>());
    keypair_from_seed(&seed)
}

/// Derive the signing keypair for a 32-byte seed.
pub fn keypair_from_seed(seed: &[u8; 32]) -> KeyPair {
    let signing_key = SigningKey::from_bytes(seed);
    let secret_key = Zeroizing::new(signing_key.to_keypair_bytes());

    KeyPair::new(signing_key.verifying_key().to_bytes().to_vec(), secret_key.to_vec())
}

/// Sign `message`, returning `signature ++ message`.
///
/// # Errors
///
/// - `BadSignatureError` if the secret key has the wrong length, or if its
///   public half does not belong to its seed
pub fn sign(message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
    let keypair_bytes = guard::exact::<SIGN_SECRET_KEY_SIZE>(secret_key, "secret-key", DOMAIN)?;
    let signing_key = SigningKey::from_keypair_bytes(keypair_bytes)
        .map_err(|_| DOMAIN.error("secret key does not match its public key"))?;

    let signature = signing_key.sign(message);

    let mut signed = Vec::with_capacity(MIN_SIGNED_MESSAGE_SIZE + message.len());
    signed.extend_from_slice(&signature.to_bytes());
    signed.extend_from_slice(message);
    Ok(signed)
}

/// Verify a signed message and return its payload.
///
/// # Errors
///
/// - `BadSignatureError` if the public key has the wrong length
/// - `BadSignatureError` if the signed message is shorter than one signature;
///   the primitive is never invoked on such input
/// - `BadSignatureError` if the signature does not verify
pub fn open(signed_message: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
    let public_key = guard::exact::<SIGN_PUBLIC_KEY_SIZE>(public_key, "public-key", DOMAIN)?;
    let (signature, payload) = guard::signed_message(signed_message)?;

    let verifying_key =
        VerifyingKey::from_bytes(public_key).map_err(|_| DOMAIN.error("invalid public key"))?;
    let signature = Signature::from_bytes(signature);

    verifying_key
        .verify(payload, &signature)
        .map_err(|_| DOMAIN.error("ciphertext fails verification"))?;

    Ok(payload.to_vec())
}

/// Return the payload of a signed message without verifying it.
///
/// The payload starts right after the signature prefix and runs to the end
/// of the buffer. It is NOT authenticated: use it only to decide which public
/// key to verify against, never to make an authorization decision.
///
/// # Errors
///
/// - `BadSignatureError` if the signed message is shorter than one signature
pub fn peek(signed_message: &[u8]) -> Result<Vec<u8>> {
    let (_, payload) = guard::signed_message(signed_message)?;
    Ok(payload.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keypair(seed_byte: u8) -> KeyPair {
        keypair_from_seed(&[seed_byte; 32])
    }

    #[test]
    fn sign_open_roundtrip() {
        let keys = test_keypair(1);
        let signed = sign(b"Hello World!", keys.secret_key()).unwrap();
        let opened = open(&signed, keys.public_key()).unwrap();

        assert_eq!(opened, b"Hello World!");
    }

    #[test]
    fn signed_message_is_signature_then_payload() {
        let keys = test_keypair(2);
        let signed = sign(b"abc", keys.secret_key()).unwrap();

        assert_eq!(signed.len(), MIN_SIGNED_MESSAGE_SIZE + 3);
        assert_eq!(&signed[MIN_SIGNED_MESSAGE_SIZE..], b"abc");
    }

    #[test]
    fn empty_message_signs_to_bare_signature() {
        let keys = test_keypair(3);
        let signed = sign(b"", keys.secret_key()).unwrap();

        assert_eq!(signed.len(), MIN_SIGNED_MESSAGE_SIZE);
        assert!(open(&signed, keys.public_key()).unwrap().is_empty());
    }

    #[test]
    fn gibberish_fails_verification() {
        let keys = test_keypair(4);
        let err = open(b"I am not actually signed", keys.public_key()).unwrap_err();

        // Shorter than one signature, so the guard rejects it first
        assert_eq!(err.kind(), ErrorKind::BadSignature);
        assert_eq!(err.message(), "message is smaller than the minimum signed message size");
    }

    #[test]
    fn other_key_fails_verification() {
        let keys = test_keypair(5);
        let other = test_keypair(6);
        let signed = sign(b"Hello World!", other.secret_key()).unwrap();

        let err = open(&signed, keys.public_key()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadSignature);
        assert_eq!(err.message(), "ciphertext fails verification");
    }

    #[test]
    fn tampered_payload_fails_verification() {
        let keys = test_keypair(7);
        let mut signed = sign(b"pay alice 10", keys.secret_key()).unwrap();
        let last = signed.len() - 1;
        signed[last] ^= 0x01;

        assert!(open(&signed, keys.public_key()).is_err());
    }

    #[test]
    fn wrong_key_lengths_are_rejected() {
        let keys = test_keypair(8);

        let err = sign(b"m", &keys.secret_key()[..32]).unwrap_err();
        assert_eq!(err.message(), "incorrect secret-key length: 32");

        let signed = sign(b"m", keys.secret_key()).unwrap();
        let err = open(&signed, &[0u8; 31]).unwrap_err();
        assert_eq!(err.message(), "incorrect public-key length: 31");
    }

    #[test]
    fn mismatched_secret_key_halves_are_rejected() {
        let keys = test_keypair(9);
        let other = test_keypair(10);

        let mut spliced = keys.secret_key()[..32].to_vec();
        spliced.extend_from_slice(other.public_key());

        let err = sign(b"m", &spliced).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadSignature);
    }

    #[test]
    fn peek_returns_payload_without_key() {
        let keys = test_keypair(11);
        let signed = sign(b"route me", keys.secret_key()).unwrap();

        assert_eq!(peek(&signed).unwrap(), b"route me");
    }

    #[test]
    fn peek_does_not_authenticate() {
        let mut forged = vec![0u8; MIN_SIGNED_MESSAGE_SIZE];
        forged.extend_from_slice(b"forged");

        assert_eq!(peek(&forged).unwrap(), b"forged");
    }

    #[test]
    fn keypair_layout_matches_nacl() {
        let keys = test_keypair(12);

        assert_eq!(keys.public_key().len(), SIGN_PUBLIC_KEY_SIZE);
        assert_eq!(keys.secret_key().len(), SIGN_SECRET_KEY_SIZE);
        assert_eq!(&keys.secret_key()[..32], &[12u8; 32]);
        assert_eq!(&keys.secret_key()[32..], keys.public_key());
    }
}
