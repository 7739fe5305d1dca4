//! Fuzz target for authenticated decryption and authenticator checks
//!
//! Prevent partial plaintext release and forgery acceptance (CRITICAL
//! security boundary)
//!
//! # Strategy
//!
//! - Arbitrary ciphertexts, nonces, keys and tags of any length
//! - Single bit flips in valid box and secretbox ciphertexts
//!
//! # Invariants
//!
//! - `box_open` fails only with `BadBoxError`, `secretbox_open` only with
//!   `BadSecretBoxError`, `auth_verify` only with `BadAuthenticatorError`
//! - A flipped ciphertext MUST reject; no plaintext is ever returned for it
//! - NEVER panic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use naclgate_core::{
    ErrorKind,
    ops::{auth, boxes, secretbox},
};

#[derive(Debug, Clone, Arbitrary)]
enum OpenAttack {
    BoxBytes { ciphertext: Vec<u8>, nonce: Vec<u8>, public_key: Vec<u8>, secret_key: Vec<u8> },
    SecretboxBytes { ciphertext: Vec<u8>, nonce: Vec<u8>, key: Vec<u8> },
    AuthBytes { authenticator: Vec<u8>, message: Vec<u8>, key: Vec<u8> },
    BoxFlip { secrets: [[u8; 32]; 2], nonce: [u8; 24], message: Vec<u8>, offset: u16, bit: u8 },
    SecretboxFlip { key: [u8; 32], nonce: [u8; 24], message: Vec<u8>, offset: u16, bit: u8 },
}

fn flip(bytes: &mut [u8], offset: u16, bit: u8) {
    let i = usize::from(offset) % bytes.len();
    bytes[i] ^= 1 << (bit % 8);
}

fuzz_target!(|attack: OpenAttack| {
    match attack {
        OpenAttack::BoxBytes { ciphertext, nonce, public_key, secret_key } => {
            if let Err(err) = boxes::open(&ciphertext, &nonce, &public_key, &secret_key) {
                assert_eq!(err.kind(), ErrorKind::BadBox);
            }
        },

        OpenAttack::SecretboxBytes { ciphertext, nonce, key } => {
            if let Err(err) = secretbox::open(&ciphertext, &nonce, &key) {
                assert_eq!(err.kind(), ErrorKind::BadSecretBox);
            }
        },

        OpenAttack::AuthBytes { authenticator, message, key } => {
            if let Err(err) = auth::verify(&authenticator, &message, &key) {
                assert_eq!(err.kind(), ErrorKind::BadAuthenticator);
            }
        },

        OpenAttack::BoxFlip { secrets, nonce, message, offset, bit } => {
            let alice = boxes::keypair_from_secret(&secrets[0]);
            let bob = boxes::keypair_from_secret(&secrets[1]);
            let Ok(mut boxed) = boxes::seal(&message, &nonce, bob.public_key(), alice.secret_key())
            else {
                panic!("sealing with well-formed inputs must succeed");
            };

            flip(&mut boxed, offset, bit);
            let err = boxes::open(&boxed, &nonce, alice.public_key(), bob.secret_key()).err();
            assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::BadBox));
        },

        OpenAttack::SecretboxFlip { key, nonce, message, offset, bit } => {
            let Ok(mut sealed) = secretbox::seal(&message, &nonce, &key) else {
                panic!("sealing with well-formed inputs must succeed");
            };

            flip(&mut sealed, offset, bit);
            let err = secretbox::open(&sealed, &nonce, &key).err();
            assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::BadSecretBox));
        },
    }
});
