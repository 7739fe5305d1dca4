//! Fuzz target for signed-message verification
//!
//! Prevent signature bypass and out-of-bounds reads on short input (CRITICAL
//! security boundary)
//!
//! # Strategy
//!
//! - Raw bytes: arbitrary signed messages of any length, including < 64
//! - Corrupted signatures: flip one bit of a valid signed message
//! - Wrong key: sign with one seed, open with another
//!
//! # Invariants
//!
//! - Input shorter than one signature fails with `BadSignatureError` from both
//!   `sign_open` and `sign_peek`
//! - A valid signed message opens to its payload and peeks to the same payload
//! - Any bit flip or wrong key MUST reject with `BadSignatureError`
//! - NEVER panic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use naclgate_core::{
    ErrorKind,
    constants::MIN_SIGNED_MESSAGE_SIZE,
    ops::sign,
};

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    seed: [u8; 32],
    attack: SignatureAttack,
}

#[derive(Debug, Clone, Arbitrary)]
enum SignatureAttack {
    RawBytes { signed_message: Vec<u8> },
    BitFlip { message: Vec<u8>, byte_offset: u16, bit_offset: u8 },
    WrongKey { message: Vec<u8>, other_seed: [u8; 32] },
}

fuzz_target!(|input: FuzzInput| {
    let keys = sign::keypair_from_seed(&input.seed);

    match input.attack {
        SignatureAttack::RawBytes { signed_message } => {
            let opened = sign::open(&signed_message, keys.public_key());
            let peeked = sign::peek(&signed_message);

            if signed_message.len() < MIN_SIGNED_MESSAGE_SIZE {
                assert_eq!(opened.map_err(|e| e.kind()), Err(ErrorKind::BadSignature));
                assert_eq!(peeked.map_err(|e| e.kind()), Err(ErrorKind::BadSignature));
            } else {
                assert_eq!(
                    peeked.ok().as_deref(),
                    Some(&signed_message[MIN_SIGNED_MESSAGE_SIZE..])
                );
                if let Err(err) = opened {
                    assert_eq!(err.kind(), ErrorKind::BadSignature);
                }
            }
        },

        SignatureAttack::BitFlip { message, byte_offset, bit_offset } => {
            let Ok(mut signed) = sign::sign(&message, keys.secret_key()) else {
                panic!("signing with a generated key must succeed");
            };
            assert_eq!(sign::open(&signed, keys.public_key()).ok(), Some(message.clone()));
            assert_eq!(sign::peek(&signed).ok(), Some(message));

            let i = usize::from(byte_offset) % signed.len();
            signed[i] ^= 1 << (bit_offset % 8);

            let err = sign::open(&signed, keys.public_key()).err();
            assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::BadSignature));
        },

        SignatureAttack::WrongKey { message, other_seed } => {
            if other_seed == input.seed {
                return;
            }
            let other = sign::keypair_from_seed(&other_seed);
            let Ok(signed) = sign::sign(&message, other.secret_key()) else {
                panic!("signing with a generated key must succeed");
            };

            let err = sign::open(&signed, keys.public_key()).err();
            assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::BadSignature));
        },
    }
});
