//! naclgate core
//!
//! Validation and marshalling gateway over NaCl-style authenticated
//! cryptography. The algorithms come from RustCrypto and dalek crates; this
//! crate owns everything between the caller and those primitives.
//!
//! # Operation Families
//!
//! | Family    | Primitive                  | Rejection error          |
//! |-----------|----------------------------|--------------------------|
//! | sign      | Ed25519 (combined mode)    | `BadSignatureError`      |
//! | box       | X25519 + XSalsa20-Poly1305 | `BadBoxError`            |
//! | secretbox | XSalsa20-Poly1305          | `BadSecretBoxError`      |
//! | auth      | HMAC-SHA-512-256           | `BadAuthenticatorError`  |
//! | hash      | SHA-512, first 32 bytes    | none                     |
//! | random    | OS CSPRNG                  | none                     |
//!
//! Malformed calls fail with `ArgumentError` in every family.
//!
//! # Pipeline
//!
//! ```text
//! host values
//!        │
//!        ▼
//! Argument validation → ArgumentError
//!        │
//!        ▼
//! Byte decoding (text or raw bytes → canonical bytes)
//!        │
//!        ▼
//! Size guards → Bad*Error, primitive never invoked
//!        │
//!        ▼
//! Primitive → Bad*Error on rejection
//!        │
//!        ▼
//! Byte encoding (Binary | Text)
//! ```
//!
//! # Security
//!
//! Untrusted Input:
//! - Signed messages shorter than one signature never reach the verifier
//! - Keys, nonces and authenticators must have their exact published length
//! - Ciphertexts shorter than their tag are rejected before decryption
//!
//! Atomicity:
//! - Opening a box or secretbox returns the whole plaintext or an error
//! - Verification failures are errors, never ignorable booleans
//!
//! Key Material:
//! - No key, nonce or plaintext outlives the call that received it
//! - Generated secret keys are zeroized when the [`KeyPair`] is dropped
//! - Logs record operation names, error kinds and lengths only

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod codec;
pub mod constants;
pub mod entropy;
pub mod error;
pub mod gateway;
pub mod guard;
pub mod keys;
pub mod operation;
pub mod ops;
pub mod validate;

pub use codec::{ByteArg, Encoding, Value};
pub use entropy::{EntropySource, SystemEntropy};
pub use error::{ErrorKind, GatewayError, Result};
pub use gateway::Gateway;
pub use keys::KeyPair;
pub use operation::Operation;
