//! The gateway: one entry point for every operation.
//!
//! A call flows through a fixed pipeline:
//!
//! ```text
//! host values ──▶ validate (arity, kinds) ──▶ decode ──▶ guard ──▶ primitive
//!                                                                      │
//! host value  ◀── encode (Binary | Text) ◀──────────────────────────────┘
//! ```
//!
//! The first failing stage returns its error and later stages never run. The
//! gateway holds no cryptographic material between calls; its only state is
//! the entropy source, so one instance can be shared freely across threads.

use crate::{
    codec::{self, Encoding, Value},
    entropy::{EntropySource, SystemEntropy},
    error::{ErrorKind, Result},
    keys::KeyPair,
    operation::Operation,
    ops::{auth, boxes, hash, random, secretbox, sign},
    validate,
};

/// Stateless operation dispatcher.
#[derive(Debug, Clone, Default)]
pub struct Gateway<E = SystemEntropy> {
    entropy: E,
}

impl Gateway<SystemEntropy> {
    /// Gateway backed by the OS RNG.
    pub fn new() -> Self {
        Self { entropy: SystemEntropy }
    }
}

impl<E: EntropySource> Gateway<E> {
    /// Gateway backed by a caller-supplied entropy source.
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    /// Entropy source used for keys, nonces and random bytes.
    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    /// Call an operation by host name.
    ///
    /// Names ending in `_utf8` select text output for operations that have
    /// a text variant.
    ///
    /// # Errors
    ///
    /// - `ArgumentError` for an unknown name
    /// - Anything [`Gateway::call`] returns
    pub fn call_named(&self, host_name: &str, args: &[Value]) -> Result<Value> {
        let Some((op, encoding)) = Operation::resolve(host_name) else {
            tracing::debug!(host_name, "unknown operation");
            return Err(ErrorKind::Argument.error(format!("unknown operation: {host_name}")));
        };
        self.call(op, args, encoding)
    }

    /// Call an operation, returning its result in `encoding`.
    ///
    /// # Errors
    ///
    /// - `ArgumentError` if the call shape is wrong, if text output is
    ///   requested from an operation without a text variant, or if a
    ///   `randombytes` count is out of range
    /// - The operation's domain error if its input is rejected
    pub fn call(&self, op: Operation, args: &[Value], encoding: Encoding) -> Result<Value> {
        let result = self.dispatch(op, args, encoding);

        match &result {
            Ok(_) => tracing::trace!(operation = %op, ?encoding, "operation completed"),
            Err(err) => tracing::debug!(
                operation = %op,
                kind = %err.kind(),
                arity = args.len(),
                "operation rejected"
            ),
        }

        result
    }

    fn dispatch(&self, op: Operation, args: &[Value], encoding: Encoding) -> Result<Value> {
        if encoding == Encoding::Text && !op.has_text_variant() {
            return Err(ErrorKind::Argument.error(format!("{op} has no text variant")));
        }

        let args = validate::arguments(op.params(), args)?;

        let output = match op {
            Operation::SignKeypair => return Ok(self.sign_keypair().into_value()),
            Operation::BoxKeypair => return Ok(self.box_keypair().into_value()),
            Operation::Sign => {
                let [message, secret_key] = args.bytes::<2>()?;
                sign::sign(message, secret_key)?
            },
            Operation::SignOpen => {
                let [signed_message, public_key] = args.bytes::<2>()?;
                sign::open(signed_message, public_key)?
            },
            Operation::SignPeek => {
                let [signed_message] = args.bytes::<1>()?;
                sign::peek(signed_message)?
            },
            Operation::Box => {
                let [message, nonce, public_key, secret_key] = args.bytes::<4>()?;
                boxes::seal(message, nonce, public_key, secret_key)?
            },
            Operation::BoxOpen => {
                let [ciphertext, nonce, public_key, secret_key] = args.bytes::<4>()?;
                boxes::open(ciphertext, nonce, public_key, secret_key)?
            },
            Operation::BoxRandomNonce => boxes::random_nonce(&self.entropy),
            Operation::Secretbox => {
                let [message, nonce, key] = args.bytes::<3>()?;
                secretbox::seal(message, nonce, key)?
            },
            Operation::SecretboxOpen => {
                let [ciphertext, nonce, key] = args.bytes::<3>()?;
                secretbox::open(ciphertext, nonce, key)?
            },
            Operation::SecretboxRandomNonce => secretbox::random_nonce(&self.entropy),
            Operation::SecretboxKeygen => secretbox::keygen(&self.entropy),
            Operation::Auth => {
                let [message, key] = args.bytes::<2>()?;
                auth::authenticate(message, key)?
            },
            Operation::AuthVerify => {
                let [authenticator, message, key] = args.bytes::<3>()?;
                auth::verify(authenticator, message, key)?;
                return Ok(Value::Null);
            },
            Operation::Hash => {
                let [message] = args.bytes::<1>()?;
                hash::hash(message)
            },
            Operation::RandomBytes => self.random_bytes(args.u32(0)?)?,
        };

        Ok(codec::encode(output, encoding))
    }

    /// Generate an Ed25519 signing keypair.
    pub fn sign_keypair(&self) -> KeyPair {
        sign::keypair(&self.entropy)
    }

    /// Generate an X25519 box keypair.
    pub fn box_keypair(&self) -> KeyPair {
        boxes::keypair(&self.entropy)
    }

    /// Return `count` random bytes.
    ///
    /// # Errors
    ///
    /// - `ArgumentError` if `count` is 256 or more
    pub fn random_bytes(&self, count: u32) -> Result<Vec<u8>> {
        random::random_bytes(&self.entropy, count)
    }
}
