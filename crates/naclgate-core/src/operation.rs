//! The named operation surface exposed to hosts.
//!
//! Each operation has one implementation. Message-bearing operations are also
//! registered under a `_utf8` host name that selects text output; both names
//! share validation, guards and primitive calls.

use std::fmt;

use crate::{codec::Encoding, validate::Param};

/// Host-name suffix selecting text output.
pub const TEXT_SUFFIX: &str = "_utf8";

const MESSAGE: Param = Param::bytes("message");
const NONCE: Param = Param::bytes("nonce");
const SIGNED_MESSAGE: Param = Param::bytes("signed_message");
const CIPHERTEXT: Param = Param::bytes("ciphertext");
const PUBLIC_KEY: Param = Param::bytes("public_key");
const SECRET_KEY: Param = Param::bytes("secret_key");
const KEY: Param = Param::bytes("key");

const SIGN: &[Param] = &[MESSAGE, SECRET_KEY];
const SIGN_OPEN: &[Param] = &[SIGNED_MESSAGE, PUBLIC_KEY];
const SIGN_PEEK: &[Param] = &[SIGNED_MESSAGE];
const BOX: &[Param] = &[MESSAGE, NONCE, PUBLIC_KEY, SECRET_KEY];
const BOX_OPEN: &[Param] = &[CIPHERTEXT, NONCE, PUBLIC_KEY, SECRET_KEY];
const SECRETBOX: &[Param] = &[MESSAGE, NONCE, KEY];
const SECRETBOX_OPEN: &[Param] = &[CIPHERTEXT, NONCE, KEY];
const AUTH: &[Param] = &[MESSAGE, KEY];
const AUTH_VERIFY: &[Param] = &[Param::bytes("authenticator"), MESSAGE, KEY];
const HASH: &[Param] = &[MESSAGE];
const RANDOM_BYTES: &[Param] = &[Param::u32("count")];

/// Every operation the gateway exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Generate an Ed25519 keypair
    SignKeypair,
    /// Sign a message
    Sign,
    /// Verify a signed message and return its payload
    SignOpen,
    /// Return a signed message's payload without verifying it
    SignPeek,
    /// Generate an X25519 box keypair
    BoxKeypair,
    /// Public-key authenticated encryption
    Box,
    /// Public-key authenticated decryption
    BoxOpen,
    /// Random box nonce
    BoxRandomNonce,
    /// Secret-key authenticated encryption
    Secretbox,
    /// Secret-key authenticated decryption
    SecretboxOpen,
    /// Random secretbox nonce
    SecretboxRandomNonce,
    /// Random secretbox key
    SecretboxKeygen,
    /// Compute an authenticator
    Auth,
    /// Verify an authenticator
    AuthVerify,
    /// Truncated SHA-512
    Hash,
    /// Bounded random bytes
    RandomBytes,
}

impl Operation {
    /// Every operation, in registration order.
    pub const ALL: [Self; 16] = [
        Self::SignKeypair,
        Self::Sign,
        Self::SignOpen,
        Self::SignPeek,
        Self::BoxKeypair,
        Self::Box,
        Self::BoxOpen,
        Self::BoxRandomNonce,
        Self::Secretbox,
        Self::SecretboxOpen,
        Self::SecretboxRandomNonce,
        Self::SecretboxKeygen,
        Self::Auth,
        Self::AuthVerify,
        Self::Hash,
        Self::RandomBytes,
    ];

    /// Host name of the binary-output variant.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SignKeypair => "sign_keypair",
            Self::Sign => "sign",
            Self::SignOpen => "sign_open",
            Self::SignPeek => "sign_peek",
            Self::BoxKeypair => "box_keypair",
            Self::Box => "box",
            Self::BoxOpen => "box_open",
            Self::BoxRandomNonce => "box_random_nonce",
            Self::Secretbox => "secretbox",
            Self::SecretboxOpen => "secretbox_open",
            Self::SecretboxRandomNonce => "secretbox_random_nonce",
            Self::SecretboxKeygen => "secretbox_keygen",
            Self::Auth => "auth",
            Self::AuthVerify => "auth_verify",
            Self::Hash => "hash",
            Self::RandomBytes => "randombytes",
        }
    }

    /// Parameters, in call order.
    pub const fn params(self) -> &'static [Param] {
        match self {
            Self::SignKeypair
            | Self::BoxKeypair
            | Self::BoxRandomNonce
            | Self::SecretboxRandomNonce
            | Self::SecretboxKeygen => &[],
            Self::Sign => SIGN,
            Self::SignOpen => SIGN_OPEN,
            Self::SignPeek => SIGN_PEEK,
            Self::Box => BOX,
            Self::BoxOpen => BOX_OPEN,
            Self::Secretbox => SECRETBOX,
            Self::SecretboxOpen => SECRETBOX_OPEN,
            Self::Auth => AUTH,
            Self::AuthVerify => AUTH_VERIFY,
            Self::Hash => HASH,
            Self::RandomBytes => RANDOM_BYTES,
        }
    }

    /// Returns true if the operation also has a `_utf8` text-output variant.
    pub const fn has_text_variant(self) -> bool {
        matches!(
            self,
            Self::Sign
                | Self::SignOpen
                | Self::SignPeek
                | Self::Box
                | Self::BoxOpen
                | Self::Secretbox
                | Self::SecretboxOpen
                | Self::Auth
                | Self::AuthVerify
                | Self::Hash
        )
    }

    /// Resolve a host name to an operation and its output encoding.
    ///
    /// `"sign_open_utf8"` resolves to `(SignOpen, Text)`. The suffix is only
    /// recognised on operations that have a text variant.
    pub fn resolve(host_name: &str) -> Option<(Self, Encoding)> {
        if let Some(op) = Self::ALL.into_iter().find(|op| op.name() == host_name) {
            return Some((op, Encoding::Binary));
        }

        let base = host_name.strip_suffix(TEXT_SUFFIX)?;
        Self::ALL
            .into_iter()
            .find(|op| op.has_text_variant() && op.name() == base)
            .map(|op| (op, Encoding::Text))
    }

    /// Every host name, binary variants first within each operation.
    pub fn host_names() -> impl Iterator<Item = String> {
        Self::ALL.into_iter().flat_map(|op| {
            let text = op.has_text_variant().then(|| format!("{}{TEXT_SUFFIX}", op.name()));
            std::iter::once(op.name().to_owned()).chain(text)
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
