//! Error taxonomy for gateway operations.
//!
//! Every failed call produces exactly one [`GatewayError`]. The variant tells
//! the caller which domain rejected the call; the message is for humans and is
//! never needed to tell two failures apart.
//!
//! `Argument` is a call-contract violation detected before any cryptographic
//! work. The `Bad*` variants are cryptographic rejections, raised either by a
//! size guard on structurally invalid input or by a primitive that refused to
//! authenticate it.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Closed set of error kinds a caller can match on.
///
/// This is the process-wide kind registry: a compile-time table that every
/// call site shares and nothing can mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong arity, wrong argument type, or out-of-range count
    Argument,
    /// Signing or signature verification rejected the input
    BadSignature,
    /// Public-key box rejected the input
    BadBox,
    /// Secret-key box rejected the input
    BadSecretBox,
    /// Authenticator did not verify
    BadAuthenticator,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Argument,
        Self::BadSignature,
        Self::BadBox,
        Self::BadSecretBox,
        Self::BadAuthenticator,
    ];

    /// Stable name exposed to hosts.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Argument => "ArgumentError",
            Self::BadSignature => "BadSignatureError",
            Self::BadBox => "BadBoxError",
            Self::BadSecretBox => "BadSecretBoxError",
            Self::BadAuthenticator => "BadAuthenticatorError",
        }
    }

    /// Build an error of this kind.
    pub fn error(self, message: impl Into<String>) -> GatewayError {
        let message = message.into();
        match self {
            Self::Argument => GatewayError::Argument { message },
            Self::BadSignature => GatewayError::BadSignature { message },
            Self::BadBox => GatewayError::BadBox { message },
            Self::BadSecretBox => GatewayError::BadSecretBox { message },
            Self::BadAuthenticator => GatewayError::BadAuthenticator { message },
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned by gateway operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Malformed call: arity, argument type, or range
    #[error("ArgumentError: {message}")]
    Argument {
        /// Human-readable description
        message: String,
    },

    /// Signature rejected, or signing key unusable
    #[error("BadSignatureError: {message}")]
    BadSignature {
        /// Human-readable description
        message: String,
    },

    /// Box ciphertext, key or nonce rejected
    #[error("BadBoxError: {message}")]
    BadBox {
        /// Human-readable description
        message: String,
    },

    /// Secretbox ciphertext, key or nonce rejected
    #[error("BadSecretBoxError: {message}")]
    BadSecretBox {
        /// Human-readable description
        message: String,
    },

    /// Authenticator or auth key rejected
    #[error("BadAuthenticatorError: {message}")]
    BadAuthenticator {
        /// Human-readable description
        message: String,
    },
}

impl GatewayError {
    /// Kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Argument { .. } => ErrorKind::Argument,
            Self::BadSignature { .. } => ErrorKind::BadSignature,
            Self::BadBox { .. } => ErrorKind::BadBox,
            Self::BadSecretBox { .. } => ErrorKind::BadSecretBox,
            Self::BadAuthenticator { .. } => ErrorKind::BadAuthenticator,
        }
    }

    /// Message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Argument { message }
            | Self::BadSignature { message }
            | Self::BadBox { message }
            | Self::BadSecretBox { message }
            | Self::BadAuthenticator { message } => message,
        }
    }
}
