//! Sizing contract for callers.
//!
//! Fixed by the primitives the gateway wraps. Callers size keys, nonces and
//! buffers from these values; the gateway rejects anything else rather than
//! truncating or padding it.

/// Ed25519 public key size.
pub const SIGN_PUBLIC_KEY_SIZE: usize = 32;

/// Ed25519 secret key size (32-byte seed followed by the public key).
pub const SIGN_SECRET_KEY_SIZE: usize = 64;

/// Ed25519 signature size, and therefore the shortest valid signed message.
pub const MIN_SIGNED_MESSAGE_SIZE: usize = 64;

/// Box (X25519) public key size.
pub const BOX_PUBLIC_KEY_SIZE: usize = 32;

/// Box (X25519) secret key size.
pub const BOX_SECRET_KEY_SIZE: usize = 32;

/// Box nonce size (XSalsa20).
pub const BOX_NONCE_SIZE: usize = 24;

/// Poly1305 tag carried inside every box ciphertext.
pub const BOX_MAC_SIZE: usize = 16;

/// Secretbox key size.
pub const SECRETBOX_KEY_SIZE: usize = 32;

/// Secretbox nonce size (XSalsa20).
pub const SECRETBOX_NONCE_SIZE: usize = 24;

/// Poly1305 tag carried inside every secretbox ciphertext.
pub const SECRETBOX_MAC_SIZE: usize = 16;

/// HMAC-SHA-512-256 key size.
pub const AUTH_KEY_SIZE: usize = 32;

/// HMAC-SHA-512-256 authenticator size.
pub const AUTH_SIZE: usize = 32;

/// Hash output size (SHA-512 truncated).
pub const HASH_SIZE: usize = 32;

/// Exclusive upper bound on a single `randombytes` request.
pub const RANDOM_BYTES_LIMIT: u32 = 256;

/// Constants published to hosts, by host-facing name.
pub const PUBLISHED: &[(&str, usize)] = &[
    ("box_PUBLICKEYBYTES", BOX_PUBLIC_KEY_SIZE),
    ("box_SECRETKEYBYTES", BOX_SECRET_KEY_SIZE),
    ("box_NONCEBYTES", BOX_NONCE_SIZE),
    ("secretbox_KEYBYTES", SECRETBOX_KEY_SIZE),
    ("secretbox_NONCEBYTES", SECRETBOX_NONCE_SIZE),
    ("auth_KEYBYTES", AUTH_KEY_SIZE),
    ("auth_BYTES", AUTH_SIZE),
    ("sign_PUBLICKEYBYTES", SIGN_PUBLIC_KEY_SIZE),
    ("sign_SECRETKEYBYTES", SIGN_SECRET_KEY_SIZE),
    ("hash_BYTES", HASH_SIZE),
];

/// Look up a published constant by host name.
pub fn published(name: &str) -> Option<usize> {
    PUBLISHED.iter().find(|(published, _)| *published == name).map(|&(_, value)| value)
}
