//! Keypairs handed to callers.

use std::{collections::BTreeMap, fmt};

use zeroize::Zeroize;

use crate::codec::Value;

/// Host field name for the public key.
pub const PUBLIC_KEY_FIELD: &str = "publicKey";

/// Host field name for the secret key.
pub const SECRET_KEY_FIELD: &str = "secretKey";

/// A freshly generated keypair.
///
/// Ownership passes entirely to the caller; the gateway keeps no copy. The
/// secret half is zeroized when this value is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    public_key: Vec<u8>,
    secret_key: Vec<u8>,
}

impl KeyPair {
    pub(crate) fn new(public_key: Vec<u8>, secret_key: Vec<u8>) -> Self {
        Self { public_key, secret_key }
    }

    /// Public half.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Secret half.
    pub fn secret_key(&self) -> &[u8] {
        &self.secret_key
    }

    /// Convert into the host record `{publicKey, secretKey}`.
    pub fn into_value(mut self) -> Value {
        let public_key = std::mem::take(&mut self.public_key);
        let secret_key = std::mem::take(&mut self.secret_key);

        Value::Object(BTreeMap::from([
            (PUBLIC_KEY_FIELD.to_owned(), Value::Bytes(public_key)),
            (SECRET_KEY_FIELD.to_owned(), Value::Bytes(secret_key)),
        ]))
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.secret_key.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_value_carries_both_halves() {
        let pair = KeyPair::new(vec![1, 2], vec![3, 4]);
        let value = pair.into_value();

        assert_eq!(value.get(PUBLIC_KEY_FIELD), Some(&Value::Bytes(vec![1, 2])));
        assert_eq!(value.get(SECRET_KEY_FIELD), Some(&Value::Bytes(vec![3, 4])));
    }

    #[test]
    fn debug_redacts_secret() {
        let pair = KeyPair::new(vec![1], vec![0xAB; 4]);
        let rendered = format!("{pair:?}");

        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("171"));
    }
}
