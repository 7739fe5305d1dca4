//! Byte codec between host values and raw bytes.
//!
//! Hosts hand over byte sequences either as text or as raw buffers. Both
//! decode to the same underlying bytes: text is taken as its UTF-8 encoding,
//! a buffer is taken verbatim. On the way out, the caller picks the form.
//!
//! # Invariants
//!
//! - `decode(encode(b, Binary)) == b` for every byte sequence `b`
//! - The text path round-trips only for valid UTF-8. Other bytes requested as
//!   text are converted lossily (U+FFFD replacement), deterministically and
//!   without error

use std::collections::BTreeMap;

/// Output form requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Raw bytes, passed through unchanged
    #[default]
    Binary,
    /// Text, bytes interpreted as UTF-8
    Text,
}

/// A host-native value crossing the gateway boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Character data
    Text(String),
    /// Raw byte buffer
    Bytes(Vec<u8>),
    /// Integral number
    Integer(i64),
    /// Floating-point number
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Absent value; also the result of operations with no output
    Null,
    /// Keyed record, used for keypairs
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Short description of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
            Self::Object(_) => "object",
        }
    }

    /// Underlying bytes when this value is text or a buffer.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        ByteArg::from_value(self).map(decode)
    }

    /// Field of an object value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self {
            Self::Object(fields) => fields.get(field),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

/// A byte-like argument borrowed from the caller's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteArg<'a> {
    /// Supplied as text
    Text(&'a str),
    /// Supplied as a raw buffer
    Binary(&'a [u8]),
}

impl<'a> ByteArg<'a> {
    /// Borrow a byte-like argument, or `None` for any other value type.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Text(text) => Some(Self::Text(text)),
            Value::Bytes(bytes) => Some(Self::Binary(bytes)),
            _ => None,
        }
    }
}

/// Canonical bytes of a byte-like argument.
///
/// Never copies: text yields its UTF-8 encoding, a buffer yields itself.
pub fn decode(arg: ByteArg<'_>) -> &[u8] {
    match arg {
        ByteArg::Text(text) => text.as_bytes(),
        ByteArg::Binary(bytes) => bytes,
    }
}

/// Wrap output bytes in the requested form.
pub fn encode(bytes: Vec<u8>, encoding: Encoding) -> Value {
    match encoding {
        Encoding::Binary => Value::Bytes(bytes),
        Encoding::Text => match String::from_utf8(bytes) {
            Ok(text) => Value::Text(text),
            Err(err) => Value::Text(String::from_utf8_lossy(err.as_bytes()).into_owned()),
        },
    }
}
