//! Command-line argument forms.
//!
//! Every argument names its form with a prefix so the same shell word can be
//! passed as text or as bytes without guessing.

use naclgate_core::Value;

use crate::error::CliError;

/// Prefix for a text argument.
pub const TEXT_PREFIX: &str = "text:";

/// Prefix for a hex-encoded byte argument.
pub const HEX_PREFIX: &str = "hex:";

/// Prefix for an unsigned 32-bit integer argument.
pub const U32_PREFIX: &str = "u32:";

/// Parse one command-line argument into a host value.
///
/// # Errors
///
/// - [`CliError::Argument`] if the prefix is missing, the hex is malformed or
///   the integer does not fit in 32 bits
pub fn parse(raw: &str) -> Result<Value, CliError> {
    let invalid = |reason: String| CliError::Argument { raw: raw.to_owned(), reason };

    if let Some(text) = raw.strip_prefix(TEXT_PREFIX) {
        return Ok(Value::from(text));
    }

    if let Some(digits) = raw.strip_prefix(HEX_PREFIX) {
        return hex::decode(digits).map(Value::Bytes).map_err(|e| invalid(e.to_string()));
    }

    if let Some(number) = raw.strip_prefix(U32_PREFIX) {
        return number.parse::<u32>().map(Value::from).map_err(|e| invalid(e.to_string()));
    }

    Err(invalid(format!("expected a {TEXT_PREFIX}, {HEX_PREFIX} or {U32_PREFIX} prefix")))
}
