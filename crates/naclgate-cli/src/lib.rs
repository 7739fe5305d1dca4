//! naclgate command-line host.
//!
//! A small embedding of the gateway: operations are called by host name with
//! typed command-line arguments, results are rendered to a writer, and a
//! benchmark times the core families.
//!
//! # Argument Forms
//!
//! | Form       | Value                    |
//! |------------|--------------------------|
//! | `text:<s>` | text, passed as UTF-8    |
//! | `hex:<h>`  | raw bytes                |
//! | `u32:<n>`  | unsigned 32-bit integer  |
//!
//! Output is written through `std::io::Write` so the same code serves the
//! binary and the tests.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod arg;
pub mod bench;
pub mod error;
pub mod render;

use std::io::Write;

pub use bench::{BenchConfig, BenchReport};
pub use error::CliError;
use naclgate_core::{EntropySource, Gateway, constants};

/// Parse `raw_args`, call `operation` and render its result to `out`.
///
/// # Errors
///
/// - [`CliError::Argument`] if an argument is malformed
/// - [`CliError::Gateway`] if the gateway rejects the call
/// - [`CliError::Io`] if writing the result fails
pub fn call<E, W>(
    gateway: &Gateway<E>,
    operation: &str,
    raw_args: &[String],
    out: &mut W,
) -> Result<(), CliError>
where
    E: EntropySource,
    W: Write,
{
    let args = raw_args.iter().map(|raw| arg::parse(raw)).collect::<Result<Vec<_>, _>>()?;
    let value = gateway.call_named(operation, &args)?;
    render::value(out, &value)?;
    Ok(())
}

/// Write one published constant, or all of them when `name` is `None`.
///
/// # Errors
///
/// - [`CliError::Argument`] if `name` is not a published constant
/// - [`CliError::Io`] if writing fails
pub fn constant<W: Write>(name: Option<&str>, out: &mut W) -> Result<(), CliError> {
    let Some(name) = name else {
        return Ok(render::constants(out)?);
    };

    let size = constants::published(name).ok_or_else(|| CliError::Argument {
        raw: name.to_owned(),
        reason: "not a published constant".to_owned(),
    })?;
    writeln!(out, "{size}")?;
    Ok(())
}
