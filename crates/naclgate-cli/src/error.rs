//! CLI error types.

use std::io;

use naclgate_core::GatewayError;
use thiserror::Error;

/// Errors from the command-line host.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command-line argument could not be turned into a host value
    #[error("invalid argument {raw:?}: {reason}")]
    Argument {
        /// Argument as typed
        raw: String,
        /// Why it was rejected
        reason: String,
    },

    /// The gateway rejected the call
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Writing output failed
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// Gateway rejections exit with 1; malformed invocations with 2, the
    /// same status clap uses for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Gateway(_) | Self::Io(_) => 1,
            Self::Argument { .. } => 2,
        }
    }
}
