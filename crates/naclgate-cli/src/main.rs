//! naclgate binary.
//!
//! # Usage
//!
//! ```bash
//! # Generate a signing keypair
//! naclgate call sign_keypair
//!
//! # Sign, then verify and print the payload as text
//! naclgate call sign text:"Hello World!" hex:<secretKey>
//! naclgate call sign_open_utf8 hex:<signed> hex:<publicKey>
//!
//! # Published sizes, all or one
//! naclgate constants
//! naclgate constants box_NONCEBYTES
//!
//! # Every callable host name
//! naclgate operations
//!
//! # Time the core families
//! naclgate bench --iterations 1024 --payload 54
//! ```

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use naclgate_cli::{BenchConfig, CliError, bench, render};
use naclgate_core::Gateway;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// NaCl-style cryptography gateway
#[derive(Parser, Debug)]
#[command(name = "naclgate")]
#[command(about = "Call NaCl-style operations through the validating gateway")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Call an operation by host name
    Call {
        /// Operation host name, e.g. `sign_open_utf8`
        operation: String,

        /// Arguments as `text:<s>`, `hex:<h>` or `u32:<n>`
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the published constants
    Constants {
        /// Print only this constant's value
        name: Option<String>,
    },

    /// List every callable host name
    Operations,

    /// Time keypair, sign, box and secretbox operations
    Bench {
        /// Calls per operation
        #[arg(long, default_value_t = BenchConfig::default().iterations,
              value_parser = clap::value_parser!(u32).range(1..))]
        iterations: u32,

        /// Message size in bytes
        #[arg(long, default_value_t = BenchConfig::default().payload)]
        payload: usize,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            if let Err(io_err) = writeln!(io::stderr().lock(), "{err}") {
                tracing::warn!(error = %io_err, "failed to report command error");
            }
            ExitCode::from(err.exit_code())
        },
    }
}

fn run(command: Command) -> Result<(), CliError> {
    let gateway = Gateway::new();
    let mut out = io::stdout().lock();

    match command {
        Command::Call { operation, args } => naclgate_cli::call(&gateway, &operation, &args, &mut out),
        Command::Constants { name } => naclgate_cli::constant(name.as_deref(), &mut out),
        Command::Operations => Ok(render::operations(&mut out)?),
        Command::Bench { iterations, payload } => {
            let report = bench::run(&gateway, BenchConfig { iterations, payload })?;
            Ok(report.write_to(&mut out)?)
        },
    }
}
