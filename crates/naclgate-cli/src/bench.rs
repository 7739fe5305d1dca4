//! Benchmark harness.
//!
//! Runs each core family `iterations` times over a fixed payload and reports
//! total and per-operation time. Each stage feeds the next: the signatures
//! produced by `sign` are the inputs to `sign_open`, and likewise for the
//! box families, so every measured call does real work.

use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

use naclgate_core::{
    EntropySource, Gateway, Result,
    ops::{boxes, secretbox, sign},
};

/// Benchmark parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Calls per operation
    pub iterations: u32,
    /// Message size in bytes
    pub payload: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self { iterations: 128, payload: 54 }
    }
}

/// Timing for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    /// Operation host name
    pub operation: &'static str,
    /// Wall time across all iterations
    pub total: Duration,
}

/// Results of a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchReport {
    /// Parameters the run used
    pub config: BenchConfig,
    /// One entry per operation, in run order
    pub timings: Vec<Timing>,
}

impl BenchReport {
    /// Write the report as an aligned table.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{} iterations, {}-byte payload",
            self.config.iterations, self.config.payload
        )?;
        for timing in &self.timings {
            writeln!(
                out,
                "{:<16} {:>12.1} us total {:>10.2} us/op",
                timing.operation,
                micros(timing.total),
                micros(timing.total) / f64::from(self.config.iterations),
            )?;
        }
        Ok(())
    }
}

fn micros(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000_000.0
}

/// Run `f` once per input and record the elapsed time under `operation`.
#[allow(clippy::disallowed_methods)]
fn timed<I, T>(
    operation: &'static str,
    inputs: I,
    mut f: impl FnMut(I::Item) -> Result<T>,
    timings: &mut Vec<Timing>,
) -> Result<Vec<T>>
where
    I: IntoIterator,
{
    let start = Instant::now();
    let outputs = inputs.into_iter().map(&mut f).collect::<Result<Vec<_>>>()?;
    timings.push(Timing { operation, total: start.elapsed() });
    Ok(outputs)
}

/// Run every benchmark stage.
///
/// # Errors
///
/// Any gateway error. Inputs are generated by the gateway itself, so an error
/// here means a primitive rejected its own output.
pub fn run<E: EntropySource>(gateway: &Gateway<E>, config: BenchConfig) -> Result<BenchReport> {
    let n = config.iterations as usize;
    let message = vec![0x5a; config.payload];
    let mut timings = Vec::with_capacity(7);

    tracing::debug!(iterations = config.iterations, payload = config.payload, "benchmark starting");

    let signers = timed("sign_keypair", 0..n, |_| Ok(gateway.sign_keypair()), &mut timings)?;
    let signed = timed(
        "sign",
        &signers,
        |keys| sign::sign(&message, keys.secret_key()),
        &mut timings,
    )?;
    timed(
        "sign_open",
        signers.iter().zip(&signed),
        |(keys, sm)| sign::open(sm, keys.public_key()),
        &mut timings,
    )?;

    let alice = gateway.box_keypair();
    let bob = gateway.box_keypair();
    let nonces: Vec<Vec<u8>> = (0..n).map(|_| boxes::random_nonce(gateway.entropy())).collect();
    let boxed = timed(
        "box",
        &nonces,
        |nonce| boxes::seal(&message, nonce, bob.public_key(), alice.secret_key()),
        &mut timings,
    )?;
    timed(
        "box_open",
        boxed.iter().zip(&nonces),
        |(ct, nonce)| boxes::open(ct, nonce, alice.public_key(), bob.secret_key()),
        &mut timings,
    )?;

    let key = secretbox::keygen(gateway.entropy());
    let nonces: Vec<Vec<u8>> =
        (0..n).map(|_| secretbox::random_nonce(gateway.entropy())).collect();
    let sealed = timed(
        "secretbox",
        &nonces,
        |nonce| secretbox::seal(&message, nonce, &key),
        &mut timings,
    )?;
    timed(
        "secretbox_open",
        sealed.iter().zip(&nonces),
        |(ct, nonce)| secretbox::open(ct, nonce, &key),
        &mut timings,
    )?;

    Ok(BenchReport { config, timings })
}
