//! Randomness source for keys, nonces and `randombytes`.
//!
//! Decouples the gateway from the OS RNG so tests can drive key generation
//! deterministically. Production uses [`SystemEntropy`].

/// Source of cryptographically secure random bytes.
///
/// # Safety
///
/// Implementations MUST guarantee:
///
/// - `fill_bytes()` uses cryptographically secure entropy in production
/// - Concurrent callers never receive correlated or repeated output
pub trait EntropySource: Send + Sync {
    /// Fills the provided buffer with random bytes.
    fn fill_bytes(&self, buffer: &mut [u8]);

    /// Random fixed-size array.
    fn array<const N: usize>(&self) -> [u8; N]
    where
        Self: Sized,
    {
        let mut bytes = [0u8; N];
        self.fill_bytes(&mut bytes);
        bytes
    }
}

/// OS cryptographic RNG via getrandom.
///
/// getrandom is thread-safe and draws fresh OS entropy on every call (e.g.
/// `getrandom(2)` on Linux, `BCryptGenRandom` on Windows), so no internal
/// locking is needed.
///
/// # Panics
///
/// Panics if the OS RNG fails. Without working entropy no key or nonce can be
/// generated safely, and returning predictable bytes would be worse than
/// stopping.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    #[allow(clippy::expect_used)]
    fn fill_bytes(&self, buffer: &mut [u8]) {
        getrandom::fill(buffer)
            .expect("invariant: OS RNG failure is unrecoverable - keys and nonces need entropy");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU8, Ordering};

    use super::*;

    /// Emits 0, 1, 2, ... across calls.
    struct Counter(AtomicU8);

    impl EntropySource for Counter {
        fn fill_bytes(&self, buffer: &mut [u8]) {
            for byte in buffer {
                *byte = self.0.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    #[test]
    fn array_is_one_fill_of_exactly_n_bytes() {
        let counter = Counter(AtomicU8::new(0));

        assert_eq!(counter.array::<4>(), [0, 1, 2, 3]);
        assert_eq!(counter.array::<2>(), [4, 5]);
    }

    #[test]
    fn system_arrays_never_repeat() {
        let mut drawn: Vec<[u8; 32]> = (0..16).map(|_| SystemEntropy.array()).collect();
        drawn.sort_unstable();
        drawn.dedup();

        assert_eq!(drawn.len(), 16);
    }

    #[test]
    fn system_fill_reaches_the_end_of_large_buffers() {
        let mut a = vec![0u8; 4096];
        let mut b = vec![0u8; 4096];
        SystemEntropy.fill_bytes(&mut a);
        SystemEntropy.fill_bytes(&mut b);

        assert_ne!(a[4064..], b[4064..]);
    }

    #[test]
    fn empty_buffer_is_fine() {
        SystemEntropy.fill_bytes(&mut []);
    }
}
