//! Process-wide generator streams.
//!
//! A [`StreamProvider`] is a capability that lends out a shared, stateful
//! generator, lazily constructed on first use and living for the rest of
//! the process. Two streams exist:
//!
//! - [`FastStream`]: a small, fast, non-cryptographic generator,
//!   auto-seeded from OS entropy. For non-critical randomness.
//! - [`ServerStream`]: a ChaCha-based generator that its owner must seed
//!   explicitly via [`ServerStream::seed`] before first use. Using it
//!   unseeded panics; there is no silent auto-seed fallback.
//!
//! Both streams sit behind a `OnceLock<Mutex<..>>`, so lazy initialisation
//! is thread-safe and concurrent draws serialise on the mutex. Callers that
//! need an isolated, reproducible sequence should bypass the streams and
//! pass their own fixed-seed generator to the [`draw`](crate::draw)
//! functions instead.

use std::sync::{Mutex, OnceLock};

use rand::rngs::{SmallRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::error::StreamError;

static FAST_STREAM: OnceLock<Mutex<SmallRng>> = OnceLock::new();
static SERVER_STREAM: OnceLock<Mutex<StdRng>> = OnceLock::new();

/// Capability supplying a shared pseudo-random generator.
///
/// Implementations own the generator for the life of the process; callers
/// only borrow it for the duration of the closure passed to
/// [`with`](StreamProvider::with). The closure shape (rather than returning
/// a guard) keeps the lock scope tied to a single draw.
pub trait StreamProvider {
    /// The concrete generator algorithm backing this stream.
    type Generator: RngCore;

    /// Runs `f` with exclusive access to the stream's generator.
    ///
    /// # Panics
    /// Panics if the stream's preconditions are not met (see the concrete
    /// stream) or if the stream mutex was poisoned.
    fn with<F, T>(f: F) -> T
    where
        F: FnOnce(&mut Self::Generator) -> T;
}

/// The fast, auto-seeded stream for non-critical randomness.
///
/// Backed by [`SmallRng`]; seeded once from OS entropy on first use. Draws
/// from this stream are not reproducible across runs.
#[derive(Debug, Clone, Copy)]
pub struct FastStream;

impl StreamProvider for FastStream {
    type Generator = SmallRng;

    fn with<F, T>(f: F) -> T
    where
        F: FnOnce(&mut SmallRng) -> T,
    {
        let cell = FAST_STREAM.get_or_init(|| {
            tracing::debug!("fast stream auto-seeded from OS entropy");
            Mutex::new(SmallRng::from_entropy())
        });
        let mut generator = cell.lock().expect("fast stream mutex poisoned");
        f(&mut generator)
    }
}

/// The explicitly seeded stream for server-authoritative randomness.
///
/// Backed by [`StdRng`]. The stream's owner must call [`ServerStream::seed`]
/// exactly once before the first draw; drawing from an unseeded stream is a
/// programmer error and panics.
///
/// # Examples
/// ```
/// use sampler_core::{ServerStream, StreamProvider};
/// use rand::Rng;
///
/// ServerStream::seed(0xC0FFEE).unwrap();
/// let value: u64 = ServerStream::with(|rng| rng.gen());
/// let _ = value;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ServerStream;

impl ServerStream {
    /// Seeds the server stream. One-shot: a second call returns
    /// [`StreamError::AlreadySeeded`] and leaves the stream untouched,
    /// since reseeding would silently rewind every consumer.
    pub fn seed(seed: u64) -> Result<(), StreamError> {
        SERVER_STREAM
            .set(Mutex::new(StdRng::seed_from_u64(seed)))
            .map_err(|_| StreamError::AlreadySeeded)?;
        tracing::info!(seed, "server stream seeded");
        Ok(())
    }

    /// Returns whether [`seed`](ServerStream::seed) has been called.
    pub fn is_seeded() -> bool {
        SERVER_STREAM.get().is_some()
    }

    /// Non-panicking variant of [`StreamProvider::with`]: returns
    /// [`StreamError::NotSeeded`] instead of panicking when the stream has
    /// not been seeded yet.
    pub fn try_with<F, T>(f: F) -> Result<T, StreamError>
    where
        F: FnOnce(&mut StdRng) -> T,
    {
        let cell = SERVER_STREAM.get().ok_or(StreamError::NotSeeded)?;
        let mut generator = cell.lock().expect("server stream mutex poisoned");
        Ok(f(&mut generator))
    }
}

impl StreamProvider for ServerStream {
    type Generator = StdRng;

    /// Runs `f` with exclusive access to the seeded generator.
    ///
    /// # Panics
    /// Panics if the stream has not been seeded.
    fn with<F, T>(f: F) -> T
    where
        F: FnOnce(&mut StdRng) -> T,
    {
        match Self::try_with(f) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_fast_stream_draws() {
        let value: u32 = FastStream::with(|rng| rng.gen_range(0..=10));
        assert!(value <= 10);
    }

    /// The server stream's whole lifecycle lives in one test function:
    /// the underlying state is process-global, so splitting this across
    /// tests would make the outcome depend on execution order.
    #[test]
    fn test_server_stream_lifecycle() {
        assert!(!ServerStream::is_seeded());
        assert_eq!(
            ServerStream::try_with(|rng| rng.gen::<u64>()),
            Err(StreamError::NotSeeded)
        );

        ServerStream::seed(1234).unwrap();
        assert!(ServerStream::is_seeded());

        // Reseeding is rejected and must not rewind the stream.
        assert_eq!(ServerStream::seed(99), Err(StreamError::AlreadySeeded));

        // First draws mirror a fresh generator with the same seed.
        let mut expected = StdRng::seed_from_u64(1234);
        for _ in 0..16 {
            let drawn: u64 = ServerStream::with(|rng| rng.gen());
            assert_eq!(drawn, expected.gen::<u64>());
        }
    }
}
