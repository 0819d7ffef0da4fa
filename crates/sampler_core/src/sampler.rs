//! Stream-backed sampling facade.
//!
//! [`Sampler`] re-exposes every [`draw`](crate::draw) operation without the
//! generator argument, borrowing the shared generator from a
//! [`StreamProvider`] for the duration of each draw. Two aliases cover the
//! concrete streams: [`Random`] (fast, auto-seeded) and [`ServerRandom`]
//! (must be seeded via [`ServerStream::seed`](crate::ServerStream::seed)).

use std::marker::PhantomData;

use num_traits::{Float, PrimInt};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, OpenClosed01, Standard};
use rand_distr::StandardNormal;

use crate::draw;
use crate::stream::{FastStream, ServerStream, StreamProvider};

/// Sampling operations over a [`StreamProvider`]'s shared generator.
///
/// This is a namespace, not a value: all operations are associated
/// functions, mirroring the stream's process-wide state. For isolated,
/// reproducible sequences use the [`draw`](crate::draw) functions with an
/// explicit generator instead.
///
/// # Examples
/// ```
/// use sampler_core::Random;
///
/// let chance: u8 = Random::probability();
/// if chance <= 25 {
///     // a quarter of the time, on average
/// }
/// ```
pub struct Sampler<P: StreamProvider> {
    _provider: PhantomData<P>,
}

/// The default sampler, drawing from the fast auto-seeded stream.
pub type Random = Sampler<FastStream>;

/// The server sampler, drawing from the explicitly seeded server stream.
///
/// # Panics
/// Every operation panics if
/// [`ServerStream::seed`](crate::ServerStream::seed) has not been called.
pub type ServerRandom = Sampler<ServerStream>;

impl<P: StreamProvider> Sampler<P> {
    /// Draws a uniform value over the full representable range of `T`.
    #[inline]
    pub fn uniform<T>() -> T
    where
        T: PrimInt,
        Standard: Distribution<T>,
    {
        P::with(|rng| draw::uniform(rng))
    }

    /// Draws a uniform integer in `[0, to]` inclusive.
    ///
    /// # Panics
    /// Panics if `to < 0`.
    #[inline]
    pub fn uniform_to<T>(to: T) -> T
    where
        T: PrimInt + SampleUniform,
    {
        P::with(|rng| draw::uniform_to(to, rng))
    }

    /// Draws a uniform integer in `[from, to]` inclusive.
    ///
    /// # Panics
    /// Panics if `from > to`.
    #[inline]
    pub fn uniform_between<T>(from: T, to: T) -> T
    where
        T: PrimInt + SampleUniform,
    {
        P::with(|rng| draw::uniform_between(from, to, rng))
    }

    /// Draws a percentage roll: a uniform integer in `[0, 100]` inclusive.
    #[inline]
    pub fn probability<T>() -> T
    where
        T: PrimInt + SampleUniform,
    {
        P::with(|rng| draw::probability(rng))
    }

    /// Draws a uniform float in `(0, 1]` — lower bound excluded, upper
    /// included. See [`draw::uniform_f`] for why the bounds are asymmetric.
    #[inline]
    pub fn uniform_f<T>() -> T
    where
        T: Float,
        OpenClosed01: Distribution<T>,
    {
        P::with(|rng| draw::uniform_f(rng))
    }

    /// Draws a uniform float in `[0, to]`, both bounds included.
    ///
    /// # Panics
    /// Panics if `to < 0` or `to` is NaN.
    #[inline]
    pub fn uniform_f_to<T>(to: T) -> T
    where
        T: Float + SampleUniform,
    {
        P::with(|rng| draw::uniform_f_to(to, rng))
    }

    /// Draws a uniform float in `[from, to]`, both bounds included.
    ///
    /// # Panics
    /// Panics if `from > to` or either bound is NaN.
    #[inline]
    pub fn uniform_f_between<T>(from: T, to: T) -> T
    where
        T: Float + SampleUniform,
    {
        P::with(|rng| draw::uniform_f_between(from, to, rng))
    }

    /// Draws a uniform float in `[0, 1]`, both bounds included.
    #[inline]
    pub fn probability_f<T>() -> T
    where
        T: Float + SampleUniform,
    {
        P::with(|rng| draw::probability_f(rng))
    }

    /// Draws `true` or `false` with equal probability.
    #[inline]
    pub fn yes_no() -> bool {
        P::with(|rng| draw::yes_no(rng))
    }

    /// Draws a Gaussian variate with the given mean and standard deviation.
    ///
    /// # Panics
    /// Panics if `stddev` is negative or NaN.
    #[inline]
    pub fn normal<T>(mean: T, stddev: T) -> T
    where
        T: Float,
        StandardNormal: Distribution<T>,
    {
        P::with(|rng| draw::normal(mean, stddev, rng))
    }

    /// Draws a triangular variate with lower limit `a`, upper limit `b`
    /// and mode `c`.
    ///
    /// # Panics
    /// Panics unless `a < b` and `a <= c <= b`.
    #[inline]
    pub fn triangular<T>(a: T, b: T, c: T) -> T
    where
        T: Float,
        Standard: Distribution<T>,
    {
        P::with(|rng| draw::triangular(a, b, c, rng))
    }

    /// Picks one element uniformly at random from a slice, in O(1).
    ///
    /// # Panics
    /// Panics if the slice is empty.
    #[inline]
    pub fn pick<T>(items: &[T]) -> &T {
        P::with(|rng| draw::pick(items, rng))
    }

    /// Picks one element uniformly at random from any sized iterable,
    /// returning it by value. O(offset) without random access; prefer
    /// [`pick`](Sampler::pick) when a slice is available.
    ///
    /// # Panics
    /// Panics if the collection is empty.
    #[inline]
    pub fn pick_iter<I>(collection: I) -> I::Item
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
    {
        P::with(|rng| draw::pick_iter(collection, rng))
    }

    /// Picks one element with probability proportional to the parallel
    /// `weights` slice.
    ///
    /// # Panics
    /// Panics if the lengths differ, if `weights` is empty, or if the
    /// weights are all zero or any weight is negative.
    #[inline]
    pub fn pick_weighted<'a, T>(weights: &[f32], items: &'a [T]) -> &'a T {
        P::with(|rng| draw::pick_weighted(weights, items, rng))
    }

    /// Shuffles a slice in place into a uniform random permutation.
    #[inline]
    pub fn shuffle<T>(items: &mut [T]) {
        P::with(|rng| draw::shuffle(items, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_sampler_ranges() {
        for _ in 0..1_000 {
            let roll: u8 = Random::probability();
            assert!(roll <= 100);

            let value = Random::uniform_between(-3_i32, 3);
            assert!((-3..=3).contains(&value));

            let unit: f64 = Random::uniform_f();
            assert!(unit > 0.0 && unit <= 1.0);
        }
    }

    #[test]
    fn test_fast_sampler_collections() {
        let only = [7_u8];
        assert_eq!(*Random::pick(&only), 7);

        let mut cards: Vec<u8> = (0..32).collect();
        Random::shuffle(&mut cards);
        let mut sorted = cards.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<u8>>());
    }

    #[test]
    fn test_fast_sampler_pick_iter() {
        let picked = Random::pick_iter(10..20);
        assert!((10..20).contains(&picked));
    }
}
