//! Generator-explicit sampling primitives.
//!
//! Every operation in this module takes the generator last, as `&mut R`
//! where `R: Rng + ?Sized`. This is the reproducibility escape hatch: a
//! caller that supplies its own fixed-seed generator gets a deterministic,
//! isolated sequence, independent of the shared streams in
//! [`stream`](crate::stream). The stream-backed facade in
//! [`sampler`](crate::sampler) delegates here.
//!
//! Integral operations are generic over `T: PrimInt`, floating operations
//! over `T: Float`. All ranges over both bounds are closed (inclusive);
//! the one deliberate exception is [`uniform_f`], which samples `(0, 1]`.
//!
//! Precondition violations panic. See the crate-level docs for the failure
//! model.

use num_traits::{Float, NumCast, PrimInt};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, OpenClosed01, Standard, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Normal, StandardNormal, Triangular};


/// Draws a uniform value over the full representable range of `T`.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sampler_core::draw;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let raw: u64 = draw::uniform(&mut rng);
/// let _ = raw; // any u64 is valid
/// ```
#[inline]
pub fn uniform<T, R>(rng: &mut R) -> T
where
    T: PrimInt,
    Standard: Distribution<T>,
    R: Rng + ?Sized,
{
    rng.gen()
}

/// Draws a uniform integer in `[0, to]` inclusive.
///
/// # Panics
/// Panics if `to < 0` (the range would be empty; caller error).
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sampler_core::draw;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let face = draw::uniform_to(5_u8, &mut rng) + 1;
/// assert!((1..=6).contains(&face));
/// ```
#[inline]
pub fn uniform_to<T, R>(to: T, rng: &mut R) -> T
where
    T: PrimInt + SampleUniform,
    R: Rng + ?Sized,
{
    assert!(to >= T::zero(), "upper bound must be non-negative");
    rng.gen_range(T::zero()..=to)
}

/// Draws a uniform integer in `[from, to]` inclusive.
///
/// # Panics
/// Panics if `from > to`.
#[inline]
pub fn uniform_between<T, R>(from: T, to: T, rng: &mut R) -> T
where
    T: PrimInt + SampleUniform,
    R: Rng + ?Sized,
{
    assert!(from <= to, "inverted range: from must not exceed to");
    rng.gen_range(from..=to)
}

/// Draws a percentage roll: a uniform integer in `[0, 100]` inclusive.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sampler_core::draw;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let roll: i32 = draw::probability(&mut rng);
/// assert!((0..=100).contains(&roll));
/// ```
#[inline]
pub fn probability<T, R>(rng: &mut R) -> T
where
    T: PrimInt + SampleUniform,
    R: Rng + ?Sized,
{
    let hundred = <T as NumCast>::from(100_u8).expect("target type must hold 100");
    rng.gen_range(T::zero()..=hundred)
}

/// Draws a uniform float in `(0, 1]` — lower bound excluded, upper included.
///
/// The asymmetric bounds are deliberate: downstream maths (for example the
/// triangular inverse CDF) divides by the drawn value or by `1 - u`, and a
/// `(0, 1]` law keeps `u` itself away from zero. Use [`probability_f`] for
/// the closed unit interval.
#[inline]
pub fn uniform_f<T, R>(rng: &mut R) -> T
where
    T: Float,
    OpenClosed01: Distribution<T>,
    R: Rng + ?Sized,
{
    rng.sample(OpenClosed01)
}

/// Draws a uniform float in `[0, to]`, both bounds included.
///
/// # Panics
/// Panics if `to < 0` or `to` is NaN.
#[inline]
pub fn uniform_f_to<T, R>(to: T, rng: &mut R) -> T
where
    T: Float + SampleUniform,
    R: Rng + ?Sized,
{
    assert!(to >= T::zero(), "upper bound must be non-negative");
    rng.gen_range(T::zero()..=to)
}

/// Draws a uniform float in `[from, to]`, both bounds included.
///
/// # Panics
/// Panics if `from > to` or either bound is NaN.
#[inline]
pub fn uniform_f_between<T, R>(from: T, to: T, rng: &mut R) -> T
where
    T: Float + SampleUniform,
    R: Rng + ?Sized,
{
    assert!(from <= to, "inverted range: from must not exceed to");
    rng.gen_range(from..=to)
}

/// Draws a uniform float in `[0, 1]`, both bounds included.
#[inline]
pub fn probability_f<T, R>(rng: &mut R) -> T
where
    T: Float + SampleUniform,
    R: Rng + ?Sized,
{
    rng.gen_range(T::zero()..=T::one())
}

/// Draws `true` or `false` with equal probability.
#[inline]
pub fn yes_no<R>(rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    rng.gen()
}

/// Draws a Gaussian variate with the given mean and standard deviation.
///
/// Uses the Ziggurat-based [`StandardNormal`] sampler from `rand_distr`.
///
/// # Panics
/// Panics if `stddev` is negative or NaN.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sampler_core::draw;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let latency_ms = draw::normal(250.0_f64, 30.0, &mut rng);
/// let _ = latency_ms;
/// ```
#[inline]
pub fn normal<T, R>(mean: T, stddev: T, rng: &mut R) -> T
where
    T: Float,
    StandardNormal: Distribution<T>,
    R: Rng + ?Sized,
{
    assert!(
        stddev >= T::zero(),
        "standard deviation must be non-negative"
    );
    let dist = Normal::new(mean, stddev).expect("normal parameters already validated");
    dist.sample(rng)
}

/// Draws a triangular variate with lower limit `a`, upper limit `b` and
/// mode `c`, via the standard inverse-CDF construction.
///
/// # Panics
/// Panics unless `a < b` and `a <= c <= b`.
#[inline]
pub fn triangular<T, R>(a: T, b: T, c: T, rng: &mut R) -> T
where
    T: Float,
    Standard: Distribution<T>,
    R: Rng + ?Sized,
{
    assert!(a < b, "triangular bounds must satisfy a < b");
    assert!(
        a <= c && c <= b,
        "triangular mode must lie within [a, b]"
    );
    let dist = Triangular::new(a, b, c).expect("triangular parameters already validated");
    dist.sample(rng)
}

/// Picks one element uniformly at random from a slice, in O(1).
///
/// # Panics
/// Panics if the slice is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sampler_core::draw;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let loot = ["sword", "shield", "potion"];
/// let drop = draw::pick(&loot, &mut rng);
/// assert!(loot.contains(drop));
/// ```
#[inline]
pub fn pick<'a, T, R>(items: &'a [T], rng: &mut R) -> &'a T
where
    R: Rng + ?Sized,
{
    assert!(!items.is_empty(), "cannot pick from an empty slice");
    &items[rng.gen_range(0..items.len())]
}

/// Picks one element uniformly at random from any sized iterable,
/// returning it by value.
///
/// Unlike [`pick`], this advances the iterator to a drawn offset, which
/// costs O(offset) for containers without random access (sets, maps).
/// Prefer [`pick`] when a slice is available.
///
/// # Panics
/// Panics if the collection is empty.
#[inline]
pub fn pick_iter<I, R>(collection: I, rng: &mut R) -> I::Item
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    R: Rng + ?Sized,
{
    let mut iter = collection.into_iter();
    let len = iter.len();
    assert!(len > 0, "cannot pick from an empty collection");
    let offset = rng.gen_range(0..len);
    iter.nth(offset)
        .expect("iterator shorter than its reported length")
}

/// Picks one element with probability proportional to the parallel
/// `weights` slice. Weights need not sum to one; they are normalised by
/// the discrete distribution.
///
/// # Panics
/// Panics if the lengths differ, if `weights` is empty, or if the weights
/// are all zero or any weight is negative.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sampler_core::draw;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let rarity = ["common", "rare", "legendary"];
/// let tier = draw::pick_weighted(&[80.0, 18.0, 2.0], &rarity, &mut rng);
/// assert!(rarity.contains(tier));
/// ```
#[inline]
pub fn pick_weighted<'a, T, R>(weights: &[f32], items: &'a [T], rng: &mut R) -> &'a T
where
    R: Rng + ?Sized,
{
    assert_eq!(
        weights.len(),
        items.len(),
        "weights and collection lengths differ"
    );
    let dist = WeightedIndex::new(weights).expect("weights must be non-negative, not all zero");
    &items[dist.sample(rng)]
}

/// Shuffles a slice in place into a uniform random permutation
/// (Fisher–Yates).
#[inline]
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
}
