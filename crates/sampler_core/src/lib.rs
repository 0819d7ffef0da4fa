//! # sampler_core: Generic Random-Sampling Primitives
//!
//! This crate provides the random-sampling toolkit used by simulation and
//! gameplay code: uniform integer/float draws, probability rolls, normal and
//! triangular variates, weighted and uniform element selection, and in-place
//! shuffling, all over a pluggable pseudo-random generator.
//!
//! ## Two ways to draw
//!
//! - **Streams**: [`Random`] draws from a process-wide fast stream that
//!   auto-seeds itself from OS entropy on first use; [`ServerRandom`] draws
//!   from a separate stream that its owner must seed explicitly via
//!   [`ServerStream::seed`] before first use.
//! - **Explicit generators**: every operation also exists in [`draw`] with a
//!   trailing `&mut R` argument. Supplying a fixed-seed generator there gives
//!   a deterministic, isolated sequence — the designed escape hatch for
//!   reproducible tests and replayable simulations.
//!
//! ## Failure model
//!
//! Precondition violations (empty collection, mismatched weight/collection
//! lengths, inverted bounds, unseeded server stream) are programmer errors
//! and panic with a descriptive message. The one recoverable condition,
//! seeding the server stream twice, is reported as
//! [`StreamError::AlreadySeeded`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sampler_core::{draw, Random};
//!
//! // Shared fast stream, auto-seeded on first use.
//! let roll: u8 = Random::probability();
//! assert!(roll <= 100);
//!
//! // Explicit generator for a reproducible sequence.
//! let mut rng = StdRng::seed_from_u64(42);
//! let damage = draw::uniform_between(10_u32, 20, &mut rng);
//! assert!((10..=20).contains(&damage));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod draw;
pub mod error;
pub mod sampler;
pub mod stream;

pub use error::StreamError;
pub use sampler::{Random, Sampler, ServerRandom};
pub use stream::{FastStream, ServerStream, StreamProvider};
