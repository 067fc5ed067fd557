#![deny(missing_docs)]

//! # pseudo_random
//!
//! **pseudo_random** is a deterministic pseudo-random number generator built
//! on a 32-bit XOR-shift transform, together with array utilities that use
//! the same seeded stream to shuffle sequences and to reorder them
//! reversibly.
//!
//! The same seed and the same sequence of calls always produce the same
//! outputs.  The generator is **not** cryptographically secure.
//!
//! ## Features
//!
//! * **Seeded generator**: [`PseudoRandom`] owns a 32-bit seed, remembers the
//!   seed it was built with, and yields fractions in `[0, 1)` with a
//!   configurable number of decimal digits or integers from an inclusive
//!   range.
//! * **Shuffling**: [`PseudoRandom::shuffle`] performs a backward
//!   Fisher–Yates shuffle on a copy of the input.
//! * **Reversible seed sort**: [`PseudoRandom::seed_sort`] and
//!   [`PseudoRandom::seed_unsort`] reorder a sequence through a
//!   [`Permutation`] map derived from the origin seed, so that unsorting
//!   restores the original order.
//! * **JSON boundary**: the [`dynamic`] module accepts untyped
//!   [`serde_json::Value`] input and rejects non-arrays.
//! * **Configuration**: [`GeneratorConfig`] stores the origin seed and digit
//!   precision as JSON.
//!
//! ## Usage
//!
//! ```rust
//! use pseudo_random::PseudoRandom;
//!
//! let mut random = PseudoRandom::new(123).unwrap();
//! let fraction = random.next_f64();
//! assert!((0.0..1.0).contains(&fraction));
//!
//! let roll = random.next_range(1, 10).unwrap();
//! assert!((1..=10).contains(&roll));
//!
//! let letters = ['a', 'b', 'c', 'd'];
//! let hidden = random.seed_sort(&letters);
//! assert_eq!(random.seed_unsort(&hidden), letters.to_vec());
//! ```

mod config;
pub mod dynamic;
mod error;
mod generator;
mod permutation;
pub mod xorshift;

pub use config::GeneratorConfig;
pub use error::{PseudoRandomError, Result};
pub use generator::{
    time_seed, PseudoRandom, Sample, MAX_DIGITS, MAX_SEED, MIN_DIGITS, TIME_SEED_FALLBACK,
};
pub use permutation::Permutation;
