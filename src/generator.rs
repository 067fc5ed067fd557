//! Seeded pseudo-random generator.
//!
//! [`PseudoRandom`] owns a single 32-bit seed, advances it with the XOR-shift
//! transform from [`crate::xorshift`], and derives fractional or integer
//! outputs from every step.  The seed captured at construction is retained
//! as the *origin* so that any stream can be replayed from the start.
//!
//! ```
//! use pseudo_random::PseudoRandom;
//!
//! let mut random = PseudoRandom::new(123).unwrap();
//! assert_eq!(random.next_f64(), 0.31682556);
//! assert_eq!(random.next_range(1, 10).unwrap(), 8);
//! ```

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand_core::{impls, RngCore};
use serde::Serialize;
use tracing::debug;

use crate::error::{PseudoRandomError, Result};
use crate::xorshift;

/// Smallest accepted precision.
pub const MIN_DIGITS: u32 = 1;
/// Largest accepted precision, also the default.
pub const MAX_DIGITS: u32 = 8;
/// Largest accepted seed.
pub const MAX_SEED: i64 = u32::MAX as i64;

/// A single draw from [`PseudoRandom::next_bounded`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Sample {
    /// Fraction in `[0, 1)` carrying at most `digits` decimal places.
    Fraction(f64),
    /// Integer drawn from an inclusive range.
    Integer(i64),
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sample::Fraction(value) => write!(f, "{value}"),
            Sample::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// Deterministic XOR-shift generator with a resettable origin seed.
///
/// Two instances built from the same seed produce identical outputs for
/// identical call sequences.  The instance is not synchronised; callers that
/// share one across threads must serialise access themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoRandom {
    seed: u32,
    origin: u32,
    digits: u32,
}

impl PseudoRandom {
    /// Creates a generator from `seed`, which must lie in `[0, 4294967295]`.
    pub fn new(seed: i64) -> Result<Self> {
        let seed = check_seed(seed)?;
        Ok(Self::from_u32(seed))
    }

    /// Creates a generator from an already-unsigned seed.
    pub fn from_u32(seed: u32) -> Self {
        debug!(seed, "generator seeded");
        Self {
            seed,
            origin: seed,
            digits: MAX_DIGITS,
        }
    }

    /// Creates a generator seeded from the wall clock.
    ///
    /// The millisecond distance from the Unix epoch is truncated to its low
    /// 32 bits; see [`time_seed`] for the zero case.
    pub fn from_time() -> Self {
        let millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis(),
            Err(err) => err.duration().as_millis(),
        };
        Self::from_u32(time_seed(millis))
    }

    /// Returns the current seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the seed captured at construction.
    pub fn origin_seed(&self) -> u32 {
        self.origin
    }

    /// Replaces the current seed.  The origin seed is left untouched.
    pub fn set_seed(&mut self, seed: i64) -> Result<()> {
        self.seed = check_seed(seed)?;
        debug!(seed = self.seed, origin = self.origin, "seed replaced");
        Ok(())
    }

    /// Restores the current seed to the origin seed.
    pub fn reset_seed(&mut self) {
        self.seed = self.origin;
    }

    /// Returns the number of decimal digits carried by fractional outputs.
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Sets the fractional precision; only `1..=8` is accepted.
    pub fn set_digits(&mut self, digits: u32) -> Result<()> {
        self.digits = check_digits(digits)?;
        debug!(digits, "precision updated");
        Ok(())
    }

    /// Advances the generator and returns a fraction in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let scale = 10i64.pow(self.digits);
        let mixed = xorshift::advance(&mut self.seed);
        let remainder = (i64::from(mixed) % scale).abs();
        remainder as f64 / scale as f64
    }

    /// Advances the generator and returns an integer in `[min, max]`.
    ///
    /// Fails without advancing when `min > max`.
    pub fn next_range(&mut self, min: i64, max: i64) -> Result<i64> {
        if min > max {
            return Err(PseudoRandomError::invalid(
                "min",
                format!("must not exceed max ({min} > {max})"),
            ));
        }
        let span = (i128::from(max) - i128::from(min) + 1) as f64;
        let offset = (self.next_f64() * span).floor() as i128;
        Ok((i128::from(min) + offset) as i64)
    }

    /// Draws a fraction when both bounds are absent, or a ranged integer
    /// when both are present.  Supplying only one bound is rejected.
    pub fn next_bounded(&mut self, min: Option<i64>, max: Option<i64>) -> Result<Sample> {
        match (min, max) {
            (None, None) => Ok(Sample::Fraction(self.next_f64())),
            (Some(min), Some(max)) => self.next_range(min, max).map(Sample::Integer),
            (Some(_), None) => Err(PseudoRandomError::invalid(
                "max",
                "must be provided together with min",
            )),
            (None, Some(_)) => Err(PseudoRandomError::invalid(
                "min",
                "must be provided together with max",
            )),
        }
    }
}

/// Raw 32-bit stream for interoperability with `rand_core` consumers.
///
/// Each word is the stored state after one XOR-shift step, so this stream
/// shares its state with [`PseudoRandom::next_f64`].
impl RngCore for PseudoRandom {
    fn next_u32(&mut self) -> u32 {
        xorshift::advance(&mut self.seed);
        self.seed
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Seed used when a timestamp truncates to zero.
pub const TIME_SEED_FALLBACK: u32 = 0x9E37_79B9;

/// Maps a millisecond timestamp to a seed.
///
/// Zero is a fixed point of the XOR-shift transform, so a timestamp whose
/// low 32 bits are all clear yields [`TIME_SEED_FALLBACK`] instead.
pub fn time_seed(millis: u128) -> u32 {
    match (millis & 0xFFFF_FFFF) as u32 {
        0 => TIME_SEED_FALLBACK,
        seed => seed,
    }
}

pub(crate) fn check_seed(seed: i64) -> Result<u32> {
    if !(0..=MAX_SEED).contains(&seed) {
        return Err(PseudoRandomError::invalid(
            "seed",
            format!("must be between 0 and {MAX_SEED}"),
        ));
    }
    Ok(seed as u32)
}

pub(crate) fn check_digits(digits: u32) -> Result<u32> {
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
        return Err(PseudoRandomError::invalid(
            "digits",
            format!("must be between {MIN_DIGITS} and {MAX_DIGITS}"),
        ));
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::RngCore;
    use proptest::prelude::*;

    #[test]
    fn test_fixture_sequence_for_seed_123() {
        let mut random = PseudoRandom::new(123).unwrap();
        let drawn: Vec<f64> = (0..5).map(|_| random.next_f64()).collect();
        assert_eq!(
            drawn,
            vec![0.31682556, 0.76305998, 0.01636938, 0.52479844, 0.28673942]
        );
    }

    #[test]
    fn test_range_after_one_draw() {
        let mut random = PseudoRandom::new(123).unwrap();
        random.next_f64();
        assert_eq!(random.next_range(1, 10).unwrap(), 8);
    }

    #[test]
    fn test_dice_sequence() {
        let mut random = PseudoRandom::new(42).unwrap();
        let rolls: Vec<i64> = (0..10).map(|_| random.next_range(1, 6).unwrap()).collect();
        assert_eq!(rolls, vec![1, 4, 5, 3, 3, 3, 5, 4, 5, 5]);
    }

    #[test]
    fn test_digits_truncate_fraction() {
        let mut random = PseudoRandom::new(123).unwrap();
        random.set_digits(6).unwrap();
        assert_eq!(random.digits(), 6);
        let value = random.next_f64();
        assert_eq!(value, 0.682556);
        assert_eq!(value.to_string().len(), 8);

        let mut coarse = PseudoRandom::new(123).unwrap();
        coarse.set_digits(1).unwrap();
        let drawn: Vec<f64> = (0..5).map(|_| coarse.next_f64()).collect();
        assert_eq!(drawn, vec![0.6, 0.8, 0.8, 0.4, 0.2]);
    }

    #[test]
    fn test_digits_boundaries() {
        let mut random = PseudoRandom::new(1).unwrap();
        assert!(random.set_digits(1).is_ok());
        assert!(random.set_digits(8).is_ok());
        assert!(random.set_digits(0).unwrap_err().is_invalid_argument());
        assert!(random.set_digits(9).is_err());
        assert!(random.set_digits(10).is_err());
        assert_eq!(random.digits(), 8);
    }

    #[test]
    fn test_seed_validation_at_construction() {
        assert!(PseudoRandom::new(0).is_ok());
        assert!(PseudoRandom::new(MAX_SEED).is_ok());
        assert!(PseudoRandom::new(-1).unwrap_err().is_invalid_argument());
        assert!(PseudoRandom::new(MAX_SEED + 1).is_err());
    }

    #[test]
    fn test_set_seed_keeps_origin() {
        let mut random = PseudoRandom::new(123).unwrap();
        random.set_seed(999).unwrap();
        assert_eq!(random.seed(), 999);
        assert_eq!(random.origin_seed(), 123);
        assert!(random.set_seed(-5).is_err());
        assert_eq!(random.seed(), 999);
        random.reset_seed();
        assert_eq!(random.seed(), 123);
    }

    #[test]
    fn test_reset_replays_stream() {
        let mut random = PseudoRandom::new(2024).unwrap();
        let first: Vec<f64> = (0..8).map(|_| random.next_f64()).collect();
        random.reset_seed();
        let second: Vec<f64> = (0..8).map(|_| random.next_f64()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_inverted_range_does_not_advance() {
        let mut random = PseudoRandom::new(77).unwrap();
        assert!(random.next_range(10, 1).is_err());
        assert_eq!(random.seed(), 77);
    }

    #[test]
    fn test_degenerate_and_extreme_ranges() {
        let mut random = PseudoRandom::new(5).unwrap();
        assert_eq!(random.next_range(4, 4).unwrap(), 4);
        let wide = random.next_range(i64::MIN, i64::MAX).unwrap();
        assert!((i64::MIN..=i64::MAX).contains(&wide));
        let negative = random.next_range(-10, -5).unwrap();
        assert!((-10..=-5).contains(&negative));
    }

    #[test]
    fn test_next_bounded_requires_both_bounds() {
        let mut random = PseudoRandom::new(123).unwrap();
        assert!(random.next_bounded(Some(1), None).is_err());
        assert!(random.next_bounded(None, Some(10)).is_err());
        assert_eq!(random.seed(), 123);
        assert_eq!(
            random.next_bounded(None, None).unwrap(),
            Sample::Fraction(0.31682556)
        );
        assert_eq!(
            random.next_bounded(Some(1), Some(10)).unwrap(),
            Sample::Integer(8)
        );
    }

    #[test]
    fn test_zero_seed_is_stuck() {
        let mut random = PseudoRandom::new(0).unwrap();
        assert_eq!(random.next_f64(), 0.0);
        assert_eq!(random.next_range(3, 9).unwrap(), 3);
    }

    #[test]
    fn test_time_seed_never_zero() {
        assert_eq!(time_seed(0), TIME_SEED_FALLBACK);
        assert_eq!(time_seed(1u128 << 32), TIME_SEED_FALLBACK);
        assert_eq!(time_seed((3u128 << 32) + 17), 17);
        assert_eq!(time_seed(1_700_000_000_000), 3_487_918_080);
        let mut random = PseudoRandom::from_u32(time_seed(0));
        assert_ne!(random.next_f64(), random.next_f64());
    }

    #[test]
    fn test_from_time_seeds_nonzero() {
        let random = PseudoRandom::from_time();
        assert_ne!(random.origin_seed(), 0);
        assert_eq!(random.seed(), random.origin_seed());
    }

    #[test]
    fn test_rng_core_shares_state() {
        let mut random = PseudoRandom::new(123).unwrap();
        assert_eq!(random.next_u32(), 31_682_556);
        assert_eq!(random.next_u32(), 4_018_661_298);
        let mut other = PseudoRandom::new(123).unwrap();
        assert_eq!(other.next_u64(), (31_682_556u64 << 32) | 4_018_661_298);
        let mut bytes = [0u8; 4];
        let mut third = PseudoRandom::new(123).unwrap();
        third.fill_bytes(&mut bytes);
        assert_eq!(bytes, 31_682_556u32.to_le_bytes());
    }

    #[test]
    fn test_sample_display() {
        assert_eq!(Sample::Fraction(0.5).to_string(), "0.5");
        assert_eq!(Sample::Integer(-3).to_string(), "-3");
    }

    proptest! {
        #[test]
        fn prop_fraction_in_unit_interval(seed in any::<u32>(), digits in 1u32..=8) {
            let mut random = PseudoRandom::from_u32(seed);
            random.set_digits(digits).unwrap();
            for _ in 0..64 {
                let value = random.next_f64();
                prop_assert!((0.0..1.0).contains(&value));
            }
        }

        #[test]
        fn prop_range_is_inclusive(seed in any::<u32>(), min in -1_000_000i64..1_000_000, width in 0i64..1_000) {
            let max = min + width;
            let mut random = PseudoRandom::from_u32(seed);
            for _ in 0..64 {
                let value = random.next_range(min, max).unwrap();
                prop_assert!(value >= min && value <= max);
            }
        }

        #[test]
        fn prop_same_seed_same_stream(seed in any::<u32>()) {
            let mut a = PseudoRandom::from_u32(seed);
            let mut b = PseudoRandom::from_u32(seed);
            for _ in 0..32 {
                prop_assert_eq!(a.next_f64(), b.next_f64());
                prop_assert_eq!(a.next_range(0, 99).unwrap(), b.next_range(0, 99).unwrap());
            }
        }

        #[test]
        fn prop_reset_restores_origin(seed in any::<u32>(), draws in 0usize..50) {
            let mut random = PseudoRandom::from_u32(seed);
            for _ in 0..draws {
                random.next_f64();
            }
            random.reset_seed();
            prop_assert_eq!(random.seed(), seed);
        }
    }
}
