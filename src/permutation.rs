//! Seeded shuffling and reversible permutations.
//!
//! Two array transforms are built on top of [`PseudoRandom`]:
//!
//! * a one-way Fisher–Yates shuffle ([`PseudoRandom::shuffle`]), and
//! * a reversible *seed sort* ([`PseudoRandom::seed_sort`] /
//!   [`PseudoRandom::seed_unsort`]) driven by an explicit [`Permutation`]
//!   map that is rebuilt from the origin seed on every call.
//!
//! Inputs are borrowed and never mutated; every result is a fresh `Vec`.
//!
//! ```
//! use pseudo_random::PseudoRandom;
//!
//! let mut random = PseudoRandom::new(123).unwrap();
//! let sorted = random.seed_sort(&[1, 2, 3, 4, 5]);
//! assert_eq!(sorted, vec![3, 5, 1, 4, 2]);
//! assert_eq!(random.seed_unsort(&sorted), vec![1, 2, 3, 4, 5]);
//! ```

use tracing::trace;

use crate::error::{PseudoRandomError, Result};
use crate::generator::PseudoRandom;

/// An index map describing a reordering of `len()` elements.
///
/// Position `k` of the map names the source index that lands at `k` when the
/// map is applied with [`Permutation::gather`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// The identity map `[0, 1, ..., n - 1]`.
    pub fn identity(n: usize) -> Self {
        Permutation((0..n).collect())
    }

    /// Number of positions covered by the map.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the empty map.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the raw index sequence.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the map and returns the raw index sequence.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Applies the map: `result[k] = items[map[k]]`.
    pub fn gather<T: Clone>(&self, items: &[T]) -> Result<Vec<T>> {
        self.check_len(items.len())?;
        Ok(self.gather_unchecked(items))
    }

    /// Applies the inverse map: `result[map[k]] = items[k]`.
    pub fn scatter<T: Clone>(&self, items: &[T]) -> Result<Vec<T>> {
        self.check_len(items.len())?;
        Ok(self.scatter_unchecked(items))
    }

    /// Returns the map that undoes `self` under [`Permutation::gather`].
    pub fn inverse(&self) -> Permutation {
        let mut inverse = vec![0usize; self.0.len()];
        for (position, &source) in self.0.iter().enumerate() {
            inverse[source] = position;
        }
        Permutation(inverse)
    }

    fn gather_unchecked<T: Clone>(&self, items: &[T]) -> Vec<T> {
        self.0.iter().map(|&source| items[source].clone()).collect()
    }

    fn scatter_unchecked<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let mut slots: Vec<Option<T>> = vec![None; items.len()];
        for (item, &target) in items.iter().zip(&self.0) {
            slots[target] = Some(item.clone());
        }
        slots.into_iter().flatten().collect()
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len != self.0.len() {
            return Err(PseudoRandomError::invalid(
                "array",
                format!("length {len} does not match permutation length {}", self.0.len()),
            ));
        }
        Ok(())
    }
}

impl PseudoRandom {
    /// Shuffles a copy of `items` starting from the origin seed.
    ///
    /// Repeated calls on the same instance return the same ordering for
    /// inputs of the same length.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        self.reset_seed();
        self.shuffle_from_current(items)
    }

    /// Shuffles a copy of `items` continuing from the current seed.
    ///
    /// Successive calls generally produce different orderings.
    pub fn shuffle_from_current<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = (self.next_f64() * (i + 1) as f64).floor() as usize;
            shuffled.swap(i, j);
        }
        shuffled
    }

    /// Builds the permutation map of length `n` for the origin seed.
    pub fn permutation_map(&mut self, n: usize) -> Permutation {
        let map = Permutation(self.shuffle(Permutation::identity(n).as_slice()));
        trace!(len = n, origin = self.origin_seed(), "permutation map built");
        map
    }

    /// Reorders a copy of `items` with the origin-seed permutation map.
    pub fn seed_sort<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        self.permutation_map(items.len()).gather_unchecked(items)
    }

    /// Undoes [`PseudoRandom::seed_sort`] for an array of the same length.
    ///
    /// An array of a different length yields a reordering that is not an
    /// inverse of anything, but is not an error.
    pub fn seed_unsort<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        self.permutation_map(items.len()).scatter_unchecked(items)
    }
}
