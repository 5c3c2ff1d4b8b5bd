//! Test utilities for index cursor implementations.
//!
//! This module provides [`SweepTester`], a small harness for driving an
//! [`IndexCursor`] through a full enumeration and asserting the index
//! sequence it produces, plus naive reference computations that property
//! tests cross-check the cursors against.
//!
//! # Example
//!
//! ```
//! use varspace_core::{Variable, VariableCollection};
//! use varspace_index::{ProjectingIndex, testing::SweepTester};
//!
//! let a = Variable::new(0, 2);
//! let b = Variable::new(1, 3);
//! let full = VariableCollection::from_variables([a, b]);
//! let sub = VariableCollection::from_variables([a]);
//!
//! SweepTester::new(ProjectingIndex::new(&full, &sub))
//!     .assert_yields(&[0, 1, 0, 1, 0, 1])
//!     .assert_cycles_back();
//! ```

use varspace_core::VariableCollection;

use crate::IndexCursor;

/// A test harness that sweeps a cursor and checks every step.
///
/// All assertion methods return `self` for chaining and panic with detailed
/// messages on failure, using `#[track_caller]` to report the caller's source
/// location. The harness resets a clone before each assertion, so the supplied
/// cursor's own position is irrelevant.
#[derive(Debug)]
pub struct SweepTester<C> {
    cursor: C,
}

impl<C> SweepTester<C>
where
    C: IndexCursor + Clone,
{
    /// Creates a tester around a cursor.
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Asserts that one full sweep yields exactly `expected`, step by step.
    ///
    /// # Panics
    ///
    /// Panics if `expected` is not `end()` entries long or if any step's
    /// index differs.
    #[track_caller]
    pub fn assert_yields(self, expected: &[usize]) -> Self {
        let mut cursor = self.cursor.clone();
        cursor.reset();
        assert_eq!(
            expected.len(),
            cursor.end(),
            "Expected sequence length to match end() = {}",
            cursor.end()
        );
        for (step, &want) in expected.iter().enumerate() {
            assert_eq!(
                cursor.current(),
                want,
                "Expected index {want} at step {step}, got {}",
                cursor.current()
            );
            cursor.advance();
        }
        self
    }

    /// Asserts that advancing `end()` times returns the cursor to its
    /// starting index.
    ///
    /// Only meaningful for cursors whose top digit wraps (projection); an
    /// embedding cursor deliberately keeps advancing past its top digit.
    ///
    /// # Panics
    ///
    /// Panics if the index after a full sweep differs from the index at reset.
    #[track_caller]
    pub fn assert_cycles_back(self) -> Self {
        let mut cursor = self.cursor.clone();
        cursor.reset();
        let start = cursor.current();
        for _ in 0..cursor.end() {
            cursor.advance();
        }
        assert_eq!(
            cursor.current(),
            start,
            "Expected cursor to return to index {start} after {} steps",
            cursor.end()
        );
        self
    }
}

/// Returns the 0-based digits of enumeration step `step` over `dims`,
/// least-significant position first.
#[must_use]
pub fn digits_at_step(dims: &[usize], mut step: usize) -> Vec<usize> {
    let mut digits = Vec::with_capacity(dims.len());
    for &d in dims {
        digits.push(step % d);
        step /= d;
    }
    digits
}

/// Recomputes from scratch the index a projection cursor should report at
/// enumeration step `step` of `full`'s space.
///
/// Reads `sub`'s digits off the full configuration and recomposes `sub`'s own
/// linear index directly, ignoring all other digits.
///
/// # Panics
///
/// Panics if `full` does not contain every variable of `sub`.
#[must_use]
pub fn projected_index(
    full: &VariableCollection,
    sub: &VariableCollection,
    step: usize,
) -> usize {
    assert!(full.contains(sub), "{sub} is not contained in {full}");
    let digits = digits_at_step(full.dims(), step);
    let mut r = 0;
    let mut stride = 1;
    let mut j = 0;
    for i in 0..full.nvar() {
        if j < sub.nvar() && full[i] == sub[j] {
            r += digits[i] * stride;
            stride *= full.dims()[i];
            j += 1;
        }
    }
    r
}

#[cfg(test)]
mod tests {
    use varspace_core::Variable;

    use super::*;
    use crate::ProjectingIndex;

    fn vars(specs: &[(u32, usize)]) -> VariableCollection {
        specs
            .iter()
            .map(|&(id, states)| Variable::new(id, states))
            .collect()
    }

    #[test]
    fn test_digits_at_step() {
        assert_eq!(digits_at_step(&[2, 3], 0), [0, 0]);
        assert_eq!(digits_at_step(&[2, 3], 1), [1, 0]);
        assert_eq!(digits_at_step(&[2, 3], 2), [0, 1]);
        assert_eq!(digits_at_step(&[2, 3], 5), [1, 2]);
    }

    #[test]
    fn test_projected_index_identity() {
        let full = vars(&[(0, 2), (1, 3)]);
        for step in 0..6 {
            assert_eq!(projected_index(&full, &full, step), step);
        }
    }

    #[test]
    #[should_panic(expected = "Expected index 1 at step 0")]
    fn test_assert_yields_reports_step() {
        let full = vars(&[(0, 2)]);
        SweepTester::new(ProjectingIndex::new(&full, &full)).assert_yields(&[1, 0]);
    }

    #[test]
    #[should_panic(expected = "Expected sequence length to match")]
    fn test_assert_yields_checks_length() {
        let full = vars(&[(0, 2)]);
        SweepTester::new(ProjectingIndex::new(&full, &full)).assert_yields(&[0]);
    }
}
