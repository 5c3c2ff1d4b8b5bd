//! Permutation cursor: index transforms induced by reordering dimensions.

use varspace_core::{Variable, VariableCollection};

use crate::{DigitBuf, IndexCursor};

/// The index transform induced by reordering a set of variables' dimensions.
///
/// Given an ordering of variables (which may differ from their canonical
/// sorted order), this maps each linear index of the canonical space to the
/// linear index the same configuration has when the digits are read in the
/// target order. This is equivalent to transposing a multi-dimensional table.
/// With `big_endian` the target order is read most-significant digit first.
///
/// Unlike the other cursors, [`convert`](Self::convert) performs a full O(d)
/// digit decomposition and recomposition on every call; a permutation
/// scrambles locality, so there is no cheap incremental form.
///
/// The cursor doubles as a flat bidirectional counter over the *source*
/// (canonical) index: [`advance`](Self::advance) and
/// [`retreat`](Self::retreat) move it by one, and
/// [`current`](Self::current) applies the transform at read time.
///
/// # Examples
///
/// ```
/// use varspace_core::Variable;
/// use varspace_index::PermutationIndex;
///
/// let a = Variable::new(0, 2);
/// let b = Variable::new(1, 3);
///
/// // Canonical order [a, b] read most-significant first: i = x_a + 2 x_b
/// // maps to 3 x_a + x_b.
/// let perm = PermutationIndex::new(&[a, b], true);
/// assert_eq!(perm.convert(0), 0);
/// assert_eq!(perm.convert(1), 3);
/// assert_eq!(perm.convert(2), 1);
///
/// // The inverse undoes the transform.
/// let inv = perm.inverse();
/// for i in 0..6 {
///     assert_eq!(inv.convert(perm.convert(i)), i);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationIndex {
    cursor: usize,
    pi: DigitBuf,
    dim: DigitBuf,
}

impl PermutationIndex {
    /// Creates the transform from canonical order to `order`.
    ///
    /// `pi[j]` records which canonical position supplies the digit at target
    /// position `j`; with `big_endian` the target positions are filled in
    /// reverse.
    ///
    /// # Panics
    ///
    /// Panics if `order` contains the same variable more than once.
    #[must_use]
    pub fn new(order: &[Variable], big_endian: bool) -> Self {
        let canonical = VariableCollection::from_variables(order.iter().copied());
        assert_eq!(
            canonical.nvar(),
            order.len(),
            "permutation order contains duplicate variables"
        );
        let n = order.len();
        let dim: DigitBuf = canonical.dims().iter().copied().collect();
        let mut pi = DigitBuf::with_capacity(n);
        pi.resize(n, 0);
        for (j, &var) in order.iter().enumerate() {
            let jj = if big_endian { n - 1 - j } else { j };
            let Some(k) = canonical.position(var) else {
                unreachable!()
            };
            pi[jj] = k;
        }
        Self { cursor: 0, pi, dim }
    }

    /// Converts a source (canonical-order) index into a target-order index.
    ///
    /// Decomposes `i` into per-position digits least-significant first, then
    /// recomposes them reading digits in target order.
    #[must_use]
    pub fn convert(&self, mut i: usize) -> usize {
        let mut digits = DigitBuf::with_capacity(self.dim.len());
        for &d in &self.dim {
            digits.push(i % d);
            i /= d;
        }
        let mut r = 0;
        let mut stride = 1;
        for &p in &self.pi {
            r += stride * digits[p];
            stride *= self.dim[p];
        }
        r
    }

    /// Returns the functional inverse of this transform.
    ///
    /// The inverse's dimensions are re-expressed in the permuted order and its
    /// cursor is the image of this cursor under the forward transform, so the
    /// two cursors denote the same configuration.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut inv = self.clone();
        for (i, &p) in self.pi.iter().enumerate() {
            inv.pi[p] = i;
            inv.dim[i] = self.dim[p];
        }
        inv.cursor = self.current();
        inv
    }

    /// Sets the source index the counter stands on.
    pub fn set(&mut self, i: usize) {
        self.cursor = i;
    }

    /// Returns the source index the counter stands on.
    #[must_use]
    pub fn source_index(&self) -> usize {
        self.cursor
    }

    /// Moves the counter forward by one source index.
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Moves the counter back by one source index.
    ///
    /// Must not be called when the counter stands on source index 0.
    pub fn retreat(&mut self) {
        self.cursor -= 1;
    }

    /// Resets the counter to source index 0.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Returns the target-order index of the counter's current position.
    #[must_use]
    pub fn current(&self) -> usize {
        self.convert(self.cursor)
    }

    /// Returns the total number of configurations (product of all dimensions).
    #[must_use]
    pub fn end(&self) -> usize {
        self.dim.iter().product()
    }
}

impl IndexCursor for PermutationIndex {
    fn advance(&mut self) {
        PermutationIndex::advance(self);
    }

    fn reset(&mut self) {
        PermutationIndex::reset(self);
    }

    fn current(&self) -> usize {
        PermutationIndex::current(self)
    }

    fn end(&self) -> usize {
        PermutationIndex::end(self)
    }
}
