//! Embedding cursor: sub-space enumeration producing full-space indices.

use varspace_core::VariableCollection;

use crate::{DigitBuf, IndexCursor};

/// A cursor that walks every configuration of a sub-collection while producing
/// the corresponding linear index into a containing full collection, with all
/// other variables held fixed by a base offset.
///
/// This is the dual of [`ProjectingIndex`](crate::ProjectingIndex): instead of
/// sweeping the full space and projecting down, it sweeps only the
/// sub-collection's digits and embeds up. The typical use is aligning a small
/// factor into a larger table: an outer loop ranges the base offset over the
/// stride positions of the remaining variables, and for each offset this
/// cursor sweeps the sub-collection's contribution.
///
/// The final digit deliberately never wraps. Enumeration terminates by
/// bounding the number of steps at the sub-collection's state count (or by
/// comparing against [`end`](Self::end)), not by digit overflow; advancing
/// further keeps increasing the index without wrapping.
///
/// The cursor borrows the sub-collection's domain-size array; the collection
/// must outlive the cursor. Digit state is owned and deep-copied on clone.
///
/// # Examples
///
/// ```
/// use varspace_core::{Variable, VariableCollection};
/// use varspace_index::EmbeddingIndex;
///
/// let a = Variable::new(0, 2);
/// let b = Variable::new(1, 3);
/// let full = VariableCollection::from_variables([a, b]);
/// let sub = VariableCollection::from_variables([a]);
///
/// // With b fixed at its third state (offset 4 = 2 * 2), sweeping a yields
/// // the full-space cells 4 and 5.
/// let mut cursor = EmbeddingIndex::new(&full, &sub, 4);
/// let mut seen = Vec::new();
/// for _ in 0..sub.num_states() {
///     seen.push(cursor.current());
///     cursor.advance();
/// }
/// assert_eq!(seen, [4, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingIndex<'a> {
    idx: usize,
    end: usize,
    offset: usize,
    dims: &'a [usize],
    state: DigitBuf,
    add: DigitBuf,
}

impl<'a> EmbeddingIndex<'a> {
    /// Creates an embedding cursor for `sub` within `full` at `offset`.
    ///
    /// For each variable of `sub` this records its stride within `full`'s
    /// linear index space: the product of the domain sizes of all `full`
    /// variables at earlier canonical positions.
    ///
    /// # Panics
    ///
    /// Panics if `full` does not contain every variable of `sub`.
    #[must_use]
    pub fn new(full: &VariableCollection, sub: &'a VariableCollection, offset: usize) -> Self {
        assert!(
            full.contains(sub),
            "embedding source {sub} is not contained in {full}"
        );
        let ns = sub.nvar();
        let dims = sub.dims();
        let full_dims = full.dims();
        let mut state = DigitBuf::with_capacity(ns);
        let mut add = DigitBuf::with_capacity(ns);
        let mut stride = 1;
        let mut j = 0;
        for i in 0..full.nvar() {
            if j < ns && full[i] == sub[j] {
                state.push(1);
                add.push(stride);
                j += 1;
            }
            stride *= full_dims[i];
        }
        // One past the last index the sweep reaches; an empty sub spans a
        // single configuration.
        let end = match add.last() {
            Some(&last) => offset + last * dims[ns - 1],
            None => offset + 1,
        };
        Self {
            idx: offset,
            end,
            offset,
            dims,
            state,
            add,
        }
    }

    /// Advances to the sub-collection's next configuration.
    ///
    /// Ripple-carries over the sub digits only. A non-final digit at its
    /// maximum wraps back to 1 and carries; the final digit always absorbs the
    /// increment, even at its maximum.
    pub fn advance(&mut self) {
        let ns = self.state.len();
        for i in 0..ns {
            if self.state[i] == self.dims[i] && i + 1 < ns {
                self.state[i] = 1;
                self.idx -= self.add[i] * (self.dims[i] - 1);
            } else {
                self.state[i] += 1;
                self.idx += self.add[i];
                break;
            }
        }
    }

    /// Restores the cursor to the first configuration (all digits 1, index at
    /// the base offset).
    pub fn reset(&mut self) {
        for digit in &mut self.state {
            *digit = 1;
        }
        self.idx = self.offset;
    }

    /// Returns the full-space linear index of the current sub configuration.
    #[must_use]
    pub fn current(&self) -> usize {
        self.idx
    }

    /// Returns one past the final index reached by a full sweep.
    ///
    /// A sweep visits exactly the sub-collection's state count of positions;
    /// the last of them is `end()` minus the final variable's stride.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }
}

impl IndexCursor for EmbeddingIndex<'_> {
    fn advance(&mut self) {
        EmbeddingIndex::advance(self);
    }

    fn reset(&mut self) {
        EmbeddingIndex::reset(self);
    }

    fn current(&self) -> usize {
        EmbeddingIndex::current(self)
    }

    fn end(&self) -> usize {
        EmbeddingIndex::end(self)
    }
}
