//! Projection cursor: full-space enumeration tracking a sub-space index.

use varspace_core::VariableCollection;

use crate::{DigitBuf, FlagBuf, IndexCursor};

/// A cursor that walks every configuration of a full variable collection while
/// lazily maintaining the linear index of a contained sub-collection.
///
/// As the full space's hidden mixed-radix counter advances digit by digit,
/// only digits belonging to the sub-collection contribute to the tracked
/// index; skipped digits still cycle through their full range so the
/// enumeration order over the full space is undisturbed. This makes a single
/// pass over a joint table sufficient to marginalize it onto the
/// sub-collection: the tracked index is exactly the destination offset.
///
/// Advancing is amortized O(1): each digit carries at a frequency inversely
/// proportional to its stride.
///
/// The cursor borrows the full collection's domain-size array; the collection
/// must outlive the cursor. Digit state is owned and deep-copied on clone, so
/// clones are fully independent.
///
/// # Examples
///
/// ```
/// use varspace_core::{Variable, VariableCollection};
/// use varspace_index::ProjectingIndex;
///
/// let a = Variable::new(0, 2);
/// let b = Variable::new(1, 3);
/// let full = VariableCollection::from_variables([a, b]);
/// let sub = VariableCollection::from_variables([a]);
///
/// let mut cursor = ProjectingIndex::new(&full, &sub);
/// let mut seen = Vec::new();
/// for _ in 0..cursor.end() {
///     seen.push(cursor.current());
///     cursor.advance();
/// }
/// // a is the least significant digit, so its projected index alternates.
/// assert_eq!(seen, [0, 1, 0, 1, 0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectingIndex<'a> {
    idx: usize,
    end: usize,
    dims: &'a [usize],
    state: DigitBuf,
    skipped: FlagBuf,
    add: DigitBuf,
    subtract: DigitBuf,
}

impl<'a> ProjectingIndex<'a> {
    /// Creates a projection cursor from `full` onto `sub`.
    ///
    /// For each canonical position of `full` this precomputes whether the
    /// digit is skipped (absent from `sub`), the stride it contributes to
    /// `sub`'s own linear index, and the amount to undo when the digit wraps.
    ///
    /// # Panics
    ///
    /// Panics if `full` does not contain every variable of `sub`.
    #[must_use]
    pub fn new(full: &'a VariableCollection, sub: &VariableCollection) -> Self {
        assert!(
            full.contains(sub),
            "projection target {sub} is not contained in {full}"
        );
        let nd = full.nvar();
        let dims = full.dims();
        let mut state = DigitBuf::with_capacity(nd);
        let mut skipped = FlagBuf::with_capacity(nd);
        let mut add = DigitBuf::with_capacity(nd);
        let mut subtract = DigitBuf::with_capacity(nd);
        let mut end = 1;
        let mut j = 0;
        for i in 0..nd {
            let skip = j >= sub.nvar() || sub[j] != full[i];
            let stride = if i == 0 {
                1
            } else {
                add[i - 1] * if skipped[i - 1] { 1 } else { dims[i - 1] }
            };
            state.push(1);
            skipped.push(skip);
            add.push(stride);
            subtract.push(stride * ((if skip { 1 } else { dims[i] }) - 1));
            if !skip {
                j += 1;
            }
            end *= dims[i];
        }
        Self {
            idx: 0,
            end,
            dims,
            state,
            skipped,
            add,
            subtract,
        }
    }

    /// Advances to the next configuration of the full space.
    ///
    /// Ripple-carries through the digits least-significant first. A digit at
    /// its maximum wraps back to 1 and carries; the first digit that does not
    /// wrap absorbs the increment. Contributions of skipped digits are elided
    /// from the tracked index.
    pub fn advance(&mut self) {
        for i in 0..self.state.len() {
            if self.state[i] == self.dims[i] {
                self.state[i] = 1;
                if !self.skipped[i] {
                    self.idx -= self.subtract[i];
                }
            } else {
                self.state[i] += 1;
                if !self.skipped[i] {
                    self.idx += self.add[i];
                }
                break;
            }
        }
    }

    /// Restores the cursor to the first configuration (all digits 1, index 0).
    pub fn reset(&mut self) {
        for digit in &mut self.state {
            *digit = 1;
        }
        self.idx = 0;
    }

    /// Returns the sub-collection's linear index implied by the current full
    /// configuration.
    #[must_use]
    pub fn current(&self) -> usize {
        self.idx
    }

    /// Returns the number of steps needed to exhaust the full space.
    ///
    /// This is the full collection's total state count, not the
    /// sub-collection's. After exactly this many [`advance`](Self::advance)
    /// calls the cursor is back in its initial state.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }
}

impl IndexCursor for ProjectingIndex<'_> {
    fn advance(&mut self) {
        ProjectingIndex::advance(self);
    }

    fn reset(&mut self) {
        ProjectingIndex::reset(self);
    }

    fn current(&self) -> usize {
        ProjectingIndex::current(self)
    }

    fn end(&self) -> usize {
        ProjectingIndex::end(self)
    }
}
