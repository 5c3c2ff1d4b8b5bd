//! Mixed-radix index cursors over discrete variable spaces.
//!
//! This crate provides three independent cursor components for walking the
//! joint configuration space of a [`VariableCollection`] without materializing
//! it:
//!
//! - [`ProjectingIndex`] walks the full cartesian product of a collection
//!   while lazily tracking the linear index of a contained sub-collection
//!   (marginalization order).
//! - [`EmbeddingIndex`] walks only a sub-collection's digits while producing
//!   linear indices into the full space at a fixed base offset (factor
//!   alignment order).
//! - [`PermutationIndex`] re-expresses linear indices under a reordering of
//!   the variables (table transposition).
//!
//! All three advance in amortized or exact O(d) time per step and expose the
//! same cursor surface through [`IndexCursor`].
//!
//! # Examples
//!
//! Marginalizing a joint table over `{a, b}` onto `{a}`:
//!
//! ```
//! use varspace_core::{Variable, VariableCollection};
//! use varspace_index::ProjectingIndex;
//!
//! let a = Variable::new(0, 2);
//! let b = Variable::new(1, 3);
//! let full = VariableCollection::from_variables([a, b]);
//! let sub = VariableCollection::from_variables([a]);
//!
//! let joint = [0.10, 0.20, 0.15, 0.25, 0.05, 0.25];
//! let mut marginal = [0.0_f64; 2];
//! let mut cursor = ProjectingIndex::new(&full, &sub);
//! for &p in &joint {
//!     marginal[cursor.current()] += p;
//!     cursor.advance();
//! }
//! assert!((marginal[0] - 0.30).abs() < 1e-12);
//! assert!((marginal[1] - 0.70).abs() < 1e-12);
//! ```
//!
//! [`VariableCollection`]: varspace_core::VariableCollection

pub use self::{embedding::*, permutation::*, projecting::*};

mod embedding;
mod permutation;
mod projecting;
pub mod testing;

/// Inline capacity for per-variable digit and stride buffers.
///
/// Collections rarely exceed a handful of variables; larger ones spill to the
/// heap transparently.
pub(crate) type DigitBuf = tinyvec::TinyVec<[usize; 8]>;

pub(crate) type FlagBuf = tinyvec::TinyVec<[bool; 8]>;

/// Common cursor surface shared by all three index components.
///
/// A cursor is a mutable position in an enumeration of exactly
/// [`end`](Self::end) steps. Advancing past `end()` steps is permitted but
/// yields unspecified indices; callers bound iteration themselves.
///
/// # Examples
///
/// ```
/// use varspace_core::{Variable, VariableCollection};
/// use varspace_index::{IndexCursor, ProjectingIndex};
///
/// fn collect_indices<C: IndexCursor>(mut cursor: C) -> Vec<usize> {
///     let mut out = Vec::with_capacity(cursor.end());
///     for _ in 0..cursor.end() {
///         out.push(cursor.current());
///         cursor.advance();
///     }
///     out
/// }
///
/// let full = VariableCollection::from_variables([Variable::new(0, 2)]);
/// let indices = collect_indices(ProjectingIndex::new(&full, &full));
/// assert_eq!(indices, [0, 1]);
/// ```
pub trait IndexCursor {
    /// Advances the cursor by one step.
    fn advance(&mut self);

    /// Restores the cursor to its freshly constructed position.
    fn reset(&mut self);

    /// Returns the linear index at the current position.
    fn current(&self) -> usize;

    /// Returns the total number of steps in one full enumeration.
    fn end(&self) -> usize;
}
