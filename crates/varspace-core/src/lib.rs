//! Core types for discrete variable spaces.
//!
//! This crate provides [`Variable`] and [`VariableCollection`], the vocabulary
//! shared by everything that works with finite multi-dimensional configuration
//! spaces. A collection fixes a canonical variable order and thereby a
//! mixed-radix encoding of configurations as linear indices; the cursors in
//! `varspace-index` consume that encoding.
//!
//! # Examples
//!
//! ```
//! use varspace_core::{Variable, VariableCollection};
//!
//! let a = Variable::new(0, 2);
//! let b = Variable::new(1, 3);
//! let joint = VariableCollection::from_variables([a, b]);
//!
//! assert_eq!(joint.num_states(), 6);
//! assert_eq!(joint.dims(), &[2, 3]);
//! ```

pub use self::{collection::*, variable::*};

mod collection;
mod variable;
