//! Discrete variable representation.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

/// A discrete variable: an opaque identifier plus a finite domain size.
///
/// Variables are totally ordered and compared by identifier alone; the domain
/// size is carried along so that index arithmetic can look it up without a
/// side table. Two variables with the same identifier are considered the same
/// variable even if their recorded domain sizes differ (see
/// [`VariableCollection::try_from_variables`] for detecting that conflict).
///
/// [`VariableCollection::try_from_variables`]: crate::VariableCollection::try_from_variables
///
/// # Examples
///
/// ```
/// use varspace_core::Variable;
///
/// let x = Variable::new(3, 4);
/// assert_eq!(x.id(), 3);
/// assert_eq!(x.states(), 4);
/// assert_eq!(x.to_string(), "x3");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Variable {
    id: u32,
    states: usize,
}

impl Variable {
    /// Creates a new variable with the given identifier and domain size.
    ///
    /// # Panics
    ///
    /// Panics if `states` is zero; every variable must have at least one state.
    #[must_use]
    pub const fn new(id: u32, states: usize) -> Self {
        assert!(states > 0, "variable domain size must be at least 1");
        Self { id, states }
    }

    /// Returns the variable's identifier.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.id
    }

    /// Returns the variable's domain size (number of states).
    #[must_use]
    pub const fn states(self) -> usize {
        self.states
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality_ignores_states() {
        let a = Variable::new(7, 2);
        let b = Variable::new(7, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_ordering_by_id() {
        let a = Variable::new(1, 9);
        let b = Variable::new(2, 2);
        assert!(a < b);
    }

    #[test]
    #[should_panic(expected = "variable domain size must be at least 1")]
    fn test_rejects_zero_states() {
        let _ = Variable::new(0, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Variable::new(12, 3).to_string(), "x12");
    }
}
