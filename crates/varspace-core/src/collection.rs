//! Canonically ordered collections of discrete variables.

use std::{
    fmt::{self, Display},
    ops::Index,
    slice,
};

use crate::Variable;

/// Error returned when a set of variables cannot form a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CollectionError {
    /// The same variable identifier was supplied with two different domain sizes.
    #[display("conflicting domain sizes for x{id}: {first} vs {second}")]
    ConflictingDomains {
        /// The identifier supplied more than once.
        id: u32,
        /// Domain size recorded first.
        first: usize,
        /// Conflicting domain size seen later.
        second: usize,
    },
}

/// An ordered, duplicate-free collection of [`Variable`]s in canonical
/// (identifier-sorted) order.
///
/// A collection defines a finite configuration space: the cartesian product of
/// its variables' domains. Each configuration maps bijectively to a linear
/// index in `0..num_states()`, with the variable at canonical position 0 as the
/// least significant digit.
///
/// The per-position domain sizes are cached in a contiguous array so that
/// index cursors can borrow them directly; see [`dims`](Self::dims).
///
/// # Examples
///
/// ```
/// use varspace_core::{Variable, VariableCollection};
///
/// let a = Variable::new(0, 2);
/// let b = Variable::new(1, 3);
/// let full = VariableCollection::from_variables([b, a]);
///
/// // Canonical order sorts by identifier regardless of input order.
/// assert_eq!(full[0], a);
/// assert_eq!(full[1], b);
/// assert_eq!(full.dims(), &[2, 3]);
/// assert_eq!(full.num_states(), 6);
///
/// let sub = VariableCollection::from_variables([a]);
/// assert!(full.contains(&sub));
/// assert!(!sub.contains(&full));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariableCollection {
    vars: Vec<Variable>,
    dims: Vec<usize>,
}

impl VariableCollection {
    /// Creates a collection from an arbitrary sequence of variables.
    ///
    /// The variables are sorted into canonical order and exact duplicates
    /// (same identifier) are removed, keeping the first occurrence. Use
    /// [`try_from_variables`](Self::try_from_variables) to detect duplicates
    /// whose domain sizes disagree instead of silently keeping one.
    #[must_use]
    pub fn from_variables<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = Variable>,
    {
        let mut vars: Vec<_> = vars.into_iter().collect();
        // Stable sort so the first occurrence of a duplicate identifier wins.
        vars.sort();
        vars.dedup();
        let dims = vars.iter().map(|v| v.states()).collect();
        Self { vars, dims }
    }

    /// Creates a collection, rejecting duplicates with conflicting domain sizes.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ConflictingDomains`] if the same identifier
    /// appears with two different domain sizes.
    ///
    /// # Examples
    ///
    /// ```
    /// use varspace_core::{CollectionError, Variable, VariableCollection};
    ///
    /// let err = VariableCollection::try_from_variables([
    ///     Variable::new(4, 2),
    ///     Variable::new(4, 3),
    /// ])
    /// .unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     CollectionError::ConflictingDomains { id: 4, first: 2, second: 3 }
    /// );
    /// ```
    pub fn try_from_variables<I>(vars: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = Variable>,
    {
        let mut vars: Vec<_> = vars.into_iter().collect();
        vars.sort();
        for pair in vars.windows(2) {
            if pair[0].id() == pair[1].id() && pair[0].states() != pair[1].states() {
                return Err(CollectionError::ConflictingDomains {
                    id: pair[0].id(),
                    first: pair[0].states(),
                    second: pair[1].states(),
                });
            }
        }
        vars.dedup();
        let dims = vars.iter().map(|v| v.states()).collect();
        Ok(Self { vars, dims })
    }

    /// Returns the number of variables in the collection.
    #[must_use]
    pub fn nvar(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if the collection holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns the per-position domain sizes in canonical order.
    ///
    /// The returned slice borrows from the collection; index cursors hold it
    /// for their whole lifetime, so the collection must outlive them.
    #[must_use]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the total number of configurations (product of all domain sizes).
    ///
    /// An empty collection has exactly one (empty) configuration.
    #[must_use]
    pub fn num_states(&self) -> usize {
        self.dims.iter().product()
    }

    /// Returns the variable at canonical position `pos`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<Variable> {
        self.vars.get(pos).copied()
    }

    /// Returns `true` if `var` is a member of this collection.
    #[must_use]
    pub fn contains_var(&self, var: Variable) -> bool {
        self.vars.binary_search(&var).is_ok()
    }

    /// Returns the canonical position of `var`, or `None` if it is not a member.
    #[must_use]
    pub fn position(&self, var: Variable) -> Option<usize> {
        self.vars.binary_search(&var).ok()
    }

    /// Returns `true` if every variable of `sub` appears in `self`.
    ///
    /// Both collections are canonically sorted, so this is equivalent to the
    /// ordered-subsequence test: `sub`'s variables appear in `self` at strictly
    /// increasing canonical positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use varspace_core::{Variable, VariableCollection};
    ///
    /// let full = VariableCollection::from_variables([
    ///     Variable::new(0, 2),
    ///     Variable::new(1, 3),
    ///     Variable::new(2, 2),
    /// ]);
    /// let sub = VariableCollection::from_variables([Variable::new(0, 2), Variable::new(2, 2)]);
    /// assert!(full.contains(&sub));
    /// assert!(full.contains(&VariableCollection::default()));
    /// ```
    #[must_use]
    pub fn contains(&self, sub: &VariableCollection) -> bool {
        let mut j = 0;
        for &var in &self.vars {
            if j == sub.nvar() {
                break;
            }
            if var == sub.vars[j] {
                j += 1;
            }
        }
        j == sub.nvar()
    }

    /// Returns the variables of `self` that are not members of `sub`.
    ///
    /// Together with a contained `sub`, the result partitions `self`: sweeping
    /// the difference's configurations yields the base offsets at which `sub`'s
    /// configurations tile `self`'s index space.
    #[must_use]
    pub fn difference(&self, sub: &VariableCollection) -> VariableCollection {
        let vars = self
            .vars
            .iter()
            .copied()
            .filter(|v| !sub.contains_var(*v))
            .collect::<Vec<_>>();
        Self::from_variables(vars)
    }

    /// Returns an iterator over the variables in canonical order.
    pub fn iter(&self) -> slice::Iter<'_, Variable> {
        self.vars.iter()
    }
}

impl Index<usize> for VariableCollection {
    type Output = Variable;

    fn index(&self, pos: usize) -> &Self::Output {
        &self.vars[pos]
    }
}

impl FromIterator<Variable> for VariableCollection {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        Self::from_variables(iter)
    }
}

impl<'a> IntoIterator for &'a VariableCollection {
    type Item = &'a Variable;
    type IntoIter = slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for VariableCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, var) in self.vars.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{var}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(specs: &[(u32, usize)]) -> VariableCollection {
        specs
            .iter()
            .map(|&(id, states)| Variable::new(id, states))
            .collect()
    }

    mod construction {
        use super::*;

        #[test]
        fn test_sorts_and_dedups() {
            let c = vars(&[(2, 2), (0, 3), (2, 2), (1, 4)]);
            assert_eq!(c.nvar(), 3);
            assert_eq!(c.dims(), &[3, 4, 2]);
        }

        #[test]
        fn test_try_from_rejects_conflicting_domains() {
            let err = VariableCollection::try_from_variables([
                Variable::new(1, 2),
                Variable::new(1, 3),
            ])
            .unwrap_err();
            assert_eq!(
                err,
                CollectionError::ConflictingDomains {
                    id: 1,
                    first: 2,
                    second: 3
                }
            );
        }

        #[test]
        fn test_try_from_accepts_exact_duplicates() {
            let c = VariableCollection::try_from_variables([
                Variable::new(1, 2),
                Variable::new(1, 2),
            ])
            .unwrap();
            assert_eq!(c.nvar(), 1);
        }
    }

    mod queries {
        use super::*;

        #[test]
        fn test_num_states() {
            assert_eq!(vars(&[(0, 2), (1, 3), (2, 4)]).num_states(), 24);
            assert_eq!(VariableCollection::default().num_states(), 1);
        }

        #[test]
        fn test_contains_subsequence() {
            let full = vars(&[(0, 2), (1, 3), (2, 2), (3, 5)]);
            assert!(full.contains(&vars(&[(1, 3), (3, 5)])));
            assert!(full.contains(&full.clone()));
            assert!(full.contains(&VariableCollection::default()));
            assert!(!full.contains(&vars(&[(4, 2)])));
        }

        #[test]
        fn test_difference_partitions() {
            let full = vars(&[(0, 2), (1, 3), (2, 2)]);
            let sub = vars(&[(1, 3)]);
            let comp = full.difference(&sub);
            assert_eq!(comp, vars(&[(0, 2), (2, 2)]));
            assert_eq!(comp.num_states() * sub.num_states(), full.num_states());
        }

        #[test]
        fn test_display() {
            assert_eq!(vars(&[(0, 2), (3, 2)]).to_string(), "{x0, x3}");
        }
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        fn arb_collection() -> impl Strategy<Value = VariableCollection> {
            proptest::collection::vec((0..8_u32, 1..5_usize), 0..6)
                .prop_map(|specs| specs.iter().map(|&(id, s)| Variable::new(id, s)).collect())
        }

        proptest! {
            #[test]
            fn prop_contains_is_reflexive(c in arb_collection()) {
                prop_assert!(c.contains(&c.clone()));
            }

            #[test]
            fn prop_difference_splits_state_count(
                c in arb_collection(),
                mask in proptest::collection::vec(any::<bool>(), 6),
            ) {
                let sub: VariableCollection = c
                    .iter()
                    .zip(&mask)
                    .filter(|&(_, &keep)| keep)
                    .map(|(&var, _)| var)
                    .collect();
                let diff = c.difference(&sub);
                prop_assert!(c.contains(&sub));
                prop_assert_eq!(sub.num_states() * diff.num_states(), c.num_states());
            }
        }
    }
}
