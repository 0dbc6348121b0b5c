use super::{AbstractDialecticalFramework, Argument, ArgumentSet, LabelType};
use anyhow::{anyhow, Result};
use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashMap},
    fmt::Display,
};

/// A three-valued interpretation of the arguments of an ADF.
///
/// Each argument of the domain is either satisfied, unsatisfied or undecided.
/// The three sets are pairwise disjoint; their union is the domain of the interpretation.
///
/// Interpretations are immutable: refining one produces a new value.
///
/// Note that [`Eq`] compares the three sets, while [`informativeness_cmp`](Self::informativeness_cmp) only compares the number of undecided arguments.
/// This is why interpretations do not implement [`Ord`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interpretation {
    satisfied: BTreeSet<usize>,
    unsatisfied: BTreeSet<usize>,
    undecided: BTreeSet<usize>,
}

impl Interpretation {
    /// Builds the interpretation where all the arguments of the ADF are undecided.
    pub fn empty<T>(adf: &AbstractDialecticalFramework<T>) -> Self
    where
        T: LabelType,
    {
        Self {
            satisfied: BTreeSet::new(),
            unsatisfied: BTreeSet::new(),
            undecided: (0..adf.n_arguments()).collect(),
        }
    }

    /// Builds an interpretation from its three sets of argument ids.
    ///
    /// # Panics
    ///
    /// Panics if the sets are not pairwise disjoint.
    pub fn from_sets(
        satisfied: BTreeSet<usize>,
        unsatisfied: BTreeSet<usize>,
        undecided: BTreeSet<usize>,
    ) -> Self {
        if !satisfied.is_disjoint(&unsatisfied)
            || !satisfied.is_disjoint(&undecided)
            || !unsatisfied.is_disjoint(&undecided)
        {
            panic!("the sets of an interpretation must be pairwise disjoint")
        }
        Self {
            satisfied,
            unsatisfied,
            undecided,
        }
    }

    /// Builds an interpretation from an explicit assignment of the argument ids (`None` stands for undecided).
    pub fn from_assignment(assignment: &HashMap<usize, Option<bool>>) -> Self {
        let mut result = Self {
            satisfied: BTreeSet::new(),
            unsatisfied: BTreeSet::new(),
            undecided: BTreeSet::new(),
        };
        assignment.iter().for_each(|(id, value)| match value {
            Some(true) => {
                result.satisfied.insert(*id);
            }
            Some(false) => {
                result.unsatisfied.insert(*id);
            }
            None => {
                result.undecided.insert(*id);
            }
        });
        result
    }

    /// Returns a builder of interpretations over the arguments of the ADF, using argument labels.
    ///
    /// Arguments which are not explicitly set are undecided.
    pub fn builder<T>(adf: &AbstractDialecticalFramework<T>) -> InterpretationBuilder<'_, T>
    where
        T: LabelType,
    {
        InterpretationBuilder {
            arguments: adf.argument_set(),
            values: vec![None; adf.n_arguments()],
        }
    }

    /// Returns `true` iff the argument with the given id is satisfied.
    pub fn is_satisfied(&self, id: usize) -> bool {
        self.satisfied.contains(&id)
    }

    /// Returns `true` iff the argument with the given id is unsatisfied.
    pub fn is_unsatisfied(&self, id: usize) -> bool {
        self.unsatisfied.contains(&id)
    }

    /// Returns `true` iff the argument with the given id is undecided.
    pub fn is_undecided(&self, id: usize) -> bool {
        self.undecided.contains(&id)
    }

    /// Returns `true` iff the argument with the given id is either satisfied or unsatisfied.
    pub fn is_decided(&self, id: usize) -> bool {
        self.is_satisfied(id) || self.is_unsatisfied(id)
    }

    /// Returns the value of an argument: `Some(true)` if it is satisfied, `Some(false)` if it is unsatisfied, and `None` if it is undecided.
    ///
    /// An error is returned if the argument is not in the domain of this interpretation.
    pub fn value_of<T>(&self, argument: &Argument<T>) -> Result<Option<bool>>
    where
        T: LabelType,
    {
        let id = argument.id();
        if self.is_satisfied(id) {
            Ok(Some(true))
        } else if self.is_unsatisfied(id) {
            Ok(Some(false))
        } else if self.is_undecided(id) {
            Ok(None)
        } else {
            Err(anyhow!(
                "argument {} is not in the domain of the interpretation",
                argument
            ))
        }
    }

    /// Iterates over the ids of the satisfied arguments.
    pub fn satisfied(&self) -> impl Iterator<Item = usize> + '_ {
        self.satisfied.iter().copied()
    }

    /// Iterates over the ids of the unsatisfied arguments.
    pub fn unsatisfied(&self) -> impl Iterator<Item = usize> + '_ {
        self.unsatisfied.iter().copied()
    }

    /// Iterates over the ids of the undecided arguments.
    pub fn undecided(&self) -> impl Iterator<Item = usize> + '_ {
        self.undecided.iter().copied()
    }

    /// Returns the size of the domain.
    pub fn len(&self) -> usize {
        self.satisfied.len() + self.unsatisfied.len() + self.undecided.len()
    }

    /// Returns `true` iff the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of satisfied or unsatisfied arguments.
    pub fn n_decided(&self) -> usize {
        self.satisfied.len() + self.unsatisfied.len()
    }

    /// Returns the number of undecided arguments.
    pub fn n_undecided(&self) -> usize {
        self.undecided.len()
    }

    /// Compares two interpretations by the number of their undecided arguments.
    ///
    /// This is a total preorder: interpretations with the same number of undecided arguments are [`Ordering::Equal`], even if they are different.
    /// The "less" side is the less informative one.
    pub fn informativeness_cmp(&self, other: &Self) -> Ordering {
        other.n_undecided().cmp(&self.n_undecided())
    }

    /// Returns `true` iff this interpretation has strictly less undecided arguments than the other one.
    pub fn is_more_informative_than(&self, other: &Self) -> bool {
        self.informativeness_cmp(other) == Ordering::Greater
    }

    /// Returns `true` iff every decided argument of this interpretation has the same value in the other one.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.satisfied.is_subset(&other.satisfied) && self.unsatisfied.is_subset(&other.unsatisfied)
    }

    /// Returns `true` iff [`is_subset_of`](Self::is_subset_of) holds and the interpretations differ on some decided argument.
    pub fn is_strict_subset_of(&self, other: &Self) -> bool {
        self.is_subset_of(other) && self.n_decided() < other.n_decided()
    }

    /// Returns an object displaying this interpretation with the labels of the arguments.
    pub fn display<'a, T>(&'a self, arguments: &'a ArgumentSet<T>) -> InterpretationDisplay<'a, T>
    where
        T: LabelType,
    {
        InterpretationDisplay {
            interpretation: self,
            arguments,
        }
    }
}

/// A builder for [`Interpretation`] objects, working with argument labels.
pub struct InterpretationBuilder<'a, T>
where
    T: LabelType,
{
    arguments: &'a ArgumentSet<T>,
    values: Vec<Option<bool>>,
}

impl<T> InterpretationBuilder<'_, T>
where
    T: LabelType,
{
    fn set(mut self, label: &T, value: Option<bool>) -> Result<Self> {
        let id = self.arguments.get_argument_index(label)?;
        self.values[id] = value;
        Ok(self)
    }

    /// Sets the argument with the given label as satisfied.
    pub fn satisfied(self, label: &T) -> Result<Self> {
        self.set(label, Some(true))
    }

    /// Sets the argument with the given label as unsatisfied.
    pub fn unsatisfied(self, label: &T) -> Result<Self> {
        self.set(label, Some(false))
    }

    /// Sets the argument with the given label as undecided.
    pub fn undecided(self, label: &T) -> Result<Self> {
        self.set(label, None)
    }

    /// Builds the interpretation.
    pub fn build(self) -> Interpretation {
        Interpretation::from_assignment(&self.values.into_iter().enumerate().collect())
    }
}

/// Displays an interpretation using argument labels, like `t(a) f(b) u(c)`.
pub struct InterpretationDisplay<'a, T>
where
    T: LabelType,
{
    interpretation: &'a Interpretation,
    arguments: &'a ArgumentSet<T>,
}

impl<T> Display for InterpretationDisplay<'_, T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for arg in self.arguments.iter() {
            let prefix = if self.interpretation.is_satisfied(arg.id()) {
                "t"
            } else if self.interpretation.is_unsatisfied(arg.id()) {
                "f"
            } else if self.interpretation.is_undecided(arg.id()) {
                "u"
            } else {
                continue;
            };
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}({})", prefix, arg.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[usize]) -> BTreeSet<usize> {
        ids.iter().copied().collect()
    }

    fn adf() -> AbstractDialecticalFramework<&'static str> {
        AbstractDialecticalFramework::new_with_argument_set(ArgumentSet::new_with_labels(&[
            "a", "b", "c",
        ]))
    }

    #[test]
    fn test_empty() {
        let adf = adf();
        let i = Interpretation::empty(&adf);
        assert_eq!(3, i.len());
        assert_eq!(3, i.n_undecided());
        assert_eq!(0, i.n_decided());
        assert!((0..3).all(|a| i.is_undecided(a)));
    }

    #[test]
    fn test_from_sets() {
        let i = Interpretation::from_sets(set(&[0]), set(&[1]), set(&[2]));
        assert!(i.is_satisfied(0));
        assert!(i.is_unsatisfied(1));
        assert!(i.is_undecided(2));
        assert!(i.is_decided(0) && i.is_decided(1) && !i.is_decided(2));
        assert_eq!(vec![0], i.satisfied().collect::<Vec<_>>());
        assert_eq!(vec![1], i.unsatisfied().collect::<Vec<_>>());
        assert_eq!(vec![2], i.undecided().collect::<Vec<_>>());
    }

    #[test]
    #[should_panic(expected = "pairwise disjoint")]
    fn test_from_sets_not_disjoint() {
        Interpretation::from_sets(set(&[0, 1]), set(&[1]), set(&[2]));
    } // kcov-ignore

    #[test]
    fn test_partition_invariant() {
        let adf = adf();
        let i = Interpretation::builder(&adf)
            .satisfied(&"a")
            .unwrap()
            .unsatisfied(&"c")
            .unwrap()
            .build();
        for arg in adf.argument_set().iter() {
            let n_memberships = [
                i.is_satisfied(arg.id()),
                i.is_unsatisfied(arg.id()),
                i.is_undecided(arg.id()),
            ]
            .iter()
            .filter(|b| **b)
            .count();
            assert_eq!(1, n_memberships);
        }
        assert_eq!(i.len(), i.n_decided() + i.n_undecided());
    }

    #[test]
    fn test_builder_unknown_label() {
        let adf = adf();
        assert!(Interpretation::builder(&adf).satisfied(&"d").is_err());
    }

    #[test]
    fn test_builder_overrides() {
        let adf = adf();
        let i = Interpretation::builder(&adf)
            .satisfied(&"a")
            .unwrap()
            .undecided(&"a")
            .unwrap()
            .build();
        assert_eq!(Interpretation::empty(&adf), i);
    }

    #[test]
    fn test_value_of() {
        let adf = adf();
        let i = Interpretation::builder(&adf)
            .unsatisfied(&"b")
            .unwrap()
            .build();
        let arguments = adf.argument_set();
        assert_eq!(None, i.value_of(arguments.get_argument(&"a").unwrap()).unwrap());
        assert_eq!(
            Some(false),
            i.value_of(arguments.get_argument(&"b").unwrap()).unwrap()
        );
        let partial = Interpretation::from_sets(set(&[0]), set(&[]), set(&[]));
        assert_eq!(
            Some(true),
            partial.value_of(arguments.get_argument(&"a").unwrap()).unwrap()
        );
        assert!(partial
            .value_of(arguments.get_argument(&"b").unwrap())
            .is_err());
    }

    #[test]
    fn test_informativeness_is_a_preorder() {
        let i1 = Interpretation::from_sets(set(&[0]), set(&[]), set(&[1, 2]));
        let i2 = Interpretation::from_sets(set(&[]), set(&[2]), set(&[0, 1]));
        assert_eq!(Ordering::Equal, i1.informativeness_cmp(&i2));
        assert_ne!(i1, i2);
        assert!(!i1.is_more_informative_than(&i2));
        assert!(!i2.is_more_informative_than(&i1));
        let i3 = Interpretation::from_sets(set(&[0]), set(&[2]), set(&[1]));
        assert!(i3.is_more_informative_than(&i1));
        assert_eq!(Ordering::Less, i1.informativeness_cmp(&i3));
    }

    #[test]
    fn test_subset() {
        let i1 = Interpretation::from_sets(set(&[0]), set(&[]), set(&[1, 2]));
        let i2 = Interpretation::from_sets(set(&[0]), set(&[2]), set(&[1]));
        let i3 = Interpretation::from_sets(set(&[]), set(&[0]), set(&[1, 2]));
        assert!(i1.is_subset_of(&i2));
        assert!(i1.is_strict_subset_of(&i2));
        assert!(i1.is_subset_of(&i1));
        assert!(!i1.is_strict_subset_of(&i1));
        assert!(!i3.is_subset_of(&i2));
    }

    #[test]
    fn test_display() {
        let adf = adf();
        let i = Interpretation::builder(&adf)
            .satisfied(&"a")
            .unwrap()
            .unsatisfied(&"b")
            .unwrap()
            .build();
        assert_eq!("t(a) f(b) u(c)", i.display(adf.argument_set()).to_string());
    }
}
