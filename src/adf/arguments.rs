use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The bounds shared by everything used to name the statements of an ADF.
///
/// Labels are displayed in interpretations and looked up when acceptance conditions are built from atoms,
/// hence the need for [`Display`] and [`Hash`] on top of value semantics.
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// A statement of an ADF.
///
/// The id is the position of the statement in its [`ArgumentSet`].
/// Interpretations, acceptance conditions and SAT encodings only deal with ids;
/// the label is kept for lookups and output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the statement.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustadf::adf::{AbstractDialecticalFramework, ArgumentSet};
    /// let adf = AbstractDialecticalFramework::new_with_argument_set(
    ///     ArgumentSet::new_with_labels(&["a", "b"]),
    /// );
    /// let labels = adf.argument_set().iter().map(|a| *a.label()).collect::<Vec<_>>();
    /// assert_eq!(vec!["a", "b"], labels);
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the statement, used as the index of its acceptance condition.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// The statements of an ADF.
///
/// The set is fixed once built, since the framework allocates one acceptance condition per statement.
/// Ids are dense: they range from 0 (included) to the number of statements (excluded).
#[derive(Clone, Debug, Default)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds the statements of an ADF from their labels.
    ///
    /// Statements are numbered in the order of their first occurrence; repeated labels are ignored.
    /// This is the way a framework is declared before its acceptance conditions are set.
    ///
    /// # Arguments
    ///
    /// * `labels` - the statement labels
    ///
    /// # Example
    ///
    /// ```
    /// # use crustadf::adf::{AbstractDialecticalFramework, AcceptanceCondition, ArgumentSet};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "a"]);
    /// assert_eq!(2, arguments.len());
    /// let mut adf = AbstractDialecticalFramework::new_with_argument_set(arguments);
    /// let a = adf.atom(&"a").unwrap();
    /// adf.set_acceptance_condition(&"b", AcceptanceCondition::negation(a)).unwrap();
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut label_to_id = HashMap::with_capacity(labels.len());
        let mut arguments = Vec::with_capacity(labels.len());
        for label in labels {
            if label_to_id.contains_key(label) {
                continue;
            }
            label_to_id.insert(label.clone(), arguments.len());
            arguments.push(Argument {
                id: arguments.len(),
                label: label.clone(),
            });
        }
        arguments.shrink_to_fit();
        label_to_id.shrink_to_fit();
        ArgumentSet {
            arguments,
            label_to_id,
        }
    }

    /// Returns the number of statements.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the framework has no statement.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Resolves a label into the id of the corresponding statement.
    ///
    /// This is the lookup performed when an atom of an acceptance condition is built from a label.
    /// An error is returned for unknown labels.
    ///
    /// # Arguments
    ///
    /// * `label` - the statement label
    ///
    /// # Example
    ///
    /// ```
    /// # use crustadf::adf::{AbstractDialecticalFramework, ArgumentSet};
    /// let adf = AbstractDialecticalFramework::new_with_argument_set(
    ///     ArgumentSet::new_with_labels(&["a", "b", "c"]),
    /// );
    /// assert_eq!(2, adf.argument_set().get_argument_index(&"c").unwrap());
    /// assert!(adf.atom(&"d").is_err());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize> {
        self.label_to_id
            .get(label)
            .copied()
            .ok_or_else(|| anyhow!("no such argument: {}", label))
    }

    /// Returns the statement with the given label.
    ///
    /// # Arguments
    ///
    /// * `label` - the statement label
    ///
    /// # Example
    ///
    /// ```
    /// # use crustadf::adf::{AbstractDialecticalFramework, AcceptanceCondition, ArgumentSet};
    /// let mut adf = AbstractDialecticalFramework::new_with_argument_set(
    ///     ArgumentSet::new_with_labels(&["a", "b"]),
    /// );
    /// let a = adf.atom(&"a").unwrap();
    /// adf.set_acceptance_condition(&"b", a).unwrap();
    /// let b = adf.argument_set().get_argument(&"b").unwrap();
    /// assert_eq!(vec![0], adf.iter_parents(b.id()).collect::<Vec<_>>());
    /// ```
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.get_argument_index(label)
            .map(|id| &self.arguments[id])
    }

    /// Returns the statement with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id is not lower than the number of statements.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arguments[id]
    }

    /// Iterates over the statements by increasing ids.
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_first_occurrences() {
        let args = ArgumentSet::new_with_labels(&["x", "y", "x", "z", "y"]);
        assert_eq!(3, args.len());
        assert_eq!(
            vec![(0, "x"), (1, "y"), (2, "z")],
            args.iter().map(|a| (a.id(), *a.label())).collect::<Vec<_>>()
        );
        for a in args.iter() {
            assert_eq!(a, args.get_argument_by_id(a.id()));
            assert_eq!(a.id(), args.get_argument_index(a.label()).unwrap());
        }
    }

    #[test]
    fn test_empty_framework() {
        let args = ArgumentSet::new_with_labels(&[] as &[String]);
        assert!(args.is_empty());
        assert_eq!(0, args.iter().count());
        assert!(args.get_argument_index(&"a".to_string()).is_err());
    }

    #[test]
    fn test_owned_labels() {
        let labels = ["s1", "s2"].map(String::from);
        let args = ArgumentSet::new_with_labels(&labels);
        let s2 = args.get_argument(&"s2".to_string()).unwrap();
        assert_eq!(1, s2.id());
        assert_eq!("s2", format!("{}", s2));
    }

    #[test]
    #[should_panic(expected = "no such argument: c")]
    fn test_unknown_label() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        args.get_argument(&"c").unwrap();
    }
}
