use super::{
    AcceptanceCondition, Argument, ArgumentSet, Interpretation, LabelType, LinkStrategy,
    LinkTable,
};
use anyhow::{anyhow, Result};

/// An Abstract Dialectical Framework.
///
/// Each argument is associated with an acceptance condition, a formula over the arguments of the framework.
/// Acceptance conditions default to the tautology until they are set.
///
/// The parents of an argument are the arguments occurring in its acceptance condition.
/// Links are not stored in the framework; their types are computed on demand by [`compute_links`](Self::compute_links).
#[derive(Debug, Clone)]
pub struct AbstractDialecticalFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    acceptance_conditions: Vec<AcceptanceCondition>,
    parents: Vec<Vec<usize>>,
    children: Vec<Vec<usize>>,
}

impl<T> AbstractDialecticalFramework<T>
where
    T: LabelType,
{
    /// Builds a new ADF given its set of arguments.
    ///
    /// All the acceptance conditions are set to the tautology.
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let n = arguments.len();
        Self {
            arguments,
            acceptance_conditions: vec![AcceptanceCondition::Tautology; n],
            parents: vec![vec![]; n],
            children: vec![vec![]; n],
        }
    }

    /// Returns the atom of the acceptance conditions that refers to the argument with the given label.
    pub fn atom(&self, label: &T) -> Result<AcceptanceCondition> {
        self.arguments
            .get_argument_index(label)
            .map(AcceptanceCondition::Argument)
    }

    /// Sets the acceptance condition of an argument.
    ///
    /// An error is returned if no argument has this label, or if the acceptance condition refers to an undefined argument.
    pub fn set_acceptance_condition(
        &mut self,
        label: &T,
        acceptance_condition: AcceptanceCondition,
    ) -> Result<()> {
        let id = self.arguments.get_argument_index(label)?;
        let atoms = acceptance_condition.arguments();
        if let Some(a) = atoms.iter().find(|a| **a >= self.arguments.len()) {
            return Err(anyhow!(
                "the acceptance condition of {} refers to an undefined argument (id={})",
                label,
                a
            ));
        }
        self.parents[id]
            .iter()
            .for_each(|p| self.children[*p].retain(|c| *c != id));
        self.parents[id] = atoms.into_iter().collect();
        for p in self.parents[id].iter() {
            self.children[*p].push(id);
            self.children[*p].sort_unstable();
        }
        self.acceptance_conditions[id] = acceptance_condition;
        Ok(())
    }

    /// Returns the set of arguments of this framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns the number of arguments of this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the acceptance condition of an argument.
    pub fn acceptance_condition(&self, argument: &Argument<T>) -> &AcceptanceCondition {
        self.acceptance_condition_by_id(argument.id())
    }

    /// Returns the acceptance condition of the argument with the given id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn acceptance_condition_by_id(&self, id: usize) -> &AcceptanceCondition {
        &self.acceptance_conditions[id]
    }

    /// Iterates over the ids of the parents of an argument, in increasing order.
    pub fn iter_parents(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.parents[id].iter().copied()
    }

    /// Iterates over the ids of the children of an argument, in increasing order.
    pub fn iter_children(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.children[id].iter().copied()
    }

    /// Returns the number of (parent, child) pairs.
    pub fn n_links(&self) -> usize {
        self.parents.iter().map(|p| p.len()).sum()
    }

    /// Computes the reduct of this framework given an interpretation.
    ///
    /// The reduct has the same arguments, and its acceptance conditions are the ones of this framework
    /// where the decided arguments are replaced by the corresponding constants.
    pub fn fix_partial(&self, interpretation: &Interpretation) -> Self {
        let mut reduct = Self::new_with_argument_set(self.arguments.clone());
        for (id, acc) in self.acceptance_conditions.iter().enumerate() {
            let fixed = acc.fix_partial(interpretation);
            reduct.parents[id] = fixed.arguments().into_iter().collect();
            reduct.acceptance_conditions[id] = fixed;
        }
        for id in 0..reduct.n_arguments() {
            for p in reduct.parents[id].clone() {
                reduct.children[p].push(id);
            }
        }
        reduct
    }

    /// Classifies the links of this framework.
    pub fn compute_links(&self, strategy: &dyn LinkStrategy) -> Result<LinkTable> {
        LinkTable::compute(self, strategy)
    }
}
