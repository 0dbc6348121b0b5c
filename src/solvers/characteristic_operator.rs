use crate::{
    adf::{AbstractDialecticalFramework, Interpretation, LabelType},
    encodings::CompletionEncoding,
    sat::SatSolverState,
};
use anyhow::Result;
use log::{debug, trace};
use std::collections::BTreeSet;

/// The characteristic operator of an ADF, computed with SAT calls.
///
/// Given an interpretation, the operator satisfies the arguments whose acceptance condition holds for every two-valued completion
/// of the interpretation, and unsatisfies the ones whose acceptance condition holds for none of them.
/// The other arguments are undecided.
///
/// Each application builds a brand new state from the one given as parameter and never alters the latter.
#[derive(Default)]
pub struct CharacteristicOperator;

impl CharacteristicOperator {
    /// Applies the operator to an interpretation.
    pub fn apply<T>(
        &self,
        state: &SatSolverState,
        adf: &AbstractDialecticalFramework<T>,
        interpretation: &Interpretation,
    ) -> Result<Interpretation>
    where
        T: LabelType,
    {
        self.apply_with_frozen(state, adf, interpretation, &|_| false)
    }

    /// Applies the operator to an interpretation, except for the frozen arguments which keep their value.
    pub fn apply_with_frozen<T>(
        &self,
        state: &SatSolverState,
        adf: &AbstractDialecticalFramework<T>,
        interpretation: &Interpretation,
        frozen: &dyn Fn(usize) -> bool,
    ) -> Result<Interpretation>
    where
        T: LabelType,
    {
        let encoding = CompletionEncoding::new(adf, interpretation);
        let mut completions = state.new_root();
        completions.add(encoding.clauses().to_vec());
        let mut satisfied = BTreeSet::new();
        let mut unsatisfied = BTreeSet::new();
        let mut undecided = BTreeSet::new();
        for a in 0..adf.n_arguments() {
            let value = if frozen(a) {
                if interpretation.is_satisfied(a) {
                    Some(true)
                } else if interpretation.is_unsatisfied(a) {
                    Some(false)
                } else {
                    None
                }
            } else {
                let name = encoding.acceptance_literal(a);
                if completions
                    .witness_under_assumptions(&[name.negate()])?
                    .is_none()
                {
                    Some(true)
                } else if completions.witness_under_assumptions(&[name])?.is_none() {
                    Some(false)
                } else {
                    None
                }
            };
            match value {
                Some(true) => satisfied.insert(a),
                Some(false) => unsatisfied.insert(a),
                None => undecided.insert(a),
            };
        }
        let result = Interpretation::from_sets(satisfied, unsatisfied, undecided);
        trace!(
            "characteristic operator maps {} to {}",
            interpretation.display(adf.argument_set()),
            result.display(adf.argument_set())
        );
        Ok(result)
    }

    /// Iterates the operator from an interpretation until a fixpoint is reached, keeping the values of the frozen arguments.
    ///
    /// The starting interpretation must be less informative than its image, as the empty interpretation is;
    /// the fixpoint is then the least one above it.
    pub fn fixpoint_from<T>(
        &self,
        state: &SatSolverState,
        adf: &AbstractDialecticalFramework<T>,
        start: Interpretation,
        frozen: &dyn Fn(usize) -> bool,
    ) -> Result<Interpretation>
    where
        T: LabelType,
    {
        let mut current = start;
        let mut n_applications = 0;
        loop {
            let next = self.apply_with_frozen(state, adf, &current, frozen)?;
            n_applications += 1;
            if next == current {
                debug!(
                    "reached a fixpoint with {} decided arguments after {} applications",
                    current.n_decided(),
                    n_applications
                );
                return Ok(current);
            }
            current = next;
        }
    }

    /// Computes the grounded interpretation of the framework, the least fixpoint of the operator.
    pub fn grounded<T>(
        &self,
        state: &SatSolverState,
        adf: &AbstractDialecticalFramework<T>,
    ) -> Result<Interpretation>
    where
        T: LabelType,
    {
        self.fixpoint_from(state, adf, Interpretation::empty(adf), &|_| false)
    }
}
