use super::TseitinTransformer;
use crate::{
    adf::{AbstractDialecticalFramework, Interpretation, LabelType},
    sat::{clause, Clause, Literal},
};

/// The acceptance conditions of a framework, evaluated over the two-valued completions of an interpretation.
///
/// The models of the clauses are the completions of the interpretation: the completion variable of a satisfied (resp. unsatisfied)
/// argument is forced to true (resp. false), while the ones of the undecided arguments are free.
/// Each acceptance condition is given a name whose value is the one of the condition under the completion.
///
/// The variables are numbered from 1, independently from any [`SatEncodingContext`](super::SatEncodingContext).
/// The clauses are meant to be solved in a state of their own.
pub struct CompletionEncoding {
    clauses: Vec<Clause>,
    acceptance_literals: Vec<Literal>,
}

impl CompletionEncoding {
    /// Encodes the completions of an interpretation of the given framework.
    pub fn new<T>(adf: &AbstractDialecticalFramework<T>, interpretation: &Interpretation) -> Self
    where
        T: LabelType,
    {
        let n_args = adf.n_arguments();
        let mut clauses = Vec::with_capacity(interpretation.n_decided());
        interpretation
            .satisfied()
            .for_each(|a| clauses.push(clause![Self::completion_var(a)]));
        interpretation
            .unsatisfied()
            .for_each(|a| clauses.push(clause![Self::completion_var(a).negate()]));
        let mut n_vars = n_args;
        let mut new_var = || {
            n_vars += 1;
            Literal::positive(n_vars)
        };
        let mapping = Self::completion_var;
        let transformer = TseitinTransformer::new(&mapping);
        let mut acceptance_literals = Vec::with_capacity(n_args);
        for a in 0..n_args {
            let (name, acc_clauses) =
                transformer.compile(adf.acceptance_condition_by_id(a), &mut new_var);
            clauses.extend(acc_clauses);
            acceptance_literals.push(name);
        }
        Self {
            clauses,
            acceptance_literals,
        }
    }

    fn completion_var(id: usize) -> Literal {
        Literal::positive(id + 1)
    }

    /// Returns the literal giving the value of an argument in the completion.
    pub fn completion_literal(&self, id: usize) -> Literal {
        Self::completion_var(id)
    }

    /// Returns the literal giving the value of the acceptance condition of an argument under the completion.
    pub fn acceptance_literal(&self, id: usize) -> Literal {
        self.acceptance_literals[id]
    }

    /// Returns the highest variable index used by the encoding.
    pub fn n_vars(&self) -> usize {
        self.clauses
            .iter()
            .flatten()
            .map(|l| usize::from(l.var()))
            .chain(
                self.acceptance_literals
                    .iter()
                    .map(|l| usize::from(l.var())),
            )
            .max()
            .unwrap_or(0)
    }

    /// Returns the clauses of the encoding.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Consumes the encoding and returns its clauses.
    pub fn into_clauses(self) -> Vec<Clause> {
        self.clauses
    }
}
