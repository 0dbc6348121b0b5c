use crate::{
    adf::{AcceptanceCondition, LinkStrategy, LinkType},
    encodings::TseitinTransformer,
    sat::{Clause, Literal, SatSolverFactory, SolvingResult},
};
use anyhow::{anyhow, Result};
use log::trace;
use std::{collections::HashMap, rc::Rc};

/// A [`LinkStrategy`] relying on SAT solvers.
///
/// The acceptance condition of the child is compiled twice, once with the parent set to true and once with the parent set to false;
/// the two compilations share the variables of the other parents.
/// A link is attacking if no assignment of the other parents makes the first formula true and the second one false,
/// and supporting if no assignment makes the second one true and the first one false.
/// Each of these two tests is run on a brand new solver.
pub struct SatLinkStrategy {
    solver_factory: Rc<dyn SatSolverFactory>,
}

impl SatLinkStrategy {
    /// Builds a new strategy using solvers provided by the factory.
    pub fn new(solver_factory: Rc<dyn SatSolverFactory>) -> Self {
        Self { solver_factory }
    }

    fn is_satisfiable(&self, clauses: &[Clause], assumptions: &[Literal]) -> Result<bool> {
        let mut solver = self.solver_factory.new_solver();
        clauses.iter().for_each(|cl| solver.add_clause(cl.clone()));
        match solver.solve_under_assumptions(assumptions) {
            SolvingResult::Satisfiable(_) => Ok(true),
            SolvingResult::Unsatisfiable => Ok(false),
            SolvingResult::Unknown => Err(anyhow!(
                "the SAT solver was unable to decide a link type"
            )),
        }
    }
}

impl LinkStrategy for SatLinkStrategy {
    fn compute(
        &self,
        parent: usize,
        child_acceptance_condition: &AcceptanceCondition,
    ) -> Result<LinkType> {
        if !child_acceptance_condition.contains_argument(parent) {
            return Err(anyhow!(
                "parent not present: argument with id {} does not occur in {}",
                parent,
                child_acceptance_condition
            ));
        }
        let atom_vars = child_acceptance_condition
            .arguments()
            .into_iter()
            .enumerate()
            .map(|(i, a)| (a, Literal::positive(i + 1)))
            .collect::<HashMap<usize, Literal>>();
        let mut n_vars = atom_vars.len();
        let mut new_var = || {
            n_vars += 1;
            Literal::positive(n_vars)
        };
        let mapping = |a: usize| atom_vars[&a];
        let transformer = TseitinTransformer::new(&mapping);
        let cofactor = |value: bool| {
            child_acceptance_condition.fix_with(&|a| if a == parent { Some(value) } else { None })
        };
        let (name_top, mut clauses) = transformer.compile(&cofactor(true), &mut new_var);
        let (name_bot, clauses_bot) = transformer.compile(&cofactor(false), &mut new_var);
        clauses.extend(clauses_bot);
        let attacking = !self.is_satisfiable(&clauses, &[name_top, name_bot.negate()])?;
        let supporting = !self.is_satisfiable(&clauses, &[name_bot, name_top.negate()])?;
        let link_type = LinkType::get(attacking, supporting);
        trace!(
            "link from argument with id {} in {} is {}",
            parent,
            child_acceptance_condition,
            link_type
        );
        Ok(link_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::DefaultSatSolverFactory;
    use AcceptanceCondition::*;

    fn link_type(parent: usize, acc: AcceptanceCondition) -> Result<LinkType> {
        SatLinkStrategy::new(Rc::new(DefaultSatSolverFactory)).compute(parent, &acc)
    }

    macro_rules! link_type_tests {
        ($($name:ident: $parent:expr, $acc:expr => $expected:expr,)*) => {
            $(
                paste::item! {
                    #[test]
                    fn [< test_link_type_ $name >]() {
                        assert_eq!($expected, link_type($parent, $acc).unwrap());
                    }
                }
            )*
        };
    }

    link_type_tests! {
        conjunction_is_supporting: 0, Conjunction(vec![Argument(0), Argument(1)]) => LinkType::Supporting,
        negation_is_attacking: 0, AcceptanceCondition::negation(Argument(0)) => LinkType::Attacking,
        atom_is_supporting: 0, Argument(0) => LinkType::Supporting,
        xor_is_dependent: 1, AcceptanceCondition::exclusive_disjunction(Argument(0), Argument(1)) => LinkType::Dependent,
        equivalence_is_dependent: 0, Equivalence(vec![Argument(0), Argument(1)]) => LinkType::Dependent,
        tautological_use_is_redundant: 0, Disjunction(vec![Argument(0), AcceptanceCondition::negation(Argument(0))]) => LinkType::Redundant,
        absorbed_is_redundant: 1, Disjunction(vec![Argument(0), Conjunction(vec![Argument(0), Argument(1)])]) => LinkType::Redundant,
        implication_premise_is_attacking: 0, AcceptanceCondition::implication(Argument(0), Argument(1)) => LinkType::Attacking,
        implication_conclusion_is_supporting: 1, AcceptanceCondition::implication(Argument(0), Argument(1)) => LinkType::Supporting,
        self_link_is_supporting: 2, Conjunction(vec![Argument(2), Tautology]) => LinkType::Supporting,
    }

    #[test]
    fn test_parent_not_present() {
        let err = link_type(2, Conjunction(vec![Argument(0), Argument(1)])).unwrap_err();
        assert!(err.to_string().starts_with("parent not present"));
    }

    fn valuation(parent: usize, parent_value: bool, others: usize) -> impl Fn(usize) -> bool {
        move |a| {
            if a == parent {
                parent_value
            } else {
                let i = if a < parent { a } else { a - 1 };
                others & (1 << i) != 0
            }
        }
    }

    #[test]
    fn test_classification_matches_truth_tables() {
        let acc = Disjunction(vec![
            Conjunction(vec![Argument(0), AcceptanceCondition::negation(Argument(1))]),
            AcceptanceCondition::implication(Argument(2), Argument(1)),
        ]);
        for parent in 0..3 {
            let t = link_type(parent, acc.clone()).unwrap();
            let raising_helps = (0..4).any(|others| {
                !acc.evaluate(&valuation(parent, false, others))
                    && acc.evaluate(&valuation(parent, true, others))
            });
            let raising_hurts = (0..4).any(|others| {
                acc.evaluate(&valuation(parent, false, others))
                    && !acc.evaluate(&valuation(parent, true, others))
            });
            assert_eq!(!raising_helps, t.is_attacking());
            assert_eq!(!raising_hurts, t.is_supporting());
        }
    }
}
