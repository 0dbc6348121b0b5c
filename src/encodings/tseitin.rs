use crate::{
    adf::AcceptanceCondition,
    sat::{clause, Clause, Literal},
};

/// Compiles acceptance conditions into equisatisfiable CNF formulas.
///
/// Each argument occurring in an acceptance condition is translated into a literal by the mapping given at construction time.
/// Each other node of the formula is given a fresh variable, which is constrained to be equivalent to the subformula.
pub struct TseitinTransformer<'a> {
    argument_mapping: &'a dyn Fn(usize) -> Literal,
}

impl<'a> TseitinTransformer<'a> {
    /// Builds a new transformer given the mapping from argument ids to literals.
    pub fn new(argument_mapping: &'a dyn Fn(usize) -> Literal) -> Self {
        Self { argument_mapping }
    }

    /// Compiles an acceptance condition.
    ///
    /// Returns the literal naming the formula and the clauses defining it.
    /// The fresh variables are provided by `new_var`.
    pub fn compile(
        &self,
        acceptance_condition: &AcceptanceCondition,
        new_var: &mut dyn FnMut() -> Literal,
    ) -> (Literal, Vec<Clause>) {
        let mut clauses = vec![];
        let name = self.compile_into(acceptance_condition, new_var, &mut clauses);
        (name, clauses)
    }

    fn compile_into(
        &self,
        acceptance_condition: &AcceptanceCondition,
        new_var: &mut dyn FnMut() -> Literal,
        clauses: &mut Vec<Clause>,
    ) -> Literal {
        match acceptance_condition {
            AcceptanceCondition::Argument(a) => (self.argument_mapping)(*a),
            AcceptanceCondition::Tautology => {
                let n = new_var();
                clauses.push(clause![n]);
                n
            }
            AcceptanceCondition::Contradiction => {
                let n = new_var();
                clauses.push(clause![n.negate()]);
                n
            }
            AcceptanceCondition::Negation(c) => {
                let c = self.compile_into(c, new_var, clauses);
                let n = new_var();
                clauses.push(clause![n.negate(), c.negate()]);
                clauses.push(clause![n, c]);
                n
            }
            AcceptanceCondition::Conjunction(children) => {
                let names = self.compile_children(children, new_var, clauses);
                let n = new_var();
                names
                    .iter()
                    .for_each(|c| clauses.push(clause![n.negate(), *c]));
                clauses.push(
                    std::iter::once(n)
                        .chain(names.iter().map(|c| c.negate()))
                        .collect(),
                );
                n
            }
            AcceptanceCondition::Disjunction(children) => {
                let names = self.compile_children(children, new_var, clauses);
                let n = new_var();
                clauses.push(
                    std::iter::once(n.negate())
                        .chain(names.iter().copied())
                        .collect(),
                );
                names
                    .iter()
                    .for_each(|c| clauses.push(clause![n, c.negate()]));
                n
            }
            AcceptanceCondition::Implication(l, r) => {
                let l = self.compile_into(l, new_var, clauses);
                let r = self.compile_into(r, new_var, clauses);
                let n = new_var();
                clauses.push(clause![n.negate(), l.negate(), r]);
                clauses.push(clause![n, l]);
                clauses.push(clause![n, r.negate()]);
                n
            }
            AcceptanceCondition::Equivalence(children) => {
                let names = self.compile_children(children, new_var, clauses);
                let n = new_var();
                for (i, c) in names.iter().enumerate() {
                    let next = names[(i + 1) % names.len()];
                    clauses.push(clause![n.negate(), c.negate(), next]);
                }
                clauses.push(std::iter::once(n).chain(names.iter().copied()).collect());
                clauses.push(
                    std::iter::once(n)
                        .chain(names.iter().map(|c| c.negate()))
                        .collect(),
                );
                n
            }
            AcceptanceCondition::ExclusiveDisjunction(l, r) => {
                let l = self.compile_into(l, new_var, clauses);
                let r = self.compile_into(r, new_var, clauses);
                let n = new_var();
                clauses.push(clause![n.negate(), l, r]);
                clauses.push(clause![n.negate(), l.negate(), r.negate()]);
                clauses.push(clause![n, l.negate(), r]);
                clauses.push(clause![n, l, r.negate()]);
                n
            }
        }
    }

    fn compile_children(
        &self,
        children: &[AcceptanceCondition],
        new_var: &mut dyn FnMut() -> Literal,
        clauses: &mut Vec<Clause>,
    ) -> Vec<Literal> {
        children
            .iter()
            .map(|c| self.compile_into(c, new_var, clauses))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::{DefaultSatSolverFactory, SatSolverFactory};
    use AcceptanceCondition::*;

    const N_ATOMS: usize = 3;

    fn compile(acc: &AcceptanceCondition) -> (Literal, Vec<Clause>) {
        let mut next_var = N_ATOMS;
        let mapping = |a: usize| Literal::positive(a + 1);
        TseitinTransformer::new(&mapping).compile(acc, &mut || {
            next_var += 1;
            Literal::positive(next_var)
        })
    }

    fn assert_equisatisfiable(acc: AcceptanceCondition) {
        let (name, clauses) = compile(&acc);
        for bits in 0..(1 << N_ATOMS) {
            let value_of = |a: usize| bits & (1 << a) != 0;
            let mut solver = DefaultSatSolverFactory.new_solver();
            clauses.iter().for_each(|cl| solver.add_clause(cl.clone()));
            let assumptions = (0..N_ATOMS)
                .map(|a| {
                    let l = Literal::positive(a + 1);
                    if value_of(a) {
                        l
                    } else {
                        l.negate()
                    }
                })
                .collect::<Vec<_>>();
            let model = solver
                .solve_under_assumptions(&assumptions)
                .unwrap_model()
                .unwrap();
            assert_eq!(
                acc.evaluate(&value_of),
                model.is_true(name),
                "wrong value for {} with bits {:#b}",
                acc,
                bits
            );
        }
    }

    macro_rules! equisatisfiability_tests {
        ($($name:ident: $acc:expr,)*) => {
            $(
                paste::item! {
                    #[test]
                    fn [< test_equisatisfiable_ $name >]() {
                        assert_equisatisfiable($acc);
                    }
                }
            )*
        };
    }

    equisatisfiability_tests! {
        tautology: Tautology,
        contradiction: Contradiction,
        atom: Argument(0),
        negation: AcceptanceCondition::negation(Argument(1)),
        conjunction: Conjunction(vec![Argument(0), Argument(1), Argument(2)]),
        empty_conjunction: Conjunction(vec![]),
        disjunction: Disjunction(vec![Argument(0), AcceptanceCondition::negation(Argument(2))]),
        empty_disjunction: Disjunction(vec![]),
        implication: AcceptanceCondition::implication(Argument(0), Argument(2)),
        equivalence: Equivalence(vec![Argument(0), Argument(1), Argument(2)]),
        single_equivalence: Equivalence(vec![Argument(1)]),
        exclusive_disjunction: AcceptanceCondition::exclusive_disjunction(Argument(1), Argument(2)),
        nested: Disjunction(vec![
            Conjunction(vec![Argument(0), Tautology]),
            AcceptanceCondition::exclusive_disjunction(
                Argument(1),
                AcceptanceCondition::implication(Argument(2), Contradiction),
            ),
        ]),
    }

    #[test]
    fn test_atom_has_no_clause() {
        let (name, clauses) = compile(&Argument(2));
        assert_eq!(Literal::from(3), name);
        assert!(clauses.is_empty());
    }

    #[test]
    fn test_one_fresh_var_per_node() {
        let (name, clauses) = compile(&Conjunction(vec![
            Argument(0),
            AcceptanceCondition::negation(Argument(1)),
        ]));
        assert_eq!(Literal::from(5), name);
        assert_eq!(2 + 3, clauses.len());
    }
}
