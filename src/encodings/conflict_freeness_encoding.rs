use super::{sat_encoding::compile_over_links, SatEncodingContext};
use crate::{
    adf::LabelType,
    sat::{clause, Clause},
};

pub(super) fn encode<T>(context: &mut SatEncodingContext<T>) -> Vec<Clause>
where
    T: LabelType,
{
    let mut clauses = vec![];
    for s in 0..context.adf().n_arguments() {
        let acc = context.adf().acceptance_condition_by_id(s).clone();
        let (name, acc_clauses) = compile_over_links(context, s, &acc);
        clauses.extend(acc_clauses);
        let t = context.true_literal(s);
        let f = context.false_literal(s);
        clauses.push(clause![t.negate(), name]);
        clauses.push(clause![f.negate(), name.negate()]);
        for c in context.adf().iter_children(s) {
            let p = context.link_literal(s, c);
            clauses.push(clause![t.negate(), p]);
            clauses.push(clause![f.negate(), p.negate()]);
        }
    }
    clauses
}

pub(super) fn encode_two_valued<T>(context: &SatEncodingContext<T>) -> Vec<Clause>
where
    T: LabelType,
{
    (0..context.adf().n_arguments())
        .map(|a| clause![context.true_literal(a), context.false_literal(a)])
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{
        adf::{AbstractDialecticalFramework, AcceptanceCondition, ArgumentSet, Interpretation},
        encodings::{SatEncoding, SatEncodingContext},
        sat::{DefaultSatSolverFactory, SatSolverState},
        solvers::SatLinkStrategy,
    };
    use std::rc::Rc;

    fn mutual_attack() -> AbstractDialecticalFramework<&'static str> {
        let mut adf = AbstractDialecticalFramework::new_with_argument_set(
            ArgumentSet::new_with_labels(&["a", "b"]),
        );
        let a = adf.atom(&"a").unwrap();
        let b = adf.atom(&"b").unwrap();
        adf.set_acceptance_condition(&"a", AcceptanceCondition::negation(b))
            .unwrap();
        adf.set_acceptance_condition(&"b", AcceptanceCondition::negation(a))
            .unwrap();
        adf
    }

    fn is_conflict_free(
        adf: &AbstractDialecticalFramework<&'static str>,
        interpretation: &Interpretation,
    ) -> bool {
        let factory = Rc::new(DefaultSatSolverFactory);
        let mut ctx =
            SatEncodingContext::new(adf, Box::new(SatLinkStrategy::new(factory.clone()))).unwrap();
        let mut state = SatSolverState::new(factory);
        state.add(SatEncoding::ConflictFree.encode(&mut ctx));
        interpretation
            .satisfied()
            .for_each(|a| state.add_clause(vec![ctx.true_literal(a)]));
        interpretation
            .unsatisfied()
            .for_each(|a| state.add_clause(vec![ctx.false_literal(a)]));
        state.witness().unwrap().is_some()
    }

    #[test]
    fn test_mutual_attack() {
        let adf = mutual_attack();
        let build = |a: Option<bool>, b: Option<bool>| {
            let mut builder = Interpretation::builder(&adf);
            builder = match a {
                Some(true) => builder.satisfied(&"a").unwrap(),
                Some(false) => builder.unsatisfied(&"a").unwrap(),
                None => builder,
            };
            builder = match b {
                Some(true) => builder.satisfied(&"b").unwrap(),
                Some(false) => builder.unsatisfied(&"b").unwrap(),
                None => builder,
            };
            builder.build()
        };
        assert!(is_conflict_free(&adf, &build(Some(true), Some(false))));
        assert!(is_conflict_free(&adf, &build(Some(false), Some(true))));
        assert!(is_conflict_free(&adf, &build(Some(true), None)));
        assert!(!is_conflict_free(&adf, &build(Some(true), Some(true))));
        assert!(!is_conflict_free(&adf, &build(Some(false), Some(false))));
    }

    #[test]
    fn test_self_contradicting_argument() {
        let mut adf = AbstractDialecticalFramework::new_with_argument_set(
            ArgumentSet::new_with_labels(&["a"]),
        );
        adf.set_acceptance_condition(&"a", AcceptanceCondition::Contradiction)
            .unwrap();
        let sat = Interpretation::builder(&adf).satisfied(&"a").unwrap().build();
        let unsat = Interpretation::builder(&adf).unsatisfied(&"a").unwrap().build();
        assert!(!is_conflict_free(&adf, &sat));
        assert!(is_conflict_free(&adf, &unsat));
    }

    fn two_valued_models(adf: &AbstractDialecticalFramework<&'static str>) -> Vec<Interpretation> {
        let factory = Rc::new(DefaultSatSolverFactory);
        let mut ctx =
            SatEncodingContext::new(adf, Box::new(SatLinkStrategy::new(factory.clone()))).unwrap();
        let mut state = SatSolverState::new(factory);
        state.add(SatEncoding::ConflictFree.encode(&mut ctx));
        state.add(SatEncoding::TwoValued.encode(&mut ctx));
        let mut models = vec![];
        while let Some(assignment) = state.witness().unwrap() {
            let model = ctx.decode(&assignment);
            state.add(SatEncoding::RefineUnequal(&model).encode(&mut ctx));
            models.push(model);
        }
        models
    }

    #[test]
    fn test_two_valued_mutual_attack() {
        let adf = mutual_attack();
        let models = two_valued_models(&adf);
        assert_eq!(2, models.len());
        assert!(models.iter().all(|m| m.n_undecided() == 0));
        assert!(models.iter().all(|m| m.is_satisfied(0) != m.is_satisfied(1)));
    }

    #[test]
    fn test_two_valued_self_attack() {
        let mut adf = AbstractDialecticalFramework::new_with_argument_set(
            ArgumentSet::new_with_labels(&["a"]),
        );
        adf.set_acceptance_condition(&"a", AcceptanceCondition::negation(adf.atom(&"a").unwrap()))
            .unwrap();
        assert!(two_valued_models(&adf).is_empty());
    }
}
