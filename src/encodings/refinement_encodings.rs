use super::SatEncodingContext;
use crate::{
    adf::{Interpretation, LabelType},
    sat::{clause, Clause},
};

pub(super) fn encode_larger_interpretation<T>(
    context: &SatEncodingContext<T>,
    interpretation: &Interpretation,
) -> Vec<Clause>
where
    T: LabelType,
{
    let mut clauses = Vec::with_capacity(interpretation.len() + interpretation.n_decided() + 1);
    interpretation
        .satisfied()
        .for_each(|a| clauses.push(clause![context.true_literal(a)]));
    interpretation
        .unsatisfied()
        .for_each(|a| clauses.push(clause![context.false_literal(a)]));
    interpretation
        .satisfied()
        .chain(interpretation.unsatisfied())
        .chain(interpretation.undecided())
        .for_each(|a| {
            clauses.push(clause![
                context.true_literal(a).negate(),
                context.false_literal(a).negate()
            ])
        });
    clauses.push(
        interpretation
            .undecided()
            .flat_map(|a| [context.true_literal(a), context.false_literal(a)])
            .collect(),
    );
    clauses
}

pub(super) fn encode_refine_larger<T>(
    context: &SatEncodingContext<T>,
    interpretation: &Interpretation,
) -> Vec<Clause>
where
    T: LabelType,
{
    let mut clause = Vec::with_capacity(interpretation.len() + interpretation.n_undecided());
    clause.extend(interpretation.satisfied().map(|a| context.false_literal(a)));
    clause.extend(interpretation.unsatisfied().map(|a| context.true_literal(a)));
    clause.extend(
        interpretation
            .undecided()
            .flat_map(|a| [context.true_literal(a), context.false_literal(a)]),
    );
    vec![clause]
}

pub(super) fn encode_refine_unequal<T>(
    context: &SatEncodingContext<T>,
    interpretation: &Interpretation,
) -> Vec<Clause>
where
    T: LabelType,
{
    let mut clause = Vec::with_capacity(interpretation.len() + interpretation.n_undecided());
    clause.extend(
        interpretation
            .satisfied()
            .map(|a| context.true_literal(a).negate()),
    );
    clause.extend(
        interpretation
            .unsatisfied()
            .map(|a| context.false_literal(a).negate()),
    );
    clause.extend(
        interpretation
            .undecided()
            .flat_map(|a| [context.true_literal(a), context.false_literal(a)]),
    );
    vec![clause]
}

#[cfg(test)]
mod tests {
    use crate::{
        adf::{AbstractDialecticalFramework, ArgumentSet, Interpretation},
        encodings::{SatEncoding, SatEncodingContext},
        sat::{DefaultSatSolverFactory, SatSolverState},
        solvers::SatLinkStrategy,
    };
    use std::rc::Rc;

    fn all_models(
        adf: &AbstractDialecticalFramework<&'static str>,
        encodings: &[SatEncoding],
    ) -> Vec<Interpretation> {
        let factory = Rc::new(DefaultSatSolverFactory);
        let mut ctx =
            SatEncodingContext::new(adf, Box::new(SatLinkStrategy::new(factory.clone()))).unwrap();
        let mut state = SatSolverState::new(factory);
        for e in encodings {
            state.add(e.encode(&mut ctx));
        }
        for a in 0..adf.n_arguments() {
            state.add_clause(vec![ctx.true_literal(a).negate(), ctx.false_literal(a).negate()]);
        }
        let mut models = vec![];
        while let Some(assignment) = state.witness().unwrap() {
            let model = ctx.decode(&assignment);
            state.add(SatEncoding::RefineUnequal(&model).encode(&mut ctx));
            models.push(model);
        }
        models
    }

    fn adf() -> AbstractDialecticalFramework<&'static str> {
        AbstractDialecticalFramework::new_with_argument_set(ArgumentSet::new_with_labels(&[
            "a", "b",
        ]))
    }

    #[test]
    fn test_refine_unequal_enumerates_all_interpretations() {
        let adf = adf();
        assert_eq!(9, all_models(&adf, &[]).len());
    }

    #[test]
    fn test_larger_interpretation() {
        let adf = adf();
        let start = Interpretation::builder(&adf).satisfied(&"a").unwrap().build();
        let models = all_models(&adf, &[SatEncoding::LargerInterpretation(&start)]);
        assert_eq!(2, models.len());
        for m in models {
            assert!(start.is_strict_subset_of(&m));
        }
    }

    #[test]
    fn test_larger_than_two_valued_is_unsat() {
        let adf = adf();
        let start = Interpretation::builder(&adf)
            .satisfied(&"a")
            .unwrap()
            .unsatisfied(&"b")
            .unwrap()
            .build();
        assert!(all_models(&adf, &[SatEncoding::LargerInterpretation(&start)]).is_empty());
    }

    #[test]
    fn test_refine_larger() {
        let adf = adf();
        let blocked = Interpretation::builder(&adf).satisfied(&"a").unwrap().build();
        let models = all_models(&adf, &[SatEncoding::RefineLarger(&blocked)]);
        assert_eq!(9 - 2, models.len());
        for m in models {
            assert!(!m.is_subset_of(&blocked));
        }
    }
}
