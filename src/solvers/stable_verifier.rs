use super::{specs::Verifier, CharacteristicOperator};
use crate::{
    adf::{Interpretation, LabelType},
    encodings::SatEncodingContext,
    sat::SatSolverState,
};
use anyhow::Result;
use log::trace;
use std::collections::BTreeSet;

/// A [`Verifier`] accepting the stable models among two-valued models.
///
/// A model is stable if its satisfied arguments are exactly the ones satisfied by the grounded interpretation of its reduct,
/// the framework restricted to these arguments in which the unsatisfied arguments are replaced by the contradiction.
/// The grounded interpretation of the reduct is computed as a fixpoint of the characteristic operator in which the unsatisfied arguments are frozen.
///
/// Candidates with undecided arguments are rejected.
#[derive(Default)]
pub struct StableVerifier;

impl<T> Verifier<T> for StableVerifier
where
    T: LabelType,
{
    fn verify(
        &self,
        state: &SatSolverState,
        candidate: &Interpretation,
        context: &mut SatEncodingContext<T>,
    ) -> Result<bool> {
        if candidate.n_undecided() > 0 {
            return Ok(false);
        }
        let unsatisfied = candidate.unsatisfied().collect::<BTreeSet<usize>>();
        let undecided = candidate.satisfied().collect::<BTreeSet<usize>>();
        let start = Interpretation::from_sets(BTreeSet::new(), unsatisfied.clone(), undecided);
        let grounded = CharacteristicOperator.fixpoint_from(
            state,
            context.adf(),
            start,
            &|a| unsatisfied.contains(&a),
        )?;
        let stable = grounded.satisfied().eq(candidate.satisfied());
        trace!(
            "model {} is {}stable",
            candidate.display(context.adf().argument_set()),
            if stable { "" } else { "not " }
        );
        Ok(stable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adf::{AbstractDialecticalFramework, AcceptanceCondition, ArgumentSet},
        sat::DefaultSatSolverFactory,
        solvers::SatLinkStrategy,
    };
    use std::rc::Rc;

    fn verify(adf: &AbstractDialecticalFramework<&'static str>, candidate: &Interpretation) -> bool {
        let factory = Rc::new(DefaultSatSolverFactory);
        let mut ctx =
            SatEncodingContext::new(adf, Box::new(SatLinkStrategy::new(factory.clone()))).unwrap();
        let state = SatSolverState::new(factory);
        StableVerifier.verify(&state, candidate, &mut ctx).unwrap()
    }

    fn support_loop() -> AbstractDialecticalFramework<&'static str> {
        let mut adf = AbstractDialecticalFramework::new_with_argument_set(
            ArgumentSet::new_with_labels(&["a", "b"]),
        );
        let a = adf.atom(&"a").unwrap();
        let b = adf.atom(&"b").unwrap();
        adf.set_acceptance_condition(&"a", b).unwrap();
        adf.set_acceptance_condition(&"b", a).unwrap();
        adf
    }

    #[test]
    fn test_unsupported_model_is_not_stable() {
        let adf = support_loop();
        let i = Interpretation::builder(&adf)
            .satisfied(&"a")
            .unwrap()
            .satisfied(&"b")
            .unwrap()
            .build();
        assert!(!verify(&adf, &i));
        let i = Interpretation::builder(&adf)
            .unsatisfied(&"a")
            .unwrap()
            .unsatisfied(&"b")
            .unwrap()
            .build();
        assert!(verify(&adf, &i));
    }

    #[test]
    fn test_mutual_attack_models_are_stable() {
        let mut adf = AbstractDialecticalFramework::new_with_argument_set(
            ArgumentSet::new_with_labels(&["a", "b"]),
        );
        let a = adf.atom(&"a").unwrap();
        let b = adf.atom(&"b").unwrap();
        adf.set_acceptance_condition(&"a", AcceptanceCondition::negation(b))
            .unwrap();
        adf.set_acceptance_condition(&"b", AcceptanceCondition::negation(a))
            .unwrap();
        let i = Interpretation::builder(&adf)
            .satisfied(&"a")
            .unwrap()
            .unsatisfied(&"b")
            .unwrap()
            .build();
        assert!(verify(&adf, &i));
    }

    #[test]
    fn test_partial_candidate_is_rejected() {
        let adf = support_loop();
        let i = Interpretation::builder(&adf).unsatisfied(&"a").unwrap().build();
        assert!(!verify(&adf, &i));
    }
}
