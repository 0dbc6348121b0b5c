use super::{specs::Verifier, CharacteristicOperator};
use crate::{
    adf::{Interpretation, LabelType},
    encodings::SatEncodingContext,
    sat::SatSolverState,
};
use anyhow::Result;
use log::trace;

/// A [`Verifier`] accepting the complete interpretations, the fixpoints of the characteristic operator.
#[derive(Default)]
pub struct CompleteVerifier;

impl<T> Verifier<T> for CompleteVerifier
where
    T: LabelType,
{
    fn verify(
        &self,
        state: &SatSolverState,
        candidate: &Interpretation,
        context: &mut SatEncodingContext<T>,
    ) -> Result<bool> {
        let image = CharacteristicOperator.apply(state, context.adf(), candidate)?;
        let complete = &image == candidate;
        trace!(
            "interpretation {} is {}complete",
            candidate.display(context.adf().argument_set()),
            if complete { "" } else { "not " }
        );
        Ok(complete)
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

    fn support_loop() -> AbstractDialecticalFramework<&'static str> {
        let mut adf = AbstractDialecticalFramework::new_with_argument_set(
            ArgumentSet::new_with_labels(&["a", "b"]),
        );
        let a = adf.atom(&"a").unwrap();
        adf.set_acceptance_condition(&"a", a.clone()).unwrap();
        adf.set_acceptance_condition(&"b", AcceptanceCondition::negation(a))
            .unwrap();
        adf
    }

    fn verify(adf: &AbstractDialecticalFramework<&'static str>, candidate: &Interpretation) -> bool {
        let factory = Rc::new(DefaultSatSolverFactory);
        let mut ctx =
            SatEncodingContext::new(adf, Box::new(SatLinkStrategy::new(factory.clone()))).unwrap();
        let state = SatSolverState::new(factory);
        CompleteVerifier.verify(&state, candidate, &mut ctx).unwrap()
    }

    #[test]
    fn test_complete_interpretations() {
        let adf = support_loop();
        assert!(verify(&adf, &Interpretation::empty(&adf)));
        let i = Interpretation::builder(&adf)
            .satisfied(&"a")
            .unwrap()
            .unsatisfied(&"b")
            .unwrap()
            .build();
        assert!(verify(&adf, &i));
        let i = Interpretation::builder(&adf)
            .unsatisfied(&"a")
            .unwrap()
            .satisfied(&"b")
            .unwrap()
            .build();
        assert!(verify(&adf, &i));
    }

    #[test]
    fn test_admissible_but_not_complete() {
        let adf = support_loop();
        let i = Interpretation::builder(&adf).satisfied(&"a").unwrap().build();
        assert!(!verify(&adf, &i));
    }

    #[test]
    fn test_not_admissible() {
        let adf = support_loop();
        let i = Interpretation::builder(&adf).satisfied(&"b").unwrap().build();
        assert!(!verify(&adf, &i));
    }
}
