use super::specs::{InterpretationProcessor, Verifier};
use crate::{
    adf::{Interpretation, LabelType},
    encodings::{SatEncoding, SatEncodingContext},
    sat::SatSolverState,
};
use anyhow::Result;
use log::debug;

/// An [`InterpretationProcessor`] computing a maximally informative interpretation above the one it is given.
///
/// The search repeatedly asks the state for an interpretation strictly more informative than the current one.
/// If a verifier is set, only the interpretations it accepts replace the current one; the rejected ones are blocked and the search goes on.
/// The result is maximal among the accepted interpretations reachable from the state the processor is given.
///
/// Once an interpretation has been processed, [`update_state`](InterpretationProcessor::update_state) blocks the interpretations
/// it subsumes in the shared state, so that the next candidates lead to other maximal interpretations.
pub struct MaximizeInterpretationProcessor<T>
where
    T: LabelType,
{
    verifier: Option<Box<dyn Verifier<T>>>,
    n_iterations: usize,
}

impl<T> MaximizeInterpretationProcessor<T>
where
    T: LabelType,
{
    /// Builds a new processor, with an optional verifier filtering the intermediate interpretations.
    pub fn new(verifier: Option<Box<dyn Verifier<T>>>) -> Self {
        Self {
            verifier,
            n_iterations: 0,
        }
    }

    /// Returns the number of solver calls made by this processor so far.
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    fn accepts(
        &self,
        state: &SatSolverState,
        candidate: &Interpretation,
        context: &mut SatEncodingContext<T>,
    ) -> Result<bool> {
        match &self.verifier {
            Some(v) => v.verify(state, candidate, context),
            None => Ok(true),
        }
    }
}

impl<T> InterpretationProcessor<T> for MaximizeInterpretationProcessor<T>
where
    T: LabelType,
{
    fn process(
        &mut self,
        state: &mut SatSolverState,
        interpretation: Interpretation,
        context: &mut SatEncodingContext<T>,
    ) -> Result<Interpretation> {
        let mut maximal = interpretation;
        state.add(SatEncoding::LargerInterpretation(&maximal).encode(context));
        let mut n_rejected = 0;
        loop {
            self.n_iterations += 1;
            let larger = match state.witness()? {
                Some(assignment) => context.decode(&assignment),
                None => break,
            };
            if self.accepts(state, &larger, context)? {
                maximal = larger;
                state.add(SatEncoding::LargerInterpretation(&maximal).encode(context));
            } else {
                n_rejected += 1;
                state.add(SatEncoding::RefineUnequal(&larger).encode(context));
            }
        }
        debug!(
            "maximized an interpretation up to {} decided arguments ({} candidates rejected)",
            maximal.n_decided(),
            n_rejected
        );
        Ok(maximal)
    }

    fn update_state(
        &mut self,
        state: &mut SatSolverState,
        processed: &Interpretation,
        context: &mut SatEncodingContext<T>,
    ) -> Result<()> {
        state.add(SatEncoding::RefineLarger(processed).encode(context));
        Ok(())
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

    struct RejectAll;

    impl<T> Verifier<T> for RejectAll
    where
        T: LabelType,
    {
        fn verify(
            &self,
            _state: &SatSolverState,
            _candidate: &Interpretation,
            _context: &mut SatEncodingContext<T>,
        ) -> Result<bool> {
            Ok(false)
        }
    }

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

    fn context<'a>(
        adf: &'a AbstractDialecticalFramework<&'static str>,
    ) -> SatEncodingContext<'a, &'static str> {
        SatEncodingContext::new(
            adf,
            Box::new(SatLinkStrategy::new(Rc::new(DefaultSatSolverFactory))),
        )
        .unwrap()
    }

    fn new_state() -> SatSolverState {
        SatSolverState::new(Rc::new(DefaultSatSolverFactory))
    }

    #[test]
    fn test_maximize_without_verifier() {
        let adf = mutual_attack();
        let mut ctx = context(&adf);
        let mut state = new_state();
        let start = Interpretation::empty(&adf);
        let mut processor = MaximizeInterpretationProcessor::new(None);
        let result = processor
            .process(&mut state, start.clone(), &mut ctx)
            .unwrap();
        assert_eq!(0, result.n_undecided());
        assert!(start.is_subset_of(&result));
        assert!(processor.n_iterations() >= 2);
    }

    #[test]
    fn test_maximize_keeps_decided_arguments() {
        let adf = mutual_attack();
        let mut ctx = context(&adf);
        let mut state = new_state();
        let start = Interpretation::builder(&adf)
            .unsatisfied(&"b")
            .unwrap()
            .build();
        let result = MaximizeInterpretationProcessor::new(None)
            .process(&mut state, start.clone(), &mut ctx)
            .unwrap();
        assert!(start.is_subset_of(&result));
        assert!(result.is_unsatisfied(1));
        assert!(result.is_decided(0));
    }

    #[test]
    fn test_maximize_with_rejecting_verifier() {
        let adf = mutual_attack();
        let mut ctx = context(&adf);
        let mut state = new_state();
        let start = Interpretation::empty(&adf);
        let verifier: Box<dyn Verifier<&'static str>> = Box::new(RejectAll);
        let mut processor = MaximizeInterpretationProcessor::new(Some(verifier));
        let result = processor
            .process(&mut state, start.clone(), &mut ctx)
            .unwrap();
        assert_eq!(start, result);
        assert_eq!(9, processor.n_iterations());
    }

    #[test]
    fn test_rejecting_verifier_explores_each_interpretation_once() {
        let adf = AbstractDialecticalFramework::new_with_argument_set(
            ArgumentSet::new_with_labels(&["a", "b", "c"]),
        );
        let mut ctx = context(&adf);
        let mut state = new_state();
        let verifier: Box<dyn Verifier<&'static str>> = Box::new(RejectAll);
        let mut processor = MaximizeInterpretationProcessor::new(Some(verifier));
        processor
            .process(&mut state, Interpretation::empty(&adf), &mut ctx)
            .unwrap();
        assert_eq!(3usize.pow(3), processor.n_iterations());
    }

    #[test]
    fn test_maximize_is_reproducible() {
        let adf = mutual_attack();
        let mut ctx = context(&adf);
        let root = new_state();
        let start = Interpretation::empty(&adf);
        let mut first_fork = root.fork_isolated();
        let first = MaximizeInterpretationProcessor::new(None)
            .process(&mut first_fork, start.clone(), &mut ctx)
            .unwrap();
        let mut second_fork = root.fork_isolated();
        let second = MaximizeInterpretationProcessor::new(None)
            .process(&mut second_fork, start, &mut ctx)
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(0, root.n_clauses());
    }

    #[test]
    fn test_update_state_blocks_subsumed_interpretations() {
        let adf = mutual_attack();
        let mut ctx = context(&adf);
        let mut state = new_state();
        let mut processor = MaximizeInterpretationProcessor::new(None);
        let processed = Interpretation::builder(&adf)
            .satisfied(&"a")
            .unwrap()
            .unsatisfied(&"b")
            .unwrap()
            .build();
        processor
            .update_state(&mut state, &processed, &mut ctx)
            .unwrap();
        assert_eq!(1, state.n_clauses());
        let model = state.witness().unwrap().unwrap();
        assert!(model.is_true(ctx.false_literal(0)) || model.is_true(ctx.true_literal(1)));
    }
}
