use super::specs::{InterpretationProcessor, StateProcessor};
use crate::{
    adf::{Interpretation, LabelType},
    encodings::{SatEncoding, SatEncodingContext},
    sat::SatSolverState,
};
use anyhow::{anyhow, Result};
use log::debug;

/// A [`StateProcessor`] installing the bipolarity constraints, and the k-bipolarity constraints for the dependent links if any.
///
/// With these constraints, the satisfied (resp. unsatisfied) arguments of the models are the ones whose acceptance condition
/// holds (resp. does not hold) for every completion of the model.
#[derive(Default)]
pub struct KBipolarStateProcessor;

impl<T> StateProcessor<T> for KBipolarStateProcessor
where
    T: LabelType,
{
    fn process(
        &self,
        state: &mut SatSolverState,
        context: &mut SatEncodingContext<T>,
    ) -> Result<()> {
        state.add(SatEncoding::Bipolar.encode(context));
        if !context.links().is_bipolar() {
            debug!(
                "the framework has {} dependent links; adding k-bipolar constraints",
                context.links().n_dependent()
            );
            let empty = Interpretation::empty(context.adf());
            state.add(SatEncoding::KBipolar(&empty).encode(context));
        }
        Ok(())
    }
}

/// An [`InterpretationProcessor`] adding the bipolarity and k-bipolarity constraints for the reduct of the framework by the interpretation.
///
/// Along with the conflict-freeness constraints, the models extending the interpretation are then exactly its admissible extensions.
/// The constraints do not hold for the interpretations which do not extend the processed one, so this processor is meant to run on isolated states.
///
/// The interpretation is left unchanged, and nothing is committed to the shared state.
#[derive(Default)]
pub struct PartialKBipolarInterpretationProcessor;

impl<T> InterpretationProcessor<T> for PartialKBipolarInterpretationProcessor
where
    T: LabelType,
{
    fn process(
        &mut self,
        state: &mut SatSolverState,
        interpretation: Interpretation,
        context: &mut SatEncodingContext<T>,
    ) -> Result<Interpretation> {
        context.with_reduct(&interpretation, |ctx| {
            state.add(SatEncoding::Bipolar.encode(ctx));
            state.add(SatEncoding::KBipolar(&interpretation).encode(ctx));
            Ok(())
        })?;
        Ok(interpretation)
    }

    fn update_state(
        &mut self,
        _state: &mut SatSolverState,
        _processed: &Interpretation,
        _context: &mut SatEncodingContext<T>,
    ) -> Result<()> {
        Ok(())
    }
}

/// A [`StateProcessor`] for frameworks that become bipolar once `l` arguments are fixed, with at most `k` dependent links each.
///
/// This processor is not implemented yet: it returns an error whenever it is run.
pub struct RelativeKBipolarStateProcessor {
    l: usize,
    k: usize,
}

impl RelativeKBipolarStateProcessor {
    /// Builds a new processor given its parameters.
    pub fn new(l: usize, k: usize) -> Self {
        Self { l, k }
    }
}

impl<T> StateProcessor<T> for RelativeKBipolarStateProcessor
where
    T: LabelType,
{
    fn process(
        &self,
        _state: &mut SatSolverState,
        _context: &mut SatEncodingContext<T>,
    ) -> Result<()> {
        Err(anyhow!(
            "the relative k-bipolar state processor (l={}, k={}) is not implemented",
            self.l,
            self.k
        ))
    }
}
