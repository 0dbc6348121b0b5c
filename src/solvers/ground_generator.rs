use super::{specs::CandidateGenerator, CharacteristicOperator};
use crate::{
    adf::{Interpretation, LabelType},
    encodings::{SatEncoding, SatEncodingContext},
    sat::SatSolverState,
};
use anyhow::Result;
use log::debug;

/// A [`CandidateGenerator`] producing the grounded interpretation of the framework, and nothing else.
#[derive(Default)]
pub struct GroundGenerator {
    exhausted: bool,
}

impl<T> CandidateGenerator<T> for GroundGenerator
where
    T: LabelType,
{
    fn initialize(
        &self,
        state: &mut SatSolverState,
        context: &mut SatEncodingContext<T>,
    ) -> Result<()> {
        state.add(SatEncoding::ConflictFree.encode(context));
        Ok(())
    }

    fn generate(
        &mut self,
        state: &mut SatSolverState,
        context: &mut SatEncodingContext<T>,
    ) -> Result<Option<Interpretation>> {
        if self.exhausted {
            return Ok(None);
        }
        self.exhausted = true;
        let grounded = CharacteristicOperator.grounded(state, context.adf())?;
        debug!(
            "computed the grounded interpretation {}",
            grounded.display(context.adf().argument_set())
        );
        Ok(Some(grounded))
    }
}
