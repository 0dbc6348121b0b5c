use super::specs::CandidateGenerator;
use crate::{
    adf::{Interpretation, LabelType},
    encodings::{SatEncoding, SatEncodingContext},
    sat::SatSolverState,
};
use anyhow::Result;
use log::debug;

/// A [`CandidateGenerator`] producing the two-valued models of the framework.
///
/// A two-valued model satisfies exactly the arguments whose acceptance condition holds under the model.
/// Like the conflict-free generator, each candidate is blocked in the shared state as soon as it is produced.
#[derive(Default)]
pub struct ModelGenerator {
    n_generated: usize,
}

impl ModelGenerator {
    /// Returns the number of models produced so far.
    pub fn n_generated(&self) -> usize {
        self.n_generated
    }
}

impl<T> CandidateGenerator<T> for ModelGenerator
where
    T: LabelType,
{
    fn initialize(
        &self,
        state: &mut SatSolverState,
        context: &mut SatEncodingContext<T>,
    ) -> Result<()> {
        state.add(SatEncoding::ConflictFree.encode(context));
        state.add(SatEncoding::TwoValued.encode(context));
        Ok(())
    }

    fn generate(
        &mut self,
        state: &mut SatSolverState,
        context: &mut SatEncodingContext<T>,
    ) -> Result<Option<Interpretation>> {
        let model = match state.witness()? {
            Some(assignment) => context.decode(&assignment),
            None => {
                debug!("no more two-valued models after {} ones", self.n_generated);
                return Ok(None);
            }
        };
        state.add(SatEncoding::RefineUnequal(&model).encode(context));
        self.n_generated += 1;
        Ok(Some(model))
    }
}
