use super::specs::CandidateGenerator;
use crate::{
    adf::{Interpretation, LabelType},
    encodings::{SatEncoding, SatEncodingContext},
    sat::SatSolverState,
};
use anyhow::Result;
use log::debug;

/// A [`CandidateGenerator`] producing the conflict-free interpretations of the framework.
///
/// Each candidate is blocked in the shared state as soon as it is produced, so that a candidate is never produced twice.
#[derive(Default)]
pub struct ConflictFreeGenerator {
    n_generated: usize,
}

impl ConflictFreeGenerator {
    /// Returns the number of candidates produced so far.
    pub fn n_generated(&self) -> usize {
        self.n_generated
    }
}

impl<T> CandidateGenerator<T> for ConflictFreeGenerator
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
        let candidate = match state.witness()? {
            Some(assignment) => context.decode(&assignment),
            None => {
                debug!("no more candidates after {} ones", self.n_generated);
                return Ok(None);
            }
        };
        state.add(SatEncoding::RefineUnequal(&candidate).encode(context));
        self.n_generated += 1;
        Ok(Some(candidate))
    }
}
