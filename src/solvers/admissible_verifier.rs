use super::specs::Verifier;
use crate::{
    adf::{Interpretation, LabelType},
    encodings::{SatEncoding, SatEncodingContext},
    sat::SatSolverState,
};
use anyhow::Result;
use log::trace;

/// A [`Verifier`] accepting the admissible interpretations.
///
/// An interpretation is admissible if each of its satisfied (resp. unsatisfied) arguments has an acceptance condition
/// that holds (resp. does not hold) for every two-valued completion of the interpretation.
/// The check is made on a brand new state sharing the solver backend of the one it is given;
/// it allocates no variable in the encoding context.
#[derive(Default)]
pub struct AdmissibleVerifier;

impl<T> Verifier<T> for AdmissibleVerifier
where
    T: LabelType,
{
    fn verify(
        &self,
        state: &SatSolverState,
        candidate: &Interpretation,
        context: &mut SatEncodingContext<T>,
    ) -> Result<bool> {
        let mut check = state.new_root();
        check.add(SatEncoding::AdmissibilityViolation(candidate).encode(context));
        let admissible = check.witness()?.is_none();
        trace!(
            "interpretation {} is {}admissible",
            candidate.display(context.adf().argument_set()),
            if admissible { "" } else { "not " }
        );
        Ok(admissible)
    }
}
