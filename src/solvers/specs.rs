use crate::{
    adf::{Interpretation, LabelType},
    encodings::SatEncodingContext,
    sat::SatSolverState,
};
use anyhow::Result;

/// A trait for processors installing structural constraints into the shared state.
///
/// State processors are run once, when a pipeline is built.
pub trait StateProcessor<T>
where
    T: LabelType,
{
    /// Adds the constraints handled by this processor to the state.
    fn process(
        &self,
        state: &mut SatSolverState,
        context: &mut SatEncodingContext<T>,
    ) -> Result<()>;
}

/// A trait for processors transforming interpretations.
///
/// Processing is made of two steps.
/// First, [`process`](Self::process) transforms the interpretation; it is given either the shared state or an isolated fork of it,
/// depending on the pipeline configuration.
/// Then, [`update_state`](Self::update_state) is called on the shared state with the result of the first step.
/// This second step is the only place where permanent constraints may be added.
pub trait InterpretationProcessor<T>
where
    T: LabelType,
{
    /// Transforms an interpretation.
    fn process(
        &mut self,
        state: &mut SatSolverState,
        interpretation: Interpretation,
        context: &mut SatEncodingContext<T>,
    ) -> Result<Interpretation>;

    /// Commits the constraints learned from the processed interpretation into the shared state.
    fn update_state(
        &mut self,
        state: &mut SatSolverState,
        processed: &Interpretation,
        context: &mut SatEncodingContext<T>,
    ) -> Result<()>;
}

/// A trait for objects checking whether an interpretation fulfills some property.
pub trait Verifier<T>
where
    T: LabelType,
{
    /// Returns `true` iff the candidate fulfills the property checked by this verifier.
    ///
    /// The state is the one the candidate was computed from; verifiers must not alter it.
    fn verify(
        &self,
        state: &SatSolverState,
        candidate: &Interpretation,
        context: &mut SatEncodingContext<T>,
    ) -> Result<bool>;
}

/// A trait for objects producing candidate interpretations from the shared state.
pub trait CandidateGenerator<T>
where
    T: LabelType,
{
    /// Installs the constraints the candidates must satisfy.
    fn initialize(
        &self,
        state: &mut SatSolverState,
        context: &mut SatEncodingContext<T>,
    ) -> Result<()>;

    /// Produces a new candidate, or `None` if there is no more candidate.
    fn generate(
        &mut self,
        state: &mut SatSolverState,
        context: &mut SatEncodingContext<T>,
    ) -> Result<Option<Interpretation>>;
}
