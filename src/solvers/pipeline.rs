use super::{
    specs::{CandidateGenerator, InterpretationProcessor, StateProcessor, Verifier},
    SatLinkStrategy,
};
use crate::{
    adf::{AbstractDialecticalFramework, Interpretation, LabelType},
    encodings::SatEncodingContext,
    sat::{SatSolverFactory, SatSolverState},
};
use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::rc::Rc;

/// A builder for [`Pipeline`] objects.
///
/// ```
/// # use crustadf::adf::{AbstractDialecticalFramework, ArgumentSet};
/// # use crustadf::sat::DefaultSatSolverFactory;
/// # use crustadf::solvers::{ConflictFreeGenerator, PipelineBuilder};
/// # use std::rc::Rc;
/// let adf = AbstractDialecticalFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a"]));
/// let mut pipeline = PipelineBuilder::new()
///     .set_candidate_generator(Box::new(ConflictFreeGenerator::default()))
///     .build(&adf, Rc::new(DefaultSatSolverFactory))
///     .unwrap();
/// assert!(pipeline.next_model().unwrap().is_some());
/// ```
pub struct PipelineBuilder<T>
where
    T: LabelType,
{
    state_processors: Vec<Box<dyn StateProcessor<T>>>,
    interpretation_processors: Vec<(Box<dyn InterpretationProcessor<T>>, bool)>,
    candidate_generator: Option<Box<dyn CandidateGenerator<T>>>,
    verifiers: Vec<Box<dyn Verifier<T>>>,
}

impl<T> Default for PipelineBuilder<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PipelineBuilder<T>
where
    T: LabelType,
{
    /// Builds a new, empty builder.
    pub fn new() -> Self {
        Self {
            state_processors: vec![],
            interpretation_processors: vec![],
            candidate_generator: None,
            verifiers: vec![],
        }
    }

    /// Adds a state processor, run once when the pipeline is built.
    pub fn add_state_processor(mut self, processor: Box<dyn StateProcessor<T>>) -> Self {
        self.state_processors.push(processor);
        self
    }

    /// Adds an interpretation processor.
    ///
    /// If `isolated` is `true`, the processor works on a fresh isolated fork of the shared state for each interpretation,
    /// and only the constraints it commits in its update step remain.
    pub fn add_interpretation_processor(
        mut self,
        processor: Box<dyn InterpretationProcessor<T>>,
        isolated: bool,
    ) -> Self {
        self.interpretation_processors.push((processor, isolated));
        self
    }

    /// Sets the candidate generator, replacing the previous one if any.
    pub fn set_candidate_generator(mut self, generator: Box<dyn CandidateGenerator<T>>) -> Self {
        self.candidate_generator = Some(generator);
        self
    }

    /// Adds a verifier the processed interpretations must pass to be returned.
    pub fn add_verifier(mut self, verifier: Box<dyn Verifier<T>>) -> Self {
        self.verifiers.push(verifier);
        self
    }

    /// Builds the pipeline for the given framework.
    ///
    /// The links of the framework are computed, the candidate generator is initialized and the state processors are run, in this order.
    /// An error is returned if no candidate generator was set.
    pub fn build<'a>(
        self,
        adf: &'a AbstractDialecticalFramework<T>,
        solver_factory: Rc<dyn SatSolverFactory>,
    ) -> Result<Pipeline<'a, T>> {
        let generator = self
            .candidate_generator
            .ok_or_else(|| anyhow!("cannot build a pipeline without a candidate generator"))?;
        let mut context = SatEncodingContext::new(
            adf,
            Box::new(SatLinkStrategy::new(Rc::clone(&solver_factory))),
        )
        .context("while building a pipeline")?;
        info!(
            "computed {} links ({} dependent)",
            context.links().len(),
            context.links().n_dependent()
        );
        let mut shared = SatSolverState::new(solver_factory);
        generator.initialize(&mut shared, &mut context)?;
        for processor in self.state_processors.iter() {
            processor.process(&mut shared, &mut context)?;
        }
        info!("the shared state starts with {} clauses", shared.n_clauses());
        Ok(Pipeline {
            context,
            shared,
            candidate_generator: generator,
            interpretation_processors: self.interpretation_processors,
            verifiers: self.verifiers,
            n_candidates: 0,
            n_rejected: 0,
        })
    }
}

/// A sequence of reasoning steps computing the models of some semantics.
///
/// Candidates are drawn from the shared state by the candidate generator.
/// Each of them goes through the interpretation processors, in the order they were added, and then through the verifiers.
/// The interpretations accepted by all the verifiers are the models of the pipeline.
pub struct Pipeline<'a, T>
where
    T: LabelType,
{
    context: SatEncodingContext<'a, T>,
    shared: SatSolverState,
    candidate_generator: Box<dyn CandidateGenerator<T>>,
    interpretation_processors: Vec<(Box<dyn InterpretationProcessor<T>>, bool)>,
    verifiers: Vec<Box<dyn Verifier<T>>>,
    n_candidates: usize,
    n_rejected: usize,
}

impl<'a, T> Pipeline<'a, T>
where
    T: LabelType,
{
    /// Runs the interpretation processors on an interpretation.
    ///
    /// Isolated processors work on a fork of the shared state which is dropped after processing.
    /// The update step of each processor is always made on the shared state.
    pub fn run(&mut self, interpretation: Interpretation) -> Result<Interpretation> {
        let mut current = interpretation;
        for (processor, isolated) in self.interpretation_processors.iter_mut() {
            current = if *isolated {
                let mut fork = self.shared.fork_isolated();
                processor.process(&mut fork, current, &mut self.context)?
            } else {
                processor.process(&mut self.shared, current, &mut self.context)?
            };
            processor.update_state(&mut self.shared, &current, &mut self.context)?;
        }
        Ok(current)
    }

    /// Computes the next model, or `None` if all of them have been computed.
    pub fn next_model(&mut self) -> Result<Option<Interpretation>> {
        loop {
            let candidate = match self
                .candidate_generator
                .generate(&mut self.shared, &mut self.context)?
            {
                Some(c) => c,
                None => {
                    info!(
                        "no more models ({} candidates, {} rejected)",
                        self.n_candidates, self.n_rejected
                    );
                    return Ok(None);
                }
            };
            self.n_candidates += 1;
            let processed = self.run(candidate)?;
            if self.is_verified(&processed)? {
                debug!(
                    "found model {}",
                    processed.display(self.context.adf().argument_set())
                );
                return Ok(Some(processed));
            }
            self.n_rejected += 1;
        }
    }

    fn is_verified(&mut self, interpretation: &Interpretation) -> Result<bool> {
        for verifier in self.verifiers.iter() {
            if !verifier.verify(&self.shared, interpretation, &mut self.context)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns an iterator over the models not computed yet.
    pub fn models(&mut self) -> Models<'_, 'a, T> {
        Models { pipeline: self }
    }

    /// Returns the encoding context of this pipeline.
    pub fn context(&self) -> &SatEncodingContext<'a, T> {
        &self.context
    }

    /// Returns the shared state of this pipeline.
    pub fn shared_state(&self) -> &SatSolverState {
        &self.shared
    }

    /// Returns the number of candidates produced so far.
    pub fn n_candidates(&self) -> usize {
        self.n_candidates
    }
}

/// An iterator over the models of a [`Pipeline`].
///
/// Errors are yielded as items; the iteration goes on after an error only if the caller keeps asking.
pub struct Models<'p, 'a, T>
where
    T: LabelType,
{
    pipeline: &'p mut Pipeline<'a, T>,
}

impl<T> Iterator for Models<'_, '_, T>
where
    T: LabelType,
{
    type Item = Result<Interpretation>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pipeline.next_model().transpose()
    }
}
