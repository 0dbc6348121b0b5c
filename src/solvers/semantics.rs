use super::{
    AdmissibleVerifier, CompleteVerifier, ConflictFreeGenerator, GroundGenerator,
    KBipolarStateProcessor, MaximizeInterpretationProcessor, ModelGenerator, Pipeline,
    PipelineBuilder, StableVerifier, Verifier,
};
use crate::{
    adf::{AbstractDialecticalFramework, LabelType},
    sat::SatSolverFactory,
};
use anyhow::{anyhow, Result};
use std::rc::Rc;
use strum_macros::EnumIter;

/// The semantics that can be computed by a preset [`Pipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Semantics {
    /// The conflict-free semantics
    ConflictFree,
    /// The naive semantics
    Naive,
    /// The admissible semantics
    Admissible,
    /// The preferred semantics
    Preferred,
    /// The complete semantics
    Complete,
    /// The two-valued model semantics
    Model,
    /// The stable semantics
    Stable,
    /// The grounded semantics
    Ground,
}

impl Semantics {
    /// Returns a short string representing the semantics.
    pub fn to_short_str(&self) -> &str {
        match self {
            Semantics::ConflictFree => "cf",
            Semantics::Naive => "nai",
            Semantics::Admissible => "adm",
            Semantics::Preferred => "prf",
            Semantics::Complete => "com",
            Semantics::Model => "mod",
            Semantics::Stable => "stb",
            Semantics::Ground => "grd",
        }
    }

    /// Builds a pipeline computing the models of this semantics for the given framework.
    pub fn pipeline<'a, T>(
        &self,
        adf: &'a AbstractDialecticalFramework<T>,
        solver_factory: Rc<dyn SatSolverFactory>,
    ) -> Result<Pipeline<'a, T>>
    where
        T: LabelType + 'static,
    {
        let builder = PipelineBuilder::new();
        let builder = match self {
            Semantics::ConflictFree => {
                builder.set_candidate_generator(Box::new(ConflictFreeGenerator::default()))
            }
            Semantics::Naive => builder
                .set_candidate_generator(Box::new(ConflictFreeGenerator::default()))
                .add_interpretation_processor(
                    Box::new(MaximizeInterpretationProcessor::new(None)),
                    true,
                ),
            Semantics::Admissible => builder
                .set_candidate_generator(Box::new(ConflictFreeGenerator::default()))
                .add_state_processor(Box::new(KBipolarStateProcessor))
                .add_verifier(Box::new(AdmissibleVerifier)),
            Semantics::Preferred => {
                let verifier: Box<dyn Verifier<T>> = Box::new(AdmissibleVerifier);
                builder
                    .set_candidate_generator(Box::new(ConflictFreeGenerator::default()))
                    .add_state_processor(Box::new(KBipolarStateProcessor))
                    .add_interpretation_processor(
                        Box::new(MaximizeInterpretationProcessor::new(Some(verifier))),
                        true,
                    )
            }
            Semantics::Complete => builder
                .set_candidate_generator(Box::new(ConflictFreeGenerator::default()))
                .add_state_processor(Box::new(KBipolarStateProcessor))
                .add_verifier(Box::new(CompleteVerifier)),
            Semantics::Model => builder.set_candidate_generator(Box::new(ModelGenerator::default())),
            Semantics::Stable => builder
                .set_candidate_generator(Box::new(ModelGenerator::default()))
                .add_verifier(Box::new(StableVerifier)),
            Semantics::Ground => {
                builder.set_candidate_generator(Box::new(GroundGenerator::default()))
            }
        };
        builder.build(adf, solver_factory)
    }
}

impl TryFrom<&str> for Semantics {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "cf" => Ok(Semantics::ConflictFree),
            "nai" => Ok(Semantics::Naive),
            "adm" => Ok(Semantics::Admissible),
            "prf" => Ok(Semantics::Preferred),
            "com" => Ok(Semantics::Complete),
            "mod" => Ok(Semantics::Model),
            "stb" => Ok(Semantics::Stable),
            "grd" => Ok(Semantics::Ground),
            _ => Err(anyhow!(r#"undefined semantics "{}""#, value)),
        }
    }
}
