//! Reasoning pipelines computing the models of ADF semantics.

mod admissible_verifier;
pub use admissible_verifier::AdmissibleVerifier;

mod characteristic_operator;
pub use characteristic_operator::CharacteristicOperator;

mod complete_verifier;
pub use complete_verifier::CompleteVerifier;

mod conflict_free_generator;
pub use conflict_free_generator::ConflictFreeGenerator;

mod ground_generator;
pub use ground_generator::GroundGenerator;

mod k_bipolar_processors;
pub use k_bipolar_processors::KBipolarStateProcessor;
pub use k_bipolar_processors::PartialKBipolarInterpretationProcessor;
pub use k_bipolar_processors::RelativeKBipolarStateProcessor;

mod maximize_interpretation_processor;
pub use maximize_interpretation_processor::MaximizeInterpretationProcessor;

mod model_generator;
pub use model_generator::ModelGenerator;

mod pipeline;
pub use pipeline::Models;
pub use pipeline::Pipeline;
pub use pipeline::PipelineBuilder;

mod sat_link_strategy;
pub use sat_link_strategy::SatLinkStrategy;

mod semantics;
pub use semantics::Semantics;

mod specs;
pub use specs::CandidateGenerator;
pub use specs::InterpretationProcessor;
pub use specs::StateProcessor;
pub use specs::Verifier;

mod stable_verifier;
pub use stable_verifier::StableVerifier;
