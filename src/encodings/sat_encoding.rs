use super::{
    admissibility_encoding, bipolar_encodings, conflict_freeness_encoding, refinement_encodings,
    SatEncodingContext, TseitinTransformer,
};
use crate::{
    adf::{AcceptanceCondition, Interpretation, LabelType},
    sat::{Clause, Literal},
};

/// The encodings of ADF constraints into clauses.
///
/// The variables `t_a`, `f_a` and `p_{r,s}` used by the encodings are the ones provided by the [`SatEncodingContext`].
/// Encodings apply to the framework that is active in the context, which may be a reduct.
#[derive(Debug, Clone, Copy)]
pub enum SatEncoding<'i> {
    /// No argument is both satisfied and unsatisfied, and the acceptance conditions hold (or do not) for some choice of the link values.
    ConflictFree,
    /// Link values are constrained by the attacking and supporting links.
    Bipolar,
    /// For each argument, the acceptance condition must hold (or not) for every completion of its dependent parents undecided in the interpretation.
    KBipolar(&'i Interpretation),
    /// The models are the interpretations strictly more informative than the given one and agreeing with it on its decided arguments.
    LargerInterpretation(&'i Interpretation),
    /// Blocks the models that are less or equally informative than the interpretation while agreeing with it.
    RefineLarger(&'i Interpretation),
    /// Blocks the models that decode to the interpretation.
    RefineUnequal(&'i Interpretation),
    /// Every argument is either satisfied or unsatisfied.
    TwoValued,
    /// Satisfiable iff the interpretation is not admissible.
    ///
    /// The variables are numbered as in a [`CompletionEncoding`](super::CompletionEncoding), so the clauses must be solved on their own.
    AdmissibilityViolation(&'i Interpretation),
}

impl SatEncoding<'_> {
    /// Builds the clauses of this encoding.
    ///
    /// Some encodings allocate new variables in the context.
    pub fn encode<T>(&self, context: &mut SatEncodingContext<T>) -> Vec<Clause>
    where
        T: LabelType,
    {
        match self {
            SatEncoding::ConflictFree => conflict_freeness_encoding::encode(context),
            SatEncoding::TwoValued => conflict_freeness_encoding::encode_two_valued(context),
            SatEncoding::Bipolar => bipolar_encodings::encode_bipolarity(context),
            SatEncoding::KBipolar(i) => bipolar_encodings::encode_k_bipolarity(context, i),
            SatEncoding::LargerInterpretation(i) => {
                refinement_encodings::encode_larger_interpretation(context, i)
            }
            SatEncoding::RefineLarger(i) => refinement_encodings::encode_refine_larger(context, i),
            SatEncoding::RefineUnequal(i) => {
                refinement_encodings::encode_refine_unequal(context, i)
            }
            SatEncoding::AdmissibilityViolation(i) => admissibility_encoding::encode(context, i),
        }
    }
}

/// Compiles an acceptance condition of the given argument, mapping its atoms to the variables of the links to this argument.
pub(super) fn compile_over_links<T>(
    context: &mut SatEncodingContext<T>,
    child: usize,
    acceptance_condition: &AcceptanceCondition,
) -> (Literal, Vec<Clause>)
where
    T: LabelType,
{
    let link_literals = context.parent_link_literals(child);
    let mapping = |r: usize| link_literals[&r];
    TseitinTransformer::new(&mapping).compile(acceptance_condition, &mut || context.new_var())
}
