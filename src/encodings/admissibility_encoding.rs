use super::{CompletionEncoding, SatEncodingContext};
use crate::{
    adf::{Interpretation, LabelType},
    sat::Clause,
};

pub(super) fn encode<T>(
    context: &SatEncodingContext<T>,
    interpretation: &Interpretation,
) -> Vec<Clause>
where
    T: LabelType,
{
    let completions = CompletionEncoding::new(context.adf(), interpretation);
    let violation = interpretation
        .satisfied()
        .map(|a| completions.acceptance_literal(a).negate())
        .chain(
            interpretation
                .unsatisfied()
                .map(|a| completions.acceptance_literal(a)),
        )
        .collect::<Clause>();
    let mut clauses = completions.into_clauses();
    clauses.push(violation);
    clauses
}
