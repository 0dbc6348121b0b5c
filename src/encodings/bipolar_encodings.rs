use super::{sat_encoding::compile_over_links, SatEncodingContext};
use crate::{
    adf::{Interpretation, LabelType, LinkType},
    sat::{clause, Clause, Literal},
};
use permutator::CartesianProduct;

static TRUTH_VALUES: [bool; 2] = [false, true];

pub(super) fn encode_bipolarity<T>(context: &SatEncodingContext<T>) -> Vec<Clause>
where
    T: LabelType,
{
    let mut clauses = vec![];
    for link in context.links().iter() {
        let (r, s) = (link.parent(), link.child());
        let p = context.link_literal(r, s);
        let (t_r, f_r) = (context.true_literal(r), context.false_literal(r));
        let (t_s, f_s) = (context.true_literal(s), context.false_literal(s));
        match link.link_type() {
            LinkType::Attacking => {
                clauses.push(clause![t_s.negate(), f_r, p]);
                clauses.push(clause![f_s.negate(), t_r, p.negate()]);
            }
            LinkType::Supporting => {
                clauses.push(clause![t_s.negate(), t_r, p.negate()]);
                clauses.push(clause![f_s.negate(), f_r, p]);
            }
            LinkType::Redundant | LinkType::Dependent => {}
        }
    }
    clauses
}

pub(super) fn encode_k_bipolarity<T>(
    context: &mut SatEncodingContext<T>,
    interpretation: &Interpretation,
) -> Vec<Clause>
where
    T: LabelType,
{
    let mut clauses = vec![];
    for s in 0..context.adf().n_arguments() {
        let undecided_dependents = context
            .links()
            .links_to(s)
            .filter(|l| l.link_type().is_dependent() && interpretation.is_undecided(l.parent()))
            .map(|l| l.parent())
            .collect::<Vec<usize>>();
        if undecided_dependents.is_empty() {
            continue;
        }
        let acc = context.adf().acceptance_condition_by_id(s).clone();
        let (t_s, f_s) = (context.true_literal(s), context.false_literal(s));
        let domains = vec![&TRUTH_VALUES[..]; undecided_dependents.len()];
        let mut completions = Vec::with_capacity(1 << undecided_dependents.len());
        domains
            .cart_prod()
            .for_each(|p| completions.push(p.into_iter().copied().collect::<Vec<bool>>()));
        for completion in completions {
            let fixed = acc.fix_with(&|r: usize| {
                undecided_dependents
                    .iter()
                    .position(|x| *x == r)
                    .map(|i| completion[i])
            });
            let (name, acc_clauses) = compile_over_links(context, s, &fixed);
            clauses.extend(acc_clauses);
            let mismatches = undecided_dependents
                .iter()
                .zip(completion.iter())
                .map(|(r, v)| {
                    if *v {
                        context.false_literal(*r)
                    } else {
                        context.true_literal(*r)
                    }
                })
                .collect::<Vec<Literal>>();
            let mut cl_t = clause![t_s.negate(), name];
            cl_t.extend(mismatches.iter().copied());
            clauses.push(cl_t);
            let mut cl_f = clause![f_s.negate(), name.negate()];
            cl_f.extend(mismatches.into_iter());
            clauses.push(cl_f);
        }
    }
    clauses
}
