use super::Interpretation;
use std::{collections::BTreeSet, fmt::Display};

/// The acceptance condition of an ADF argument, as a propositional formula over argument ids.
///
/// Acceptance conditions are finite trees; children are owned by their parents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AcceptanceCondition {
    /// The formula that is always true.
    Tautology,
    /// The formula that is always false.
    Contradiction,
    /// The atom associated with the argument of the given id.
    Argument(usize),
    /// The negation of a formula.
    Negation(Box<AcceptanceCondition>),
    /// The conjunction of some formulas.
    Conjunction(Vec<AcceptanceCondition>),
    /// The disjunction of some formulas.
    Disjunction(Vec<AcceptanceCondition>),
    /// An implication between two formulas.
    Implication(Box<AcceptanceCondition>, Box<AcceptanceCondition>),
    /// The formula stating all the children have the same value.
    Equivalence(Vec<AcceptanceCondition>),
    /// The exclusive disjunction of two formulas.
    ExclusiveDisjunction(Box<AcceptanceCondition>, Box<AcceptanceCondition>),
}

impl AcceptanceCondition {
    /// Builds the negation of a formula.
    pub fn negation(child: AcceptanceCondition) -> Self {
        Self::Negation(Box::new(child))
    }

    /// Builds the implication `left -> right`.
    pub fn implication(left: AcceptanceCondition, right: AcceptanceCondition) -> Self {
        Self::Implication(Box::new(left), Box::new(right))
    }

    /// Builds the exclusive disjunction of two formulas.
    pub fn exclusive_disjunction(left: AcceptanceCondition, right: AcceptanceCondition) -> Self {
        Self::ExclusiveDisjunction(Box::new(left), Box::new(right))
    }

    /// Returns `true` iff this formula is one of the two constants.
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Tautology | Self::Contradiction)
    }

    /// Returns the ids of the arguments occurring in this formula.
    pub fn arguments(&self) -> BTreeSet<usize> {
        let mut result = BTreeSet::new();
        self.collect_arguments(&mut result);
        result
    }

    fn collect_arguments(&self, set: &mut BTreeSet<usize>) {
        match self {
            Self::Tautology | Self::Contradiction => {}
            Self::Argument(a) => {
                set.insert(*a);
            }
            Self::Negation(c) => c.collect_arguments(set),
            Self::Conjunction(v) | Self::Disjunction(v) | Self::Equivalence(v) => {
                v.iter().for_each(|c| c.collect_arguments(set))
            }
            Self::Implication(l, r) | Self::ExclusiveDisjunction(l, r) => {
                l.collect_arguments(set);
                r.collect_arguments(set);
            }
        }
    }

    /// Returns `true` iff the argument with the given id occurs in this formula.
    pub fn contains_argument(&self, id: usize) -> bool {
        match self {
            Self::Tautology | Self::Contradiction => false,
            Self::Argument(a) => *a == id,
            Self::Negation(c) => c.contains_argument(id),
            Self::Conjunction(v) | Self::Disjunction(v) | Self::Equivalence(v) => {
                v.iter().any(|c| c.contains_argument(id))
            }
            Self::Implication(l, r) | Self::ExclusiveDisjunction(l, r) => {
                l.contains_argument(id) || r.contains_argument(id)
            }
        }
    }

    /// Evaluates this formula given the truth value of each argument.
    pub fn evaluate(&self, value_of: &dyn Fn(usize) -> bool) -> bool {
        match self {
            Self::Tautology => true,
            Self::Contradiction => false,
            Self::Argument(a) => value_of(*a),
            Self::Negation(c) => !c.evaluate(value_of),
            Self::Conjunction(v) => v.iter().all(|c| c.evaluate(value_of)),
            Self::Disjunction(v) => v.iter().any(|c| c.evaluate(value_of)),
            Self::Implication(l, r) => !l.evaluate(value_of) || r.evaluate(value_of),
            Self::Equivalence(v) => {
                let mut values = v.iter().map(|c| c.evaluate(value_of));
                match values.next() {
                    Some(first) => values.all(|b| b == first),
                    None => true,
                }
            }
            Self::ExclusiveDisjunction(l, r) => l.evaluate(value_of) != r.evaluate(value_of),
        }
    }

    /// Replaces the satisfied (resp. unsatisfied) arguments of the interpretation by the tautology (resp. contradiction),
    /// and simplifies the result.
    pub fn fix_partial(&self, interpretation: &Interpretation) -> Self {
        self.fix_with(&|a| {
            if interpretation.is_satisfied(a) {
                Some(true)
            } else if interpretation.is_unsatisfied(a) {
                Some(false)
            } else {
                None
            }
        })
    }

    /// Replaces the arguments with a fixed value by the corresponding constant, and simplifies the result.
    ///
    /// Constants are propagated bottom-up; the subformulas not involving constants are kept unchanged.
    pub fn fix_with(&self, value_of: &dyn Fn(usize) -> Option<bool>) -> Self {
        match self {
            Self::Tautology => Self::Tautology,
            Self::Contradiction => Self::Contradiction,
            Self::Argument(a) => match value_of(*a) {
                Some(true) => Self::Tautology,
                Some(false) => Self::Contradiction,
                None => Self::Argument(*a),
            },
            Self::Negation(c) => match c.fix_with(value_of) {
                Self::Tautology => Self::Contradiction,
                Self::Contradiction => Self::Tautology,
                other => Self::negation(other),
            },
            Self::Conjunction(v) => {
                let mut children = Vec::with_capacity(v.len());
                for c in v.iter().map(|c| c.fix_with(value_of)) {
                    match c {
                        Self::Contradiction => return Self::Contradiction,
                        Self::Tautology => {}
                        other => children.push(other),
                    }
                }
                simplified_nary(children, Self::Tautology, Self::Conjunction)
            }
            Self::Disjunction(v) => {
                let mut children = Vec::with_capacity(v.len());
                for c in v.iter().map(|c| c.fix_with(value_of)) {
                    match c {
                        Self::Tautology => return Self::Tautology,
                        Self::Contradiction => {}
                        other => children.push(other),
                    }
                }
                simplified_nary(children, Self::Contradiction, Self::Disjunction)
            }
            Self::Implication(l, r) => {
                match (l.fix_with(value_of), r.fix_with(value_of)) {
                    (Self::Contradiction, _) | (_, Self::Tautology) => Self::Tautology,
                    (Self::Tautology, Self::Contradiction) => Self::Contradiction,
                    (Self::Tautology, right) => right,
                    (left, Self::Contradiction) => Self::negation(left),
                    (left, right) => Self::implication(left, right),
                }
            }
            Self::Equivalence(v) => {
                let children = v.iter().map(|c| c.fix_with(value_of)).collect::<Vec<_>>();
                if children.windows(2).all(|w| w[0] == w[1]) {
                    return Self::Tautology;
                }
                let has_tautology = children.iter().any(|c| *c == Self::Tautology);
                let has_contradiction = children.iter().any(|c| *c == Self::Contradiction);
                let others = children.into_iter().filter(|c| !c.is_constant());
                match (has_tautology, has_contradiction) {
                    (true, true) => Self::Contradiction,
                    (true, false) => simplified_nary(
                        others.collect(),
                        Self::Tautology,
                        Self::Conjunction,
                    ),
                    (false, true) => simplified_nary(
                        others.map(Self::negation).collect(),
                        Self::Tautology,
                        Self::Conjunction,
                    ),
                    (false, false) => Self::Equivalence(others.collect()),
                }
            }
            Self::ExclusiveDisjunction(l, r) => {
                let (left, right) = (l.fix_with(value_of), r.fix_with(value_of));
                if left == right {
                    return Self::Contradiction;
                }
                match (left, right) {
                    (Self::Tautology, Self::Contradiction) | (Self::Contradiction, Self::Tautology) => {
                        Self::Tautology
                    }
                    (Self::Contradiction, other) | (other, Self::Contradiction) => other,
                    (Self::Tautology, other) | (other, Self::Tautology) => Self::negation(other),
                    (left, right) => Self::exclusive_disjunction(left, right),
                }
            }
        }
    }
}

fn simplified_nary(
    mut children: Vec<AcceptanceCondition>,
    neutral: AcceptanceCondition,
    builder: fn(Vec<AcceptanceCondition>) -> AcceptanceCondition,
) -> AcceptanceCondition {
    match children.len() {
        0 => neutral,
        1 => children.remove(0),
        _ => builder(children),
    }
}

fn fmt_list(
    f: &mut std::fmt::Formatter<'_>,
    name: &str,
    children: &[AcceptanceCondition],
) -> std::fmt::Result {
    write!(f, "{}(", name)?;
    for (i, c) in children.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", c)?;
    }
    write!(f, ")")
}

impl Display for AcceptanceCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tautology => write!(f, "c(v)"),
            Self::Contradiction => write!(f, "c(f)"),
            Self::Argument(a) => write!(f, "#{}", a),
            Self::Negation(c) => write!(f, "neg({})", c),
            Self::Conjunction(v) => fmt_list(f, "and", v),
            Self::Disjunction(v) => fmt_list(f, "or", v),
            Self::Implication(l, r) => write!(f, "imp({},{})", l, r),
            Self::Equivalence(v) => fmt_list(f, "iff", v),
            Self::ExclusiveDisjunction(l, r) => write!(f, "xor({},{})", l, r),
        }
    }
}
