use crate::{
    adf::{AbstractDialecticalFramework, Interpretation, LabelType, LinkStrategy, LinkTable},
    sat::{Assignment, Literal},
};
use anyhow::{Context, Result};
use log::debug;
use std::collections::{BTreeSet, HashMap};

/// The state shared by the SAT encodings of a reasoning session.
///
/// The context maps each argument `a` to two variables: `t_a` (the argument is satisfied) and `f_a` (the argument is unsatisfied).
/// It also maps each link `(r, s)` of the framework to a variable `p_{r,s}`, standing for the value of `r` as seen by `s`.
/// These variables are allocated once, when the context is built.
/// Fresh variables are then provided by [`new_var`](Self::new_var) to the encodings that need auxiliary variables.
///
/// Reducts of the framework may be pushed on the context; while a reduct is active, [`adf`](Self::adf) and [`links`](Self::links) return it,
/// but the variable mapping is unchanged.
pub struct SatEncodingContext<'a, T>
where
    T: LabelType,
{
    original_adf: &'a AbstractDialecticalFramework<T>,
    original_links: LinkTable,
    reducts: Vec<(AbstractDialecticalFramework<T>, LinkTable)>,
    link_strategy: Box<dyn LinkStrategy>,
    link_vars: HashMap<(usize, usize), usize>,
    n_vars: usize,
}

impl<'a, T> SatEncodingContext<'a, T>
where
    T: LabelType,
{
    /// Builds a new context for the given framework, computing the link types with the given strategy.
    pub fn new(
        adf: &'a AbstractDialecticalFramework<T>,
        link_strategy: Box<dyn LinkStrategy>,
    ) -> Result<Self> {
        let original_links = adf
            .compute_links(link_strategy.as_ref())
            .context("while building the SAT encoding context")?;
        let n_args = adf.n_arguments();
        let link_vars: HashMap<(usize, usize), usize> = original_links
            .iter()
            .enumerate()
            .map(|(i, l)| ((l.parent(), l.child()), 2 * n_args + i + 1))
            .collect();
        let n_vars = 2 * n_args + link_vars.len();
        debug!(
            "built a SAT encoding context for {} arguments and {} links ({} dependent)",
            n_args,
            original_links.len(),
            original_links.n_dependent()
        );
        Ok(Self {
            original_adf: adf,
            original_links,
            reducts: vec![],
            link_strategy,
            link_vars,
            n_vars,
        })
    }

    /// Returns the framework the encodings currently apply to (the last pushed reduct, or the original framework).
    pub fn adf(&self) -> &AbstractDialecticalFramework<T> {
        self.reducts
            .last()
            .map(|(adf, _)| adf)
            .unwrap_or(self.original_adf)
    }

    /// Returns the link table of [`adf`](Self::adf).
    pub fn links(&self) -> &LinkTable {
        self.reducts
            .last()
            .map(|(_, links)| links)
            .unwrap_or(&self.original_links)
    }

    /// Returns the framework this context was built for.
    pub fn original_adf(&self) -> &'a AbstractDialecticalFramework<T> {
        self.original_adf
    }

    /// Returns the literal stating the argument with the given id is satisfied.
    pub fn true_literal(&self, id: usize) -> Literal {
        Literal::positive(2 * id + 1)
    }

    /// Returns the literal stating the argument with the given id is unsatisfied.
    pub fn false_literal(&self, id: usize) -> Literal {
        Literal::positive(2 * id + 2)
    }

    /// Returns the literal associated with a link.
    ///
    /// # Panics
    ///
    /// Panics if the original framework has no such link.
    pub fn link_literal(&self, parent: usize, child: usize) -> Literal {
        match self.link_vars.get(&(parent, child)) {
            Some(v) => Literal::positive(*v),
            None => panic!("no link from argument {} to argument {}", parent, child),
        }
    }

    /// Allocates a new variable and returns its positive literal.
    pub fn new_var(&mut self) -> Literal {
        self.n_vars += 1;
        Literal::positive(self.n_vars)
    }

    /// Returns the number of variables allocated so far.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Returns the mapping from the parents of an argument to the literals of the corresponding links.
    pub(crate) fn parent_link_literals(&self, child: usize) -> HashMap<usize, Literal> {
        self.adf()
            .iter_parents(child)
            .map(|r| (r, self.link_literal(r, child)))
            .collect()
    }

    /// Translates a model into the interpretation it encodes over the arguments of [`adf`](Self::adf).
    ///
    /// An argument is satisfied if its true variable is set, else unsatisfied if its false variable is set, else undecided.
    pub fn decode(&self, assignment: &Assignment) -> Interpretation {
        let mut satisfied = BTreeSet::new();
        let mut unsatisfied = BTreeSet::new();
        let mut undecided = BTreeSet::new();
        for id in 0..self.adf().n_arguments() {
            if assignment.is_true(self.true_literal(id)) {
                satisfied.insert(id);
            } else if assignment.is_true(self.false_literal(id)) {
                unsatisfied.insert(id);
            } else {
                undecided.insert(id);
            }
        }
        Interpretation::from_sets(satisfied, unsatisfied, undecided)
    }

    /// Makes the reduct of the active framework by the interpretation the new active framework.
    pub fn push_reduct(&mut self, interpretation: &Interpretation) -> Result<()> {
        let reduct = self.adf().fix_partial(interpretation);
        let links = reduct
            .compute_links(self.link_strategy.as_ref())
            .context("while computing the links of a reduct")?;
        debug!(
            "pushed a reduct with {} links ({} dependent)",
            links.len(),
            links.n_dependent()
        );
        self.reducts.push((reduct, links));
        Ok(())
    }

    /// Restores the framework that was active before the last call to [`push_reduct`](Self::push_reduct).
    ///
    /// # Panics
    ///
    /// Panics if no reduct is active.
    pub fn pop_reduct(&mut self) {
        if self.reducts.pop().is_none() {
            panic!("no reduct to pop")
        }
    }

    /// Calls a function while the reduct given by the interpretation is active.
    ///
    /// The reduct is removed after the call, whether it succeeded or not.
    pub fn with_reduct<R, F>(&mut self, interpretation: &Interpretation, f: F) -> Result<R>
    where
        F: FnOnce(&mut Self) -> Result<R>,
    {
        self.push_reduct(interpretation)?;
        let result = f(self);
        self.pop_reduct();
        result
    }
}
