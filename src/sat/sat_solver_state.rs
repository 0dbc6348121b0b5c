use super::{Assignment, Clause, Literal, SatSolver, SatSolverFactory, SolvingResult};
use anyhow::{anyhow, Result};
use log::debug;
use std::{cell::RefCell, rc::Rc};

type ClauseStore = Rc<RefCell<Vec<Clause>>>;

/// A stateful view on a set of clauses, backed by an incremental SAT solver.
///
/// A root state owns the authoritative clause store of a reasoning session.
/// Isolated states are obtained by [`fork_isolated`](Self::fork_isolated): they see the clauses of their parent as they were at fork time,
/// record their own clauses in a private store, and never alter the clauses of their parent.
/// Clauses added to the parent after the fork are not visible to the fork.
/// Dropping a fork discards everything that was added to it.
///
/// The underlying solver is created lazily, at the first call to [`witness`](Self::witness), and is fed incrementally.
pub struct SatSolverState {
    factory: Rc<dyn SatSolverFactory>,
    inherited: Vec<(ClauseStore, usize)>,
    own: ClauseStore,
    solver: Option<Box<dyn SatSolver>>,
    n_fed: usize,
    contradictory: bool,
}

impl SatSolverState {
    /// Builds a new, empty root state using solvers provided by the given factory.
    pub fn new(factory: Rc<dyn SatSolverFactory>) -> Self {
        Self {
            factory,
            inherited: vec![],
            own: Rc::new(RefCell::new(vec![])),
            solver: None,
            n_fed: 0,
            contradictory: false,
        }
    }

    /// Builds a new, empty root state sharing the solver backend of this one.
    pub fn new_root(&self) -> Self {
        Self::new(Rc::clone(&self.factory))
    }

    /// Returns an isolated state seeing the clauses of this one.
    ///
    /// The fork gets its own solver, fed with the clauses visible here at fork time.
    pub fn fork_isolated(&self) -> Self {
        let mut inherited = self.inherited.clone();
        inherited.push((Rc::clone(&self.own), self.own.borrow().len()));
        let fork = Self {
            factory: Rc::clone(&self.factory),
            inherited,
            own: Rc::new(RefCell::new(vec![])),
            solver: None,
            n_fed: 0,
            contradictory: self.contradictory,
        };
        debug!("forked an isolated state over {} clauses", fork.n_clauses());
        fork
    }

    /// Returns `true` iff this state was obtained by forking another one.
    pub fn is_isolated(&self) -> bool {
        !self.inherited.is_empty()
    }

    /// Adds a single clause to this state.
    pub fn add_clause(&mut self, clause: Clause) {
        if clause.is_empty() {
            debug!("an empty clause was added; the state is now contradictory");
            self.contradictory = true;
        }
        self.own.borrow_mut().push(clause);
    }

    /// Adds some clauses to this state.
    pub fn add(&mut self, clauses: Vec<Clause>) {
        clauses.into_iter().for_each(|cl| self.add_clause(cl));
    }

    /// Returns the number of clauses visible from this state.
    pub fn n_clauses(&self) -> usize {
        self.inherited.iter().map(|(_, len)| len).sum::<usize>() + self.own.borrow().len()
    }

    /// Looks for a model of the clauses visible from this state.
    ///
    /// Returns `None` if the clauses are unsatisfiable.
    /// An error is returned if the solver is unable to decide.
    pub fn witness(&mut self) -> Result<Option<Assignment>> {
        self.witness_under_assumptions(&[])
    }

    /// Looks for a model of the clauses visible from this state in which the assumptions hold.
    ///
    /// Assumptions are not recorded: the next calls do not see them.
    pub fn witness_under_assumptions(
        &mut self,
        assumptions: &[Literal],
    ) -> Result<Option<Assignment>> {
        if self.contradictory {
            return Ok(None);
        }
        let n_clauses = self.n_clauses();
        let solver = self.synchronize();
        debug!(
            "looking for a witness of {} clauses over {} variables ({} assumptions)",
            n_clauses,
            solver.n_vars(),
            assumptions.len()
        );
        let result = if assumptions.is_empty() {
            solver.solve()
        } else {
            solver.solve_under_assumptions(assumptions)
        };
        match result {
            SolvingResult::Satisfiable(assignment) => Ok(Some(assignment)),
            SolvingResult::Unsatisfiable => Ok(None),
            SolvingResult::Unknown => Err(anyhow!(
                "the SAT solver was unable to decide whether the state is satisfiable"
            )),
        }
    }

    fn synchronize(&mut self) -> &mut dyn SatSolver {
        let Self {
            factory,
            inherited,
            own,
            solver,
            n_fed,
            ..
        } = self;
        let solver = solver.get_or_insert_with(|| factory.new_solver());
        let own_len = own.borrow().len();
        let mut offset = 0;
        for (store, len) in inherited
            .iter()
            .map(|(s, l)| (s, *l))
            .chain(std::iter::once((&*own, own_len)))
        {
            if *n_fed < offset + len {
                store.borrow()[*n_fed - offset..len]
                    .iter()
                    .for_each(|cl| solver.add_clause(cl.clone()));
                *n_fed = offset + len;
            }
            offset += len;
        }
        solver.as_mut()
    }
}
