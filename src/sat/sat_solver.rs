use super::cadical_solver::CadicalSolver;
use log::trace;
use std::{
    fmt::Display,
    num::{NonZeroIsize, NonZeroUsize},
};

/// A variable in a SAT solver.
///
/// A variable is represented by a non-null positive integer.
/// It can be obtained through the [From] trait from an integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable(NonZeroUsize);

macro_rules! impl_var_from {
    ($t: ty) => {
        impl From<$t> for Variable {
            fn from(v: $t) -> Self {
                match NonZeroUsize::new(v as usize) {
                    Some(v) => Self(v),
                    None => panic!("cannot build a variable from 0"),
                }
            }
        }
    };
}
impl_var_from!(usize);
impl_var_from!(u64);
impl_var_from!(u32);

macro_rules! impl_var_from_neg {
    ($t: ty) => {
        impl From<$t> for Variable {
            fn from(v: $t) -> Self {
                if v < 0 {
                    panic!("cannot build a variable from a negative integer")
                }
                match NonZeroUsize::new(v as usize) {
                    Some(v) => Self(v),
                    None => panic!("cannot build a variable from 0"),
                }
            }
        }
    };
}
impl_var_from_neg!(isize);
impl_var_from_neg!(i64);
impl_var_from_neg!(i32);

impl From<Variable> for usize {
    fn from(v: Variable) -> Self {
        v.0.into()
    }
}

/// A literal in a SAT solver.
///
/// A literal is represented by a non-null integer.
/// It can be obtained through the [From] trait from a signed integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal(NonZeroIsize);

impl Literal {
    /// Returns the positive literal of the variable with the given index.
    pub fn positive(var: usize) -> Self {
        Self::from(var as isize)
    }

    /// Returns the opposite literal.
    pub fn negate(self) -> Self {
        Self::from(-self.0.get())
    }

    /// Returns the variable this literal is built on.
    pub fn var(&self) -> Variable {
        Variable(self.0.unsigned_abs())
    }

    /// Returns `true` iff this literal is positive.
    pub fn is_positive(&self) -> bool {
        self.0.get() > 0
    }
}

macro_rules! impl_lit_from {
    ($t: ty) => {
        impl From<$t> for Literal {
            fn from(l: $t) -> Self {
                match NonZeroIsize::new(l as isize) {
                    Some(l) => Self(l),
                    None => panic!("cannot build a literal from 0"),
                }
            }
        }
    };
}
impl_lit_from!(isize);
impl_lit_from!(i64);
impl_lit_from!(i32);

impl From<Literal> for isize {
    fn from(l: Literal) -> Self {
        l.0.into()
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A clause, as a disjunction of literals.
pub type Clause = Vec<Literal>;

/// Builds a clause from a list of literals or signed integers.
macro_rules! clause {
    () => (
        $crate::sat::Clause::new()
    );
    ($($x:expr),+ $(,)?) => (
        [$($x),+].into_iter().map($crate::sat::Literal::from).collect::<$crate::sat::Clause>()
    );
}
pub(crate) use clause;

/// An assignment of a set of variables.
///
/// Inside the set of variables involved in the assignment, some may be unassigned.
/// This is the reason why accessors to assigned value returns an [Option<bool>].
#[derive(Debug, PartialEq, Eq)]
pub struct Assignment(Vec<Option<bool>>);

impl Assignment {
    pub(crate) fn new(assignment: Vec<Option<bool>>) -> Self {
        Self(assignment)
    }

    /// Returns the value potentially assigned to the variable.
    ///
    /// The result in an [Option].
    /// In case the variable is not assigned (or was never seen by the solver), [Option::None] is returned.
    /// Else, [Option::Some] is returned and contains the assigned value.
    pub fn value_of<T>(&self, v: T) -> Option<bool>
    where
        T: Into<Variable>,
    {
        self.0
            .get(usize::from(v.into()) - 1)
            .copied()
            .flatten()
    }

    /// Returns `true` iff the literal is assigned to true.
    pub fn is_true(&self, l: Literal) -> bool {
        self.value_of(l.var()) == Some(l.is_positive())
    }

    /// Returns the number of variables covered by this assignment.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff this assignment covers no variable.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The result of a call to a SAT solver.
#[derive(Debug, PartialEq, Eq)]
pub enum SolvingResult {
    /// The problem is satisfiable; a model is given.
    Satisfiable(Assignment),
    /// The problem is unsatisfiable.
    Unsatisfiable,
    /// The solver was unable to decide the problem.
    Unknown,
}

impl SolvingResult {
    /// Returns the underlying model if it exists, or [Option::None].
    ///
    /// # Panics
    ///
    /// If the solving result is set [SolvingResult::Unknown], this function panics.
    pub fn unwrap_model(self) -> Option<Assignment> {
        match self {
            SolvingResult::Satisfiable(assignment) => Some(assignment),
            SolvingResult::Unsatisfiable => None,
            SolvingResult::Unknown => {
                panic!(r#"cannot unwrap solving result when the solver returned "Unknown""#)
            }
        }
    }
}

/// A trait for SAT solvers.
pub trait SatSolver {
    /// Adds a clause to this solver.
    fn add_clause(&mut self, cl: Clause);

    /// Solves the problem formed by the clauses added so far.
    fn solve(&mut self) -> SolvingResult;

    /// Solves the problem formed by the clauses added so far and the provided assumptions.
    fn solve_under_assumptions(&mut self, assumptions: &[Literal]) -> SolvingResult;

    /// Returns the highest variable index seen by this solver.
    fn n_vars(&self) -> usize;

    /// Adds a listener which is notified when solving starts and ends.
    fn add_listener(&mut self, listener: Box<dyn SolvingListener>);
}

/// A trait for objects listening to the solving steps of a [`SatSolver`].
pub trait SolvingListener {
    /// Called when the solver is launched.
    fn solving_start(&self, n_vars: usize, n_clauses: usize);

    /// Called when the solver has computed its result.
    fn solving_end(&self, result: &SolvingResult);
}

/// A [`SolvingListener`] sending solving steps to the logger.
#[derive(Default)]
pub struct SatSolvingLogger;

impl SolvingListener for SatSolvingLogger {
    fn solving_start(&self, n_vars: usize, n_clauses: usize) {
        trace!(
            "launching SAT solver on an instance with {} variables and {} clauses",
            n_vars,
            n_clauses
        );
    }

    fn solving_end(&self, result: &SolvingResult) {
        let r = match result {
            SolvingResult::Satisfiable(_) => "SAT",
            SolvingResult::Unsatisfiable => "UNSAT",
            SolvingResult::Unknown => "UNKNOWN",
        };
        trace!("SAT solver ended with result {}", r);
    }
}

/// A trait for objects building new SAT solvers.
///
/// Reasoning sessions need fresh solvers at several places (root states, isolated forks, link classification).
/// The factory decides which backend is used.
pub trait SatSolverFactory {
    /// Builds a new, empty SAT solver.
    fn new_solver(&self) -> Box<dyn SatSolver>;
}

/// The default factory, building Cadical solvers with a [`SatSolvingLogger`] attached.
#[derive(Default)]
pub struct DefaultSatSolverFactory;

impl SatSolverFactory for DefaultSatSolverFactory {
    fn new_solver(&self) -> Box<dyn SatSolver> {
        let mut solver = default_solver();
        solver.add_listener(Box::<SatSolvingLogger>::default());
        solver
    }
}

/// The default SAT solver (Cadical).
pub fn default_solver() -> Box<dyn SatSolver> {
    Box::new(CadicalSolver::default())
}
