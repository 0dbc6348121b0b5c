//! SAT solver interfaces and solver states for ADF reasoners.

mod cadical_solver;
pub use cadical_solver::CadicalSolver;

mod sat_solver;
pub(crate) use sat_solver::clause;
pub use sat_solver::default_solver;
pub use sat_solver::Assignment;
pub use sat_solver::Clause;
pub use sat_solver::DefaultSatSolverFactory;
pub use sat_solver::Literal;
pub use sat_solver::SatSolver;
pub use sat_solver::SatSolverFactory;
pub use sat_solver::SatSolvingLogger;
pub use sat_solver::SolvingListener;
pub use sat_solver::SolvingResult;
pub use sat_solver::Variable;

mod sat_solver_state;
pub use sat_solver_state::SatSolverState;
