use super::{Assignment, Clause, Literal, SatSolver, SolvingListener, SolvingResult};
use cadical::Solver as CadicalCSolver;

/// A wrapper around the Cadical SAT solver.
#[derive(Default)]
pub struct CadicalSolver {
    solver: CadicalCSolver,
    listeners: Vec<Box<dyn SolvingListener>>,
    n_clauses: usize,
}

impl SatSolver for CadicalSolver {
    fn add_clause(&mut self, cl: Clause) {
        self.solver
            .add_clause(cl.into_iter().map(|l| isize::from(l) as i32));
        self.n_clauses += 1;
    }

    fn solve(&mut self) -> SolvingResult {
        self.solve_under_assumptions(&[])
    }

    fn solve_under_assumptions(&mut self, assumptions: &[Literal]) -> SolvingResult {
        self.listeners
            .iter()
            .for_each(|l| l.solving_start(self.n_vars(), self.n_clauses));
        let solving_result = match self
            .solver
            .solve_with(assumptions.iter().map(|l| isize::from(*l) as i32))
        {
            Some(true) => {
                let assignment = Assignment::new(
                    (1..=self.solver.max_variable())
                        .map(|i| self.solver.value(i))
                        .collect(),
                );
                SolvingResult::Satisfiable(assignment)
            }
            Some(false) => SolvingResult::Unsatisfiable,
            None => SolvingResult::Unknown,
        };
        self.listeners
            .iter()
            .for_each(|l| l.solving_end(&solving_result));
        solving_result
    }

    fn n_vars(&self) -> usize {
        self.solver.max_variable() as usize
    }

    fn add_listener(&mut self, listener: Box<dyn SolvingListener>) {
        self.listeners.push(listener);
    }
}
