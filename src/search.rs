pub mod hill_climbing;
pub mod simulated_annealing;
pub mod tabu_search;

pub use hill_climbing::solve as hill_climbing_solve;
pub use simulated_annealing::solve as simulated_annealing_solve;
pub use tabu_search::solve as tabu_search_solve;

use std::fmt;

use rand::Rng;

use crate::problem::Problem;
use crate::state::Assignment;

/// A current assignment paired with its cached satisfied-clause count.
///
/// Each running strategy owns exactly one of these and mutates it one
/// accepted flip at a time.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub assignment: Assignment,
    pub fitness: usize,
}

impl SearchState {
    /// Wraps an assignment, computing its fitness against `problem`.
    pub fn new(problem: &Problem, assignment: Assignment) -> Self {
        let fitness = problem.fitness(&assignment);
        Self {
            assignment,
            fitness,
        }
    }

    /// Seeds a fresh random state for `problem`.
    pub fn random<R: Rng>(problem: &Problem, rng: &mut R) -> Self {
        Self::new(problem, Assignment::random(problem.num_vars(), rng))
    }

    /// True once every clause is satisfied; all strategies stop here.
    pub fn is_optimal(&self, problem: &Problem) -> bool {
        self.fitness == problem.num_clauses()
    }
}

/// Outcome of a local-search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The final assignment.
    pub assignment: Assignment,
    /// Satisfied-clause count of the final assignment.
    pub fitness: usize,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether every clause was satisfied when the search stopped.
    pub optimal: bool,
}

impl SearchResult {
    pub(crate) fn from_state(problem: &Problem, state: SearchState, iterations: usize) -> Self {
        let optimal = state.fitness == problem.num_clauses();
        Self {
            assignment: state.assignment,
            fitness: state.fitness,
            iterations,
            optimal,
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, satisfied clauses: {}",
            self.assignment, self.fitness
        )
    }
}
