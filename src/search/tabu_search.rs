use log::debug;

use crate::problem::Problem;
use crate::search::{SearchResult, SearchState};

/// Per-variable counters of how many more iterations each variable stays
/// forbidden from flipping. Index 0 mirrors the assignment sentinel and is
/// never used.
#[derive(Debug, Clone)]
pub struct TabuList {
    tenures: Vec<usize>,
}

impl TabuList {
    pub fn new(num_vars: usize) -> Self {
        Self {
            tenures: vec![0; num_vars + 1],
        }
    }

    pub fn is_allowed(&self, var: usize) -> bool {
        self.tenures[var] == 0
    }

    pub fn tenure(&self, var: usize) -> usize {
        self.tenures[var]
    }

    /// Ages every counter by one iteration, flooring at zero.
    pub fn decay(&mut self) {
        for tenure in &mut self.tenures {
            *tenure = tenure.saturating_sub(1);
        }
    }

    /// Forbids `var` for the standard tenure of `num_vars / 2` iterations.
    ///
    /// Integer division makes the tenure zero for fewer than two variables,
    /// so degenerate instances never lock their only variable.
    pub fn forbid(&mut self, var: usize) {
        let num_vars = self.tenures.len() - 1;
        self.tenures[var] = num_vars / 2;
    }
}

/// Picks the best allowed one-flip move: the allowed variable whose flip
/// yields maximum fitness, ties broken by the earliest variable index.
/// Returns `None` when every variable is currently tabu.
fn select_move(problem: &Problem, state: &SearchState, tabu: &TabuList) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for var in 1..=problem.num_vars() {
        if !tabu.is_allowed(var) {
            continue;
        }
        let fitness = problem.fitness(&state.assignment.flipped(var));
        let improves = match best {
            Some((_, best_fitness)) => fitness > best_fitness,
            None => true,
        };
        if improves {
            best = Some((var, fitness));
        }
    }
    best
}

/// Maximizes satisfied clauses by tabu search.
///
/// Each iteration scans the one-flip neighborhood restricted to variables
/// whose tenure counter is zero, takes the best allowed flip even when it
/// worsens fitness, then ages all tenures and forbids the flipped variable
/// for `num_vars / 2` iterations. Recently flipped variables are skipped
/// even when flipping them would improve fitness, which forces the search
/// away from freshly visited assignments. When every variable is tabu the
/// iteration becomes a null move: tenures still age, the state stays put.
/// The search is deterministic given its starting state; it stops when the
/// iteration budget is spent or every clause is satisfied.
///
/// # Arguments
///
/// * `problem` - The MaxSAT instance to optimize against
/// * `state` - The starting assignment with its cached fitness
/// * `max_iterations` - Upper bound on the number of iterations
///
/// # Examples
///
/// ```
/// use flipsat::search::{tabu_search, SearchState};
/// use flipsat::{Assignment, Problem};
///
/// let problem = Problem::parse("3\n1 2 0\n-1 3 0\n-2 -3 0\n").unwrap();
/// let state = SearchState::new(&problem, Assignment::from_values(vec![true, true, true]));
/// let result = tabu_search::solve(&problem, state, 500);
/// assert_eq!(result.fitness, 3);
/// ```
pub fn solve(problem: &Problem, mut state: SearchState, max_iterations: usize) -> SearchResult {
    let mut tabu = TabuList::new(problem.num_vars());
    let mut iterations = 0;

    while iterations < max_iterations && !state.is_optimal(problem) {
        match select_move(problem, &state, &tabu) {
            Some((var, fitness)) => {
                state.assignment.flip(var);
                state.fitness = fitness;
                tabu.decay();
                tabu.forbid(var);
            }
            None => {
                // Null move: every variable is tabu, so only the tenures age.
                debug!("all variables tabu at iteration {}", iterations);
                tabu.decay();
            }
        }
        iterations += 1;
    }

    SearchResult::from_state(problem, state, iterations)
}
