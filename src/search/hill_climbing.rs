use log::debug;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::problem::Problem;
use crate::search::{SearchResult, SearchState};

/// Maximizes satisfied clauses by stochastic hill climbing.
///
/// Each iteration evaluates the full one-flip neighborhood and weights every
/// neighbor by its fitness gain over the current state (non-improving
/// neighbors get weight zero). One neighbor is sampled with probability
/// proportional to its weight, so accepted moves are always strictly
/// improving while the choice among improving moves stays randomized. The
/// search stops when the iteration budget is spent, when no neighbor has
/// positive weight (a local optimum), or when every clause is satisfied.
///
/// # Arguments
///
/// * `problem` - The MaxSAT instance to optimize against
/// * `state` - The starting assignment with its cached fitness
/// * `max_iterations` - Upper bound on the number of accepted moves
/// * `rng` - Source of randomness for the weighted draw
///
/// # Examples
///
/// ```
/// use flipsat::search::{hill_climbing, SearchState};
/// use flipsat::Problem;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let problem = Problem::parse("3\n1 2 0\n-1 3 0\n-2 -3 0\n").unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let state = SearchState::random(&problem, &mut rng);
/// let result = hill_climbing::solve(&problem, state, 100, &mut rng);
/// assert!(result.fitness <= problem.num_clauses());
/// ```
pub fn solve<R: Rng>(
    problem: &Problem,
    mut state: SearchState,
    max_iterations: usize,
    rng: &mut R,
) -> SearchResult {
    let mut iterations = 0;

    while iterations < max_iterations && !state.is_optimal(problem) {
        let mut neighbors = state.assignment.all_neighbors();
        let weights: Vec<usize> = neighbors
            .iter()
            .map(|neighbor| problem.fitness(neighbor).saturating_sub(state.fitness))
            .collect();

        let total: usize = weights.iter().sum();
        if total == 0 {
            // Local optimum: no neighbor improves on the current state.
            debug!(
                "hill climbing stuck at fitness {}/{} after {} iterations",
                state.fitness,
                problem.num_clauses(),
                iterations
            );
            break;
        }

        let chosen = match WeightedIndex::new(&weights) {
            Ok(distribution) => distribution.sample(rng),
            Err(_) => break,
        };
        let next = neighbors.swap_remove(chosen);
        // The sampled weight is exactly the fitness gain of the chosen flip.
        state.fitness += weights[chosen];
        state.assignment = next;
        iterations += 1;
    }

    SearchResult::from_state(problem, state, iterations)
}
