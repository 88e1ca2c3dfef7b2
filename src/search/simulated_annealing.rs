use std::fmt::Debug;

use log::debug;
use num_traits::Float;
use rand::Rng;

use crate::problem::Problem;
use crate::search::{SearchResult, SearchState};

/// Configuration for the annealing schedule.
#[derive(Debug, Clone)]
pub struct AnnealingConfig<T>
where
    T: Float + Debug,
{
    /// Initial temperature
    pub initial_temperature: T,
    /// Multiplicative cooling factor applied after every iteration
    pub cooling_rate: T,
}

impl<T> Default for AnnealingConfig<T>
where
    T: Float + Debug,
{
    fn default() -> Self {
        Self {
            initial_temperature: T::from(100.0).unwrap(),
            cooling_rate: T::from(0.999).unwrap(),
        }
    }
}

/// Maximizes satisfied clauses by simulated annealing.
///
/// Each iteration draws one random one-flip neighbor. A neighbor at least as
/// fit as the current state is accepted unconditionally; a worse one is
/// accepted with the Metropolis probability `exp((nf - cf) / T)`, which
/// shrinks as the temperature cools or the fitness loss grows. The
/// temperature starts at `initial_temperature` and is multiplied by
/// `cooling_rate` after every iteration; the search stops once it falls
/// below `stop_temperature` or every clause is satisfied. Smaller stopping
/// temperatures mean longer searches.
///
/// # Arguments
///
/// * `problem` - The MaxSAT instance to optimize against
/// * `state` - The starting assignment with its cached fitness
/// * `stop_temperature` - The temperature at which the schedule ends
/// * `config` - The annealing schedule parameters
/// * `rng` - Source of randomness for neighbor draws and acceptance
///
/// # Examples
///
/// ```
/// use flipsat::search::simulated_annealing::{self, AnnealingConfig};
/// use flipsat::search::SearchState;
/// use flipsat::Problem;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let problem = Problem::parse("3\n1 2 0\n-1 3 0\n-2 -3 0\n").unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(5);
/// let state = SearchState::random(&problem, &mut rng);
/// let result =
///     simulated_annealing::solve(&problem, state, 0.5, &AnnealingConfig::default(), &mut rng);
/// assert!(result.fitness <= problem.num_clauses());
/// ```
pub fn solve<T, R>(
    problem: &Problem,
    mut state: SearchState,
    stop_temperature: T,
    config: &AnnealingConfig<T>,
    rng: &mut R,
) -> SearchResult
where
    T: Float + Debug,
    R: Rng,
{
    // No variables means no neighbors to draw.
    if problem.num_vars() == 0 {
        return SearchResult::from_state(problem, state, 0);
    }

    let mut temperature = config.initial_temperature;
    let mut iterations = 0;

    while temperature >= stop_temperature && !state.is_optimal(problem) {
        let neighbor = state.assignment.random_neighbor(rng);
        let neighbor_fitness = problem.fitness(&neighbor);

        let accept = if neighbor_fitness >= state.fitness {
            true
        } else {
            let delta = T::from(neighbor_fitness).unwrap() - T::from(state.fitness).unwrap();
            let probability = (delta / temperature).exp();
            rng.gen::<f64>() < probability.to_f64().unwrap()
        };

        if accept {
            state.assignment = neighbor;
            state.fitness = neighbor_fitness;
        }

        temperature = temperature * config.cooling_rate;
        iterations += 1;
    }

    debug!(
        "annealing stopped at fitness {}/{} after {} iterations",
        state.fitness,
        problem.num_clauses(),
        iterations
    );
    SearchResult::from_state(problem, state, iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Assignment;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EXAMPLE: &str = "3\n1 2 0\n-1 3 0\n-2 -3 0\n";

    #[test]
    fn test_solves_example_instance() {
        // The geometric schedule from 100.0 down to 0.5 runs thousands of
        // iterations, far more than this three-variable instance needs.
        let problem = Problem::parse(EXAMPLE).unwrap();
        for seed in 0..4 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let state = SearchState::random(&problem, &mut rng);
            let result = solve(&problem, state, 0.5, &AnnealingConfig::default(), &mut rng);
            assert!(result.optimal, "seed {seed} did not reach the optimum");
            assert_eq!(result.fitness, 3);
        }
    }

    #[test]
    fn test_iteration_count_matches_schedule() {
        // A single empty clause can never be satisfied, so the loop runs the
        // full cooling schedule.
        let problem = Problem::parse("1\n0\n").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let state = SearchState::random(&problem, &mut rng);
        let config = AnnealingConfig::default();
        let stop = 0.5f64;

        let mut expected = 0usize;
        let mut temperature = config.initial_temperature;
        while temperature >= stop {
            temperature *= config.cooling_rate;
            expected += 1;
        }

        let result = solve(&problem, state, stop, &config, &mut rng);
        assert_eq!(result.iterations, expected);
        assert_eq!(result.fitness, 0);
        assert!(!result.optimal);
    }

    #[test]
    fn test_stop_above_initial_runs_no_iterations() {
        let problem = Problem::parse(EXAMPLE).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let state = SearchState::random(&problem, &mut rng);
        let fitness = state.fitness;
        let result = solve(&problem, state, 200.0, &AnnealingConfig::default(), &mut rng);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.fitness, fitness);
    }

    #[test]
    fn test_stops_immediately_when_optimal() {
        let problem = Problem::parse(EXAMPLE).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let state = SearchState::new(&problem, Assignment::from_values(vec![false, true, false]));
        assert!(state.is_optimal(&problem));
        let result = solve(&problem, state, 0.5, &AnnealingConfig::default(), &mut rng);
        assert_eq!(result.iterations, 0);
        assert!(result.optimal);
    }

    #[test]
    fn test_zero_variable_problem_returns_initial() {
        let problem = Problem::parse("0\n").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let state = SearchState::random(&problem, &mut rng);
        let result = solve(&problem, state, 0.5, &AnnealingConfig::default(), &mut rng);
        assert_eq!(result.iterations, 0);
        assert!(result.optimal);
    }

    #[test]
    fn test_fitness_stays_in_bounds() {
        let problem = Problem::parse(EXAMPLE).unwrap();
        for seed in 0..8 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let state = SearchState::random(&problem, &mut rng);
            let result = solve(&problem, state, 5.0, &AnnealingConfig::default(), &mut rng);
            assert!(result.fitness <= problem.num_clauses());
        }
    }
}
