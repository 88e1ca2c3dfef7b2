use std::env;
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

use flipsat::search::simulated_annealing::AnnealingConfig;
use flipsat::search::{hill_climbing, simulated_annealing, tabu_search, SearchState};
use flipsat::Problem;

const TABU_ITERATIONS: usize = 500;
const HILL_CLIMBING_ITERATIONS: usize = 100;
const ANNEALING_STOP_TEMPERATURE: f64 = 0.5;

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: flipsat <problem-file>");
            process::exit(2);
        }
    };

    if let Err(err) = run(&path) {
        eprintln!("flipsat: {err}");
        process::exit(1);
    }
}

fn run(path: &str) -> flipsat::Result<()> {
    let problem = Problem::load(path)?;
    let mut rng = StdRng::from_entropy();

    let state = SearchState::random(&problem, &mut rng);
    let result = tabu_search::solve(&problem, state, TABU_ITERATIONS);
    println!("Tabu Search: {result}");

    let state = SearchState::random(&problem, &mut rng);
    let result = hill_climbing::solve(&problem, state, HILL_CLIMBING_ITERATIONS, &mut rng);
    println!("Stochastic Hill Climbing: {result}");

    let state = SearchState::random(&problem, &mut rng);
    let result = simulated_annealing::solve(
        &problem,
        state,
        ANNEALING_STOP_TEMPERATURE,
        &AnnealingConfig::default(),
        &mut rng,
    );
    println!("Simulated Annealing: {result}");

    Ok(())
}
