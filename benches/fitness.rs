use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use flipsat::{Assignment, Clause, Problem};

fn random_three_sat(num_vars: usize, num_clauses: usize, rng: &mut ChaCha8Rng) -> Problem {
    let clauses = (0..num_clauses)
        .map(|_| {
            Clause::new(
                (0..3)
                    .map(|_| {
                        let var = rng.gen_range(1..=num_vars) as i32;
                        if rng.gen_bool(0.5) {
                            var
                        } else {
                            -var
                        }
                    })
                    .collect(),
            )
        })
        .collect();
    Problem::new(num_vars, clauses)
}

fn bench_fitness(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(0xf11b);
    let problem = random_three_sat(200, 800, &mut rng);
    let assignment = Assignment::random(problem.num_vars(), &mut rng);

    c.bench_function("fitness_200v_800c", |b| {
        b.iter(|| black_box(&problem).fitness(black_box(&assignment)))
    });

    c.bench_function("all_neighbors_sweep_200v_800c", |b| {
        b.iter(|| {
            black_box(&assignment)
                .all_neighbors()
                .iter()
                .map(|neighbor| problem.fitness(neighbor))
                .max()
        })
    });
}

criterion_group!(benches, bench_fitness);
criterion_main!(benches);
