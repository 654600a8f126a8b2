use quantum::measurement::measure;
use quantum::Qubit;
use rayon::prelude::*;
use rng::ShakeRng;

/// Histogram of full-measurement outcomes over `shots` independent copies
/// of `q`. Each shot gets its own generator derived from `seed`, so runs
/// are reproducible and shots can be measured in parallel.
pub fn outcome_counts(q: &Qubit, shots: usize, seed: &str) -> Vec<usize> {
    let dim = q.len();
    (0..shots)
        .into_par_iter()
        .map(|shot| {
            let seed_str = format!("{}-shot-{}", seed, shot);
            let mut rng = ShakeRng::new(seed_str.as_bytes());
            let mut copy = q.clone();
            measure(&mut copy, &mut rng)
        })
        .fold(
            || vec![0usize; dim],
            |mut acc, outcome| {
                acc[outcome] += 1;
                acc
            },
        )
        .reduce(
            || vec![0usize; dim],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        )
}
