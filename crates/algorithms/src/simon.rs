use quantum::measurement::measure_partial;
use quantum::num::{bitwise_dot, log2};
use quantum::{Gate, QuantumResult, Qubit};
use rng::ShakeRng;

/// One query of Simon's circuit for a 2-to-1 function with hidden period
/// `s` (`f(x) = f(x ⊕ s)`): returns a `y` with `y·s ≡ 0 (mod 2)`, uniform
/// over that subspace.
pub fn simon_sample(f: &[usize], out_wires: usize, rng: &mut ShakeRng) -> QuantumResult<usize> {
    let uf = Gate::oracle(f, out_wires)?;
    let k = uf.wires() - out_wires;

    let h_inputs = Gate::hadamard()
        .tensor_pow(k)
        .tensor(&Gate::identity_n(out_wires));

    let mut x = h_inputs.apply(&Qubit::zero(k + out_wires))?;
    x = uf.apply(&x)?;
    x = h_inputs.apply(&x)?;

    measure_partial(&mut x, k, rng)
}

/// Runs `queries` rounds of [`simon_sample`] and intersects the collected
/// orthogonality constraints. Returns the period once it is pinned down
/// uniquely, `None` when the samples were not yet independent enough.
///
/// The candidate search is exhaustive over the `2^k` strings; demo registers
/// are small, so a GF(2) elimination would buy nothing here.
pub fn simon_period(
    f: &[usize],
    out_wires: usize,
    rng: &mut ShakeRng,
    queries: usize,
) -> QuantumResult<Option<usize>> {
    let k = log2(f.len() as u64) as usize;

    let mut constraints: Vec<usize> = Vec::new();
    for _ in 0..queries {
        let y = simon_sample(f, out_wires, rng)?;
        if y != 0 && !constraints.contains(&y) {
            constraints.push(y);
        }
    }

    let candidates: Vec<usize> = (1..1usize << k)
        .filter(|&s| {
            constraints
                .iter()
                .all(|&y| bitwise_dot(y as u64, s as u64) == 0)
        })
        .collect();

    Ok(if candidates.len() == 1 {
        Some(candidates[0])
    } else {
        None
    })
}
