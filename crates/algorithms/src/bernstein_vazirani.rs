use quantum::measurement::measure_partial;
use quantum::num::bitwise_dot;
use quantum::{Gate, QuantumError, QuantumResult, Qubit};
use rng::ShakeRng;

/// Oracle table for `f(x) = a·x mod 2` over `k` input wires.
pub fn dot_product_table(a: usize, k: usize) -> Vec<usize> {
    (0..1usize << k)
        .map(|x| bitwise_dot(a as u64, x as u64) as usize)
        .collect()
}

/// Bernstein–Vazirani: recovers the hidden string `a` from the dot-product
/// oracle with a single query. The leading-`k` measurement yields `a` with
/// probability 1.
pub fn bernstein_vazirani(a: usize, k: usize, rng: &mut ShakeRng) -> QuantumResult<usize> {
    if k == 0 || a >= 1 << k {
        return Err(QuantumError::InvalidArgument(format!(
            "hidden string {} does not fit {} wires",
            a, k
        )));
    }
    let f = dot_product_table(a, k);
    let uf = Gate::oracle(&f, 1)?;

    let h_all = Gate::hadamard().tensor_pow(k + 1);
    let h_inputs = Gate::hadamard().tensor_pow(k).tensor(&Gate::identity());

    let mut x = h_all.apply(&Qubit::basis(1, k + 1)?)?;
    x = uf.apply(&x)?;
    x = h_inputs.apply(&x)?;

    measure_partial(&mut x, k, rng)
}
