use quantum::measurement::measure_partial;
use quantum::{Gate, QuantumError, QuantumResult, Qubit};
use rng::ShakeRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionClass {
    Constant,
    Balanced,
}

/// Deutsch's algorithm: classifies `f : {0,1} → {0,1}` with a single oracle
/// query. The register starts in `|0⟩⊗|1⟩`; after `H⊗H`, `U_f`, `H⊗H` the
/// leading wire is `|0⟩` exactly when `f` is constant.
pub fn deutsch(f: &[usize], rng: &mut ShakeRng) -> QuantumResult<FunctionClass> {
    if f.len() != 2 {
        return Err(QuantumError::InvalidArgument(format!(
            "Deutsch takes a 2-entry table, got {}",
            f.len()
        )));
    }
    let h = Gate::hadamard().tensor_pow(2);
    let uf = Gate::oracle(f, 1)?;

    let mut x = h.apply(&Qubit::basis(1, 2)?)?;
    x = uf.apply(&x)?;
    x = h.apply(&x)?;

    let outcome = measure_partial(&mut x, 1, rng)?;
    Ok(if outcome == 0 {
        FunctionClass::Constant
    } else {
        FunctionClass::Balanced
    })
}

/// Deutsch–Jozsa over `k` input wires: one query distinguishes a constant
/// table from a balanced one. The caller promises `f` is one of the two;
/// the outcome of the leading-`k` measurement is 0 iff `f` is constant.
pub fn deutsch_jozsa(f: &[usize], rng: &mut ShakeRng) -> QuantumResult<FunctionClass> {
    let uf = Gate::oracle(f, 1)?;
    let k = uf.wires() - 1;

    let h_all = Gate::hadamard().tensor_pow(k + 1);
    let h_inputs = Gate::hadamard().tensor_pow(k).tensor(&Gate::identity());

    let mut x = h_all.apply(&Qubit::basis(1, k + 1)?)?;
    x = uf.apply(&x)?;
    x = h_inputs.apply(&x)?;

    let outcome = measure_partial(&mut x, k, rng)?;
    Ok(if outcome == 0 {
        FunctionClass::Constant
    } else {
        FunctionClass::Balanced
    })
}
