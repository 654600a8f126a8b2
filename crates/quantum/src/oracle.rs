use crate::error::{QuantumError, QuantumResult};
use crate::gate::{basis_map, Gate};
use crate::num::log2;

impl Gate {
    /// Oracle `U_f` for a classical function given as a value table:
    /// `U_f · |x⟩_k ⊗ |y⟩_m = |x⟩_k ⊗ |y ⊕ f(x)⟩_m`.
    ///
    /// `f` must have length `2^k` for some `k ≥ 1` and values below `2^m`.
    /// The result is the permutation matrix of
    /// `x·2^m + y ↦ x·2^m + (y ⊕ f(x))`, unitary because the map is a
    /// bijection.
    pub fn oracle(f: &[usize], out_wires: usize) -> QuantumResult<Gate> {
        let k = log2(f.len() as u64);
        if k < 1 || f.len() != 1 << k {
            return Err(QuantumError::InvalidArgument(format!(
                "oracle table length {} is not a power of two >= 2",
                f.len()
            )));
        }
        if out_wires == 0 {
            return Err(QuantumError::InvalidArgument(
                "oracle needs at least one output wire".into(),
            ));
        }
        let m = out_wires;
        if let Some(&bad) = f.iter().find(|&&v| v >= 1 << m) {
            return Err(QuantumError::InvalidArgument(format!(
                "oracle value {} does not fit {} output wires",
                bad, m
            )));
        }

        let dim = 1usize << (k as usize + m);
        let mask = (1usize << m) - 1;
        Ok(Gate {
            mat: basis_map(dim, |col| {
                let x = col >> m;
                let y = col & mask;
                (x << m) | (y ^ f[x])
            }),
        })
    }
}
