use crate::error::{QuantumError, QuantumResult};
use crate::gate::{basis_map, Gate};
use crate::num::log2;
use nalgebra::DMatrix;

impl Gate {
    /// Wire-permutation gate `S(σ)`: the `2^n × 2^n` permutation matrix with
    /// `S(σ)·|b_{σ(0)} b_{σ(1)} … b_{σ(n−1)}⟩ = |b_0 b_1 … b_{n−1}⟩`.
    ///
    /// Per basis column the unique hot row is assembled bit by bit: wire `i`
    /// of the row takes wire `σ(i)` of the column, with wire 0 as the most
    /// significant bit.
    pub fn permutation(sigma: &[usize]) -> QuantumResult<Gate> {
        let n = sigma.len();
        if n == 0 {
            return Err(QuantumError::InvalidArgument("empty permutation".into()));
        }
        let mut seen = vec![false; n];
        for &s in sigma {
            if s >= n || seen[s] {
                return Err(QuantumError::InvalidArgument(format!(
                    "{:?} is not a permutation of 0..{}",
                    sigma, n
                )));
            }
            seen[s] = true;
        }

        let dim = 1usize << n;
        Ok(Gate {
            mat: basis_map(dim, |col| {
                let mut row = 0;
                for (i, &s) in sigma.iter().enumerate() {
                    let bit = (col >> (n - 1 - s)) & 1;
                    row |= bit << (n - 1 - i);
                }
                row
            }),
        })
    }

    /// `S(σ)` for the transposition of wires `p` and `q` in an `n`-wire
    /// register.
    pub fn transposition(p: usize, q: usize, n: usize) -> QuantumResult<Gate> {
        if p >= n || q >= n {
            return Err(QuantumError::InvalidArgument(format!(
                "transposition ({}, {}) out of range for {} wires",
                p, q, n
            )));
        }
        let mut sigma: Vec<usize> = (0..n).collect();
        sigma.swap(p, q);
        Self::permutation(&sigma)
    }

    /// Controlled gate `C(t, c, n, U)`: applies the `m`-wire gate `U` to
    /// wires `t … t+m−1` of an `n`-wire register iff wire `c` is `|1⟩`.
    ///
    /// Built as the canonical block matrix `diag(I, U)` on wires
    /// `{0 = control, 1..=m = target}`, embedded into `n` wires, then
    /// conjugated by the wire permutation that moves control and target to
    /// the requested positions.
    pub fn controlled(target: usize, control: usize, wires: usize, u: &Gate) -> QuantumResult<Gate> {
        let m = log2(u.rows() as u64);
        if m < 1 || u.rows() != u.cols() || u.rows() != 1 << m {
            return Err(QuantumError::InvalidArgument(format!(
                "control of a {}x{} gate",
                u.rows(),
                u.cols()
            )));
        }
        let m = m as usize;
        let targets = target..target + m;
        if control >= wires || target + m > wires || targets.contains(&control) {
            return Err(QuantumError::InvalidArgument(format!(
                "control {} and target {}..{} do not fit {} wires",
                control,
                target,
                target + m,
                wires
            )));
        }

        let dim = 1usize << (m + 1);
        let half = dim / 2;
        let mut mat = DMatrix::identity(dim, dim);
        mat.view_mut((half, half), (u.rows(), u.cols())).copy_from(&u.mat);
        let mut canonical = Gate { mat };
        if wires > m + 1 {
            canonical = canonical.apply_to(0, wires)?;
        }

        let mut sigma = Vec::with_capacity(wires);
        sigma.push(control);
        sigma.extend(targets.clone());
        for w in 0..wires {
            if w != control && !targets.contains(&w) {
                sigma.push(w);
            }
        }
        let s = Gate::permutation(&sigma)?;

        Ok(&s.transpose() * &(&canonical * &s))
    }
}
