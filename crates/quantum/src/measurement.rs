use nalgebra::DVector;
use rng::ShakeRng;

use crate::error::{QuantumError, QuantumResult};
use crate::num::{is_one, log2};
use crate::qubit::{Qubit, C64};

/// Inverse-CDF sample over unnormalized probabilities. Falls back to the
/// last nonzero entry when round-off lets the walk run past the end.
fn sample_index(probs: &[f64], total: f64, u: f64) -> usize {
    let mut x = u * total;
    for (i, p) in probs.iter().enumerate() {
        if x < *p {
            return i;
        }
        x -= *p;
    }
    probs
        .iter()
        .rposition(|&p| p > 0.0)
        .unwrap_or(probs.len() - 1)
}

/// Full measurement in the computational basis.
///
/// Collapses the state to `|j⟩_n` scaled by the unit phase of the selected
/// amplitude and returns `j`. A state that already has some `|α_i|² ≈ 1` is
/// left untouched, which makes the operation idempotent on collapsed inputs.
pub fn measure(q: &mut Qubit, rng: &mut ShakeRng) -> usize {
    let probs: Vec<f64> = q.amps.iter().map(|a| a.norm_sqr()).collect();

    if let Some(i) = probs.iter().position(|&p| is_one(p)) {
        return i;
    }

    let total: f64 = probs.iter().sum();
    if !is_one(total) {
        eprintln!(
            "measure: squared norm {} deviates from 1, sampling best-effort",
            total
        );
    }

    let j = sample_index(&probs, total, rng.next_f64(b"MEASURE"));
    let phase = q.amps[j] / q.amps[j].norm();

    let mut amps = DVector::zeros(q.len());
    amps[j] = phase;
    q.amps = amps;
    j
}

/// Partial measurement of the leading `p` of `n` wires.
///
/// Samples `j₀` from the marginal `P_j = Σ_r |α_{j·M+r}|²` and replaces the
/// state with `|j₀⟩_p ⊗ ψ_{j₀}` where `ψ_{j₀}[r] = α_{j₀·M+r}/√P_{j₀}`.
pub fn measure_partial(q: &mut Qubit, p: usize, rng: &mut ShakeRng) -> QuantumResult<usize> {
    let len = q.len();
    let n = log2(len as u64);
    if n < 1 || len != 1 << n {
        return Err(QuantumError::InvalidArgument(format!(
            "state length {} is not a power of two",
            len
        )));
    }
    let n = n as usize;
    if p == 0 || p >= n {
        return Err(QuantumError::InvalidArgument(format!(
            "cannot measure the leading {} of {} wires",
            p, n
        )));
    }

    let k = 1usize << p;
    let m = 1usize << (n - p);
    let mut marginal = vec![0.0f64; k];
    for (j, pj) in marginal.iter_mut().enumerate() {
        for r in 0..m {
            *pj += q.amps[j * m + r].norm_sqr();
        }
    }

    let total: f64 = marginal.iter().sum();
    if !is_one(total) {
        eprintln!(
            "measure_partial: squared norm {} deviates from 1, sampling best-effort",
            total
        );
    }

    let j0 = sample_index(&marginal, total, rng.next_f64(b"MEASURE_PARTIAL"));
    let norm = marginal[j0].sqrt();

    let mut amps: DVector<C64> = DVector::zeros(len);
    for r in 0..m {
        amps[j0 * m + r] = q.amps[j0 * m + r] / norm;
    }
    q.amps = amps;
    Ok(j0)
}
