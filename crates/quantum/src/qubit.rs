use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::DVector;
use num_complex::Complex64;
use rng::ShakeRng;

use crate::error::{QuantumError, QuantumResult};
use crate::num::{is_one, is_zero, log2, TOLERANCE};

pub type C64 = Complex64;

/// Pure state of `n` qubits: `2^n` complex amplitudes, unit norm.
///
/// Wire 0 is the leftmost (most significant) tensor factor, so the basis
/// state `|x⟩_n` puts its 1 at index `x` with the wire-0 value in the most
/// significant bit.
#[derive(Clone, Debug, PartialEq)]
pub struct Qubit {
    pub(crate) amps: DVector<C64>,
}

impl Qubit {
    /// Single qubit `c0|0⟩ + c1|1⟩`. Amplitudes are taken as given; callers
    /// that need unit norm check `is_normalized`.
    pub fn single(c0: C64, c1: C64) -> Self {
        Self {
            amps: DVector::from_vec(vec![c0, c1]),
        }
    }

    /// `|0…0⟩` on `wires` qubits.
    pub fn zero(wires: usize) -> Self {
        let mut amps = DVector::zeros(1 << wires);
        amps[0] = C64::new(1.0, 0.0);
        Self { amps }
    }

    /// Computational basis state `|x⟩_n`.
    pub fn basis(x: usize, wires: usize) -> QuantumResult<Self> {
        if wires == 0 {
            return Err(QuantumError::InvalidArgument(
                "basis state needs at least one wire".into(),
            ));
        }
        let dim = 1usize << wires;
        if x >= dim {
            return Err(QuantumError::InvalidArgument(format!(
                "basis index {} out of range for {} wires",
                x, wires
            )));
        }
        let mut amps = DVector::zeros(dim);
        amps[x] = C64::new(1.0, 0.0);
        Ok(Self { amps })
    }

    pub fn from_vector(amps: DVector<C64>) -> QuantumResult<Self> {
        if amps.is_empty() {
            return Err(QuantumError::InvalidArgument(
                "empty amplitude vector".into(),
            ));
        }
        Ok(Self { amps })
    }

    pub fn amplitudes(&self) -> &DVector<C64> {
        &self.amps
    }

    pub fn len(&self) -> usize {
        self.amps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amps.is_empty()
    }

    /// Number of wires, `log2` of the amplitude count.
    pub fn wires(&self) -> usize {
        log2(self.amps.len() as u64) as usize
    }

    pub fn amp(&self, i: usize) -> C64 {
        self.amps[i]
    }

    /// Canonical tensor product: `w[i·|v| + j] = u[i]·v[j]`.
    pub fn tensor(&self, other: &Qubit) -> Qubit {
        Qubit {
            amps: self.amps.kronecker(&other.amps),
        }
    }

    /// Inner product `⟨u|v⟩ = ū·v`.
    pub fn inner(&self, other: &Qubit) -> C64 {
        assert_eq!(self.len(), other.len(), "inner product length mismatch");
        self.amps.dotc(&other.amps)
    }

    pub fn norm(&self) -> f64 {
        self.amps.norm()
    }

    pub fn normalize(&mut self) {
        self.amps.normalize_mut();
    }

    pub fn is_normalized(&self) -> bool {
        is_one(self.norm())
    }

    /// Resample every amplitude i.i.d. symmetric on the complex plane, then
    /// normalize. Test scaffolding.
    pub fn randomize(&mut self, rng: &mut ShakeRng) {
        for a in self.amps.iter_mut() {
            let re = 2.0 * rng.next_f64(b"RAND_RE") - 1.0;
            let im = 2.0 * rng.next_f64(b"RAND_IM") - 1.0;
            *a = C64::new(re, im);
        }
        self.normalize();
    }

    /// True when some basis index carries squared amplitude ≈ 1, i.e. the
    /// state is a computational basis state up to a global phase.
    pub fn is_pure_state(&self) -> bool {
        self.amps.iter().any(|a| is_one(a.norm_sqr()))
    }

    pub fn is_orthogonal(&self, other: &Qubit) -> bool {
        is_zero(self.inner(other).norm())
    }

    /// `‖a − b‖ ≤ ε·max(‖a‖, ‖b‖, 1)`.
    pub fn is_approx(&self, other: &Qubit) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let diff = (&self.amps - &other.amps).norm();
        diff <= TOLERANCE * self.norm().max(other.norm()).max(1.0)
    }
}

impl Default for Qubit {
    fn default() -> Self {
        Self::single(C64::new(1.0, 0.0), C64::new(0.0, 0.0))
    }
}

impl Add for Qubit {
    type Output = Qubit;

    fn add(self, rhs: Qubit) -> Qubit {
        assert_eq!(self.len(), rhs.len(), "qubit sum length mismatch");
        Qubit {
            amps: self.amps + rhs.amps,
        }
    }
}

impl Sub for Qubit {
    type Output = Qubit;

    fn sub(self, rhs: Qubit) -> Qubit {
        assert_eq!(self.len(), rhs.len(), "qubit difference length mismatch");
        Qubit {
            amps: self.amps - rhs.amps,
        }
    }
}

impl Neg for Qubit {
    type Output = Qubit;

    fn neg(self) -> Qubit {
        Qubit { amps: -self.amps }
    }
}

impl Mul<Qubit> for f64 {
    type Output = Qubit;

    fn mul(self, rhs: Qubit) -> Qubit {
        Qubit {
            amps: rhs.amps * C64::new(self, 0.0),
        }
    }
}

impl Mul<Qubit> for C64 {
    type Output = Qubit;

    fn mul(self, rhs: Qubit) -> Qubit {
        Qubit {
            amps: rhs.amps * self,
        }
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.wires();
        for (i, a) in self.amps.iter().enumerate() {
            writeln!(
                f,
                "|{:0width$b}⟩ {:+.4}{:+.4}i",
                i,
                a.re,
                a.im,
                width = width
            )?;
        }
        Ok(())
    }
}
