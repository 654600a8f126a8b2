use std::fmt;
use std::ops::{Add, Mul};

use nalgebra::DMatrix;

use crate::error::{QuantumError, QuantumResult};
use crate::num::{log2, TOLERANCE};
use crate::qubit::{Qubit, C64};

/// Dense `2^n × 2^n` complex matrix intended to be unitary, applied to
/// qubits by matrix–vector product. Wire 0 is the most significant bit of
/// the basis index, matching [`Qubit`].
#[derive(Clone, Debug, PartialEq)]
pub struct Gate {
    pub(crate) mat: DMatrix<C64>,
}

fn c(re: f64, im: f64) -> C64 {
    C64::new(re, im)
}

/// Permutation matrix sending basis column `x` to basis row `map(x)`.
pub(crate) fn basis_map(dim: usize, map: impl Fn(usize) -> usize) -> DMatrix<C64> {
    let mut mat = DMatrix::zeros(dim, dim);
    for col in 0..dim {
        mat[(map(col), col)] = c(1.0, 0.0);
    }
    mat
}

impl Gate {
    pub fn from_matrix(mat: DMatrix<C64>) -> QuantumResult<Self> {
        if mat.is_empty() {
            return Err(QuantumError::InvalidArgument("empty gate matrix".into()));
        }
        Ok(Self { mat })
    }

    pub fn matrix(&self) -> &DMatrix<C64> {
        &self.mat
    }

    pub fn rows(&self) -> usize {
        self.mat.nrows()
    }

    pub fn cols(&self) -> usize {
        self.mat.ncols()
    }

    /// Number of wires the gate acts on, `log2` of the row count.
    pub fn wires(&self) -> usize {
        log2(self.mat.nrows() as u64) as usize
    }

    // ---- named gates ----

    pub fn identity() -> Self {
        Self::identity_n(1)
    }

    /// `2^wires × 2^wires` identity.
    pub fn identity_n(wires: usize) -> Self {
        let dim = 1 << wires;
        Self {
            mat: DMatrix::identity(dim, dim),
        }
    }

    /// |0>→|1>, |1>→|0>
    pub fn pauli_x() -> Self {
        Self {
            mat: DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)]),
        }
    }

    pub fn pauli_y() -> Self {
        Self {
            mat: DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0)]),
        }
    }

    /// diag(1, -1)
    pub fn pauli_z() -> Self {
        Self {
            mat: DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)]),
        }
    }

    pub fn hadamard() -> Self {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        Self {
            mat: DMatrix::from_row_slice(2, 2, &[c(s, 0.0), c(s, 0.0), c(s, 0.0), c(-s, 0.0)]),
        }
    }

    /// diag(1, exp(2πi/k)).
    pub fn rotation(k: usize) -> Self {
        assert!(k >= 1, "rotation denominator must be positive");
        let theta = std::f64::consts::TAU / k as f64;
        Self {
            mat: DMatrix::from_row_slice(
                2,
                2,
                &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), C64::from_polar(1.0, theta)],
            ),
        }
    }

    /// Phase gate, `rotation(4)`: diag(1, i).
    pub fn phase() -> Self {
        Self::rotation(4)
    }

    /// π/8 gate, `rotation(8)`.
    pub fn pi_eighth() -> Self {
        Self::rotation(8)
    }

    /// |10>→|11>, |11>→|10>; control on wire 0, target on wire 1.
    pub fn cnot() -> Self {
        Self {
            mat: basis_map(4, |x| if x & 0b10 != 0 { x ^ 1 } else { x }),
        }
    }

    /// |01>↔|10>
    pub fn swap() -> Self {
        Self {
            mat: basis_map(4, |x| match x {
                0b01 => 0b10,
                0b10 => 0b01,
                _ => x,
            }),
        }
    }

    /// Toffoli: flips wire 2 when wires 0 and 1 are both set.
    pub fn toffoli() -> Self {
        Self {
            mat: basis_map(8, |x| if x & 0b110 == 0b110 { x ^ 1 } else { x }),
        }
    }

    /// Fredkin: swaps wires 1 and 2 when wire 0 is set.
    pub fn fredkin() -> Self {
        Self {
            mat: basis_map(8, |x| match x {
                0b101 => 0b110,
                0b110 => 0b101,
                _ => x,
            }),
        }
    }

    // ---- combinators ----

    /// Kronecker product `(A ⊗ B)[i·r_B + k][j·c_B + l] = A[i][j]·B[k][l]`.
    pub fn tensor(&self, rhs: &Gate) -> Gate {
        Gate {
            mat: self.mat.kronecker(&rhs.mat),
        }
    }

    /// `n`-fold tensor power, `n ≥ 1`.
    pub fn tensor_pow(&self, n: usize) -> Gate {
        assert!(n >= 1, "tensor power needs at least one factor");
        let mut out = self.clone();
        for _ in 1..n {
            out = out.tensor(self);
        }
        out
    }

    /// Embed into an `n`-wire register with the gate's wires at positions
    /// `k … k+m−1`: `I_{2^k} ⊗ U ⊗ I_{2^(n−k−m)}`.
    pub fn apply_to(&self, k: usize, n: usize) -> QuantumResult<Gate> {
        let m = self.wires();
        if self.rows() != self.cols() || self.rows() != 1 << m {
            return Err(QuantumError::InvalidArgument(format!(
                "cannot position a {}x{} gate on wires",
                self.rows(),
                self.cols()
            )));
        }
        if k + m > n {
            return Err(QuantumError::InvalidArgument(format!(
                "gate on wires {}..{} does not fit a {}-wire register",
                k,
                k + m,
                n
            )));
        }
        let mut out = self.clone();
        if k > 0 {
            out = Gate::identity_n(k).tensor(&out);
        }
        let rest = n - k - m;
        if rest > 0 {
            out = out.tensor(&Gate::identity_n(rest));
        }
        Ok(out)
    }

    /// Matrix product `self · rhs`, checked.
    pub fn compose(&self, rhs: &Gate) -> QuantumResult<Gate> {
        if self.cols() != rhs.rows() {
            return Err(QuantumError::DimensionMismatch {
                expected: self.cols(),
                actual: rhs.rows(),
            });
        }
        Ok(Gate {
            mat: &self.mat * &rhs.mat,
        })
    }

    /// Gate application `self · q`, checked.
    pub fn apply(&self, q: &Qubit) -> QuantumResult<Qubit> {
        if self.cols() != q.len() {
            return Err(QuantumError::DimensionMismatch {
                expected: self.cols(),
                actual: q.len(),
            });
        }
        Qubit::from_vector(&self.mat * q.amplitudes())
    }

    pub fn transpose(&self) -> Gate {
        Gate {
            mat: self.mat.transpose(),
        }
    }

    pub fn conjugate(&self) -> Gate {
        Gate {
            mat: self.mat.conjugate(),
        }
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> Gate {
        Gate {
            mat: self.mat.adjoint(),
        }
    }

    /// `G · G* ≈ I` within tolerance.
    pub fn is_unitary(&self) -> bool {
        if self.rows() != self.cols() {
            return false;
        }
        let product = Gate {
            mat: &self.mat * self.mat.adjoint(),
        };
        product.is_approx(&Gate::identity_n(self.wires()))
    }

    /// Reports on stderr when a gate expected to be unitary is not. The
    /// check never fails the caller; drifted gates keep operating
    /// best-effort.
    pub fn check_unitary(&self, context: &str) -> bool {
        let ok = self.is_unitary();
        if !ok {
            eprintln!("{}: gate failed its unitarity check", context);
        }
        ok
    }

    /// Frobenius-norm comparison: `‖A − B‖ ≤ ε·max(‖A‖, ‖B‖, 1)`.
    pub fn is_approx(&self, other: &Gate) -> bool {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return false;
        }
        let diff = (&self.mat - &other.mat).norm();
        diff <= TOLERANCE * self.mat.norm().max(other.mat.norm()).max(1.0)
    }
}

impl Mul<&Gate> for &Gate {
    type Output = Gate;

    fn mul(self, rhs: &Gate) -> Gate {
        assert_eq!(self.cols(), rhs.rows(), "gate product dimension mismatch");
        Gate {
            mat: &self.mat * &rhs.mat,
        }
    }
}

impl Mul for Gate {
    type Output = Gate;

    fn mul(self, rhs: Gate) -> Gate {
        &self * &rhs
    }
}

impl Mul<&Qubit> for &Gate {
    type Output = Qubit;

    fn mul(self, rhs: &Qubit) -> Qubit {
        assert_eq!(self.cols(), rhs.len(), "gate application dimension mismatch");
        let mut out = rhs.clone();
        out.amps = &self.mat * rhs.amplitudes();
        out
    }
}

impl Mul<Qubit> for &Gate {
    type Output = Qubit;

    fn mul(self, rhs: Qubit) -> Qubit {
        self * &rhs
    }
}

impl Add for Gate {
    type Output = Gate;

    fn add(self, rhs: Gate) -> Gate {
        assert_eq!(
            (self.rows(), self.cols()),
            (rhs.rows(), rhs.cols()),
            "gate sum dimension mismatch"
        );
        Gate {
            mat: self.mat + rhs.mat,
        }
    }
}

impl Mul<Gate> for f64 {
    type Output = Gate;

    fn mul(self, rhs: Gate) -> Gate {
        Gate {
            mat: rhs.mat * c(self, 0.0),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            for col in 0..self.cols() {
                let a = self.mat[(r, col)];
                write!(f, "{:+.3}{:+.3}i  ", a.re, a.im)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
