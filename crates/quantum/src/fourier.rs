use nalgebra::DMatrix;

use crate::gate::Gate;
use crate::qubit::C64;

impl Gate {
    /// Quantum Fourier transform on `wires` qubits:
    /// `F[x][y] = N^{-1/2}·exp(2πi·x·y/N)` with `N = 2^wires`.
    ///
    /// The matrix is symmetric, so only the upper triangle is computed and
    /// then mirrored.
    pub fn fourier(wires: usize) -> Gate {
        let dim = 1usize << wires;
        let scale = 1.0 / (dim as f64).sqrt();
        let mut mat = DMatrix::zeros(dim, dim);
        for x in 0..dim {
            for y in x..dim {
                let theta = std::f64::consts::TAU * ((x * y) % dim) as f64 / dim as f64;
                let v = C64::from_polar(scale, theta);
                mat[(x, y)] = v;
                mat[(y, x)] = v;
            }
        }
        Gate { mat }
    }
}
