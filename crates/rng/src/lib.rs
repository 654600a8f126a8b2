use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// Deterministic stream of uniform doubles on `[0, 1)` backed by SHAKE-256.
///
/// The generator is seeded once from an arbitrary byte string and advances a
/// 32-byte state per draw. A domain label is mixed into every output so that
/// different sampling sites (measurement, randomization) consume
/// statistically independent streams even when they share a generator.
pub struct ShakeRng {
    state: [u8; 32],
    step: u64,
}

impl ShakeRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"RNG_INIT"], &mut state);
        Self { state, step: 0 }
    }

    /// Uniform double in `[0, 1)`.
    pub fn next_f64(&mut self, label: &[u8]) -> f64 {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        let mut next_state = self.state;
        shake(&[&state, &step_bytes, b"RNG_STEP"], &mut next_state);
        self.state = next_state;

        let mut out = [0u8; 8];
        shake(&[&self.state, label], &mut out);

        // Top 53 bits scaled by 2^-53, so 1.0 is never produced.
        let mantissa = u64::from_be_bytes(out) >> 11;
        mantissa as f64 / (1u64 << 53) as f64
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}
