use quantum::{C64, Gate, Qubit};

fn q(x: usize) -> Qubit {
    Qubit::basis(x, 4).unwrap()
}

#[test]
fn four_wire_transform_of_comb_states() {
    let f = Gate::fourier(4);
    let i = C64::new(0.0, 1.0);

    let lhs = &f * &(0.5 * (q(0) + q(4) + q(8) + q(12)));
    let rhs = 0.5 * (q(0) + q(4) + q(8) + q(12));
    assert!(lhs.is_approx(&rhs));

    let lhs = &f * &(0.5 * (q(1) + q(5) + q(9) + q(13)));
    let rhs = 0.5 * (q(0) + i * q(4) - q(8) - i * q(12));
    assert!(lhs.is_approx(&rhs));

    let lhs = &f * &(0.5 * (q(2) + q(6) + q(10) + q(14)));
    let rhs = 0.5 * (q(0) - q(4) + q(8) - q(12));
    assert!(lhs.is_approx(&rhs));

    let lhs = &f * &(0.5 * (q(3) + q(7) + q(11) + q(15)));
    let rhs = 0.5 * (q(0) - i * q(4) - q(8) + i * q(12));
    assert!(lhs.is_approx(&rhs));
}

#[test]
fn uniform_superposition_transforms_to_zero() {
    for n in 1..=4 {
        let f = Gate::fourier(n);
        let uniform = Gate::hadamard()
            .tensor_pow(n)
            .apply(&Qubit::zero(n))
            .unwrap();
        let transformed = f.apply(&uniform).unwrap();
        assert!(transformed.is_approx(&Qubit::zero(n)), "n = {}", n);
        assert!(transformed.is_normalized());
    }
}

#[test]
fn round_trip_is_the_identity() {
    for n in 1..=4 {
        let f = Gate::fourier(n);
        let round = &f * &f.adjoint();
        assert!(round.is_approx(&Gate::identity_n(n)), "n = {}", n);
    }
}
