use nalgebra::DMatrix;
use quantum::{C64, Gate};

fn real_gate(rows: usize, entries: &[f64]) -> Gate {
    let data: Vec<C64> = entries.iter().map(|&x| C64::new(x, 0.0)).collect();
    Gate::from_matrix(DMatrix::from_row_slice(rows, rows, &data)).unwrap()
}

#[test]
fn tensor_powers_of_hadamard() {
    let byhand = (1.0f64 / 2.0).sqrt() * real_gate(2, &[1.0, 1.0, 1.0, -1.0]);
    let h = Gate::hadamard().tensor_pow(1);
    assert!(h.is_approx(&byhand));
    assert!(h.is_unitary());

    #[rustfmt::skip]
    let byhand = (1.0f64 / 4.0).sqrt() * real_gate(4, &[
        1.0,  1.0,  1.0,  1.0,
        1.0, -1.0,  1.0, -1.0,
        1.0,  1.0, -1.0, -1.0,
        1.0, -1.0, -1.0,  1.0,
    ]);
    let h = Gate::hadamard().tensor_pow(2);
    assert!(h.is_approx(&byhand));
    assert!(h.is_unitary());

    #[rustfmt::skip]
    let byhand = (1.0f64 / 8.0).sqrt() * real_gate(8, &[
        1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0,
        1.0, -1.0,  1.0, -1.0,  1.0, -1.0,  1.0, -1.0,
        1.0,  1.0, -1.0, -1.0,  1.0,  1.0, -1.0, -1.0,
        1.0, -1.0, -1.0,  1.0,  1.0, -1.0, -1.0,  1.0,
        1.0,  1.0,  1.0,  1.0, -1.0, -1.0, -1.0, -1.0,
        1.0, -1.0,  1.0, -1.0, -1.0,  1.0, -1.0,  1.0,
        1.0,  1.0, -1.0, -1.0, -1.0, -1.0,  1.0,  1.0,
        1.0, -1.0, -1.0,  1.0, -1.0,  1.0,  1.0, -1.0,
    ]);
    let h = Gate::hadamard().tensor_pow(3);
    assert!(h.is_approx(&byhand));
    assert!(h.is_unitary());
}

#[test]
fn apply_to_positions_a_hadamard() {
    let s = 0.5f64.sqrt();

    #[rustfmt::skip]
    let h0 = s * real_gate(4, &[
        1.0,  0.0,  1.0,  0.0,
        0.0,  1.0,  0.0,  1.0,
        1.0,  0.0, -1.0,  0.0,
        0.0,  1.0,  0.0, -1.0,
    ]);

    #[rustfmt::skip]
    let h1 = s * real_gate(4, &[
        1.0,  1.0,  0.0,  0.0,
        1.0, -1.0,  0.0,  0.0,
        0.0,  0.0,  1.0,  1.0,
        0.0,  0.0,  1.0, -1.0,
    ]);

    assert!(Gate::hadamard().apply_to(0, 2).unwrap().is_approx(&h0));
    assert!(Gate::hadamard().apply_to(1, 2).unwrap().is_approx(&h1));
    assert!(h0.is_unitary());
    assert!(h1.is_unitary());

    let wide = Gate::hadamard().tensor_pow(2).apply_to(0, 3).unwrap();
    let byhand = Gate::hadamard().tensor_pow(2).tensor(&Gate::identity());
    assert!(wide.is_approx(&byhand));
}

#[test]
fn hadamard_conjugation_identities() {
    let h = Gate::hadamard();
    assert!((&h * &h).is_approx(&Gate::identity()));
    assert!((&(&h * &Gate::pauli_x()) * &h).is_approx(&Gate::pauli_z()));
    assert!((&(&h * &Gate::pauli_z()) * &h).is_approx(&Gate::pauli_x()));
}

#[test]
fn hadamards_reverse_the_cnot_control() {
    let h2 = Gate::hadamard().tensor_pow(2);
    let lhs = &(&h2 * &Gate::cnot()) * &h2;
    let rhs = Gate::controlled(0, 1, 2, &Gate::pauli_x()).unwrap();
    assert!(lhs.is_approx(&rhs));
}

#[test]
fn controlled_z_is_symmetric() {
    let z = Gate::pauli_z();
    let cz_down = Gate::controlled(1, 0, 2, &z).unwrap();
    let cz_up = Gate::controlled(0, 1, 2, &z).unwrap();
    assert!(cz_down.is_approx(&cz_up));

    // H on the target turns controlled-Z into CNOT
    let ht = Gate::hadamard().apply_to(1, 2).unwrap();
    let conjugated = &(&ht * &cz_down) * &ht;
    assert!(conjugated.is_approx(&Gate::cnot()));
}
