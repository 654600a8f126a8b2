//! State-level interference checks for the Deutsch circuit: two Hadamard
//! layers around one oracle query leave the register in an exact basis
//! state whose leading wire encodes the function class.

use quantum::{Gate, Qubit};

fn run(f: &[usize]) -> Qubit {
    let h = Gate::hadamard().tensor_pow(2);
    let uf = Gate::oracle(f, 1).unwrap();
    let x = h.apply(&Qubit::basis(1, 2).unwrap()).unwrap();
    let x = uf.apply(&x).unwrap();
    h.apply(&x).unwrap()
}

#[test]
fn constant_functions_land_on_the_zero_wire() {
    let r0 = Qubit::basis(1, 2).unwrap();
    assert!(run(&[0, 0]).is_approx(&r0));
    assert!(run(&[1, 1]).is_approx(&-r0));
}

#[test]
fn balanced_functions_flip_the_leading_wire() {
    let r1 = Qubit::basis(3, 2).unwrap();
    assert!(run(&[0, 1]).is_approx(&r1));
    assert!(run(&[1, 0]).is_approx(&-r1));
}

#[test]
fn every_intermediate_state_stays_normalized() {
    for f in [[0, 0], [1, 1], [0, 1], [1, 0]] {
        let h = Gate::hadamard().tensor_pow(2);
        let uf = Gate::oracle(&f, 1).unwrap();
        let mut x = Qubit::basis(1, 2).unwrap();
        for gate in [&h, &uf, &h] {
            x = gate.apply(&x).unwrap();
            assert!(x.is_normalized(), "f = {:?}", f);
        }
    }
}
