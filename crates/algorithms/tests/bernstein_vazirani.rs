use algorithms::{bernstein_vazirani, dot_product_table};
use quantum::num::bitwise_dot;
use rng::ShakeRng;

#[test]
fn recovers_the_hidden_string_in_one_query() {
    let mut rng = ShakeRng::new(b"bv");
    assert_eq!(bernstein_vazirani(25, 5, &mut rng).unwrap(), 25);
}

#[test]
fn recovers_every_hidden_string_on_three_wires() {
    let mut rng = ShakeRng::new(b"bv-sweep");
    for a in 0..8 {
        assert_eq!(bernstein_vazirani(a, 3, &mut rng).unwrap(), a, "a = {}", a);
    }
}

#[test]
fn rejects_oversized_hidden_strings() {
    let mut rng = ShakeRng::new(b"bv-bad");
    assert!(bernstein_vazirani(8, 3, &mut rng).is_err());
    assert!(bernstein_vazirani(1, 0, &mut rng).is_err());
}

#[test]
fn the_oracle_table_is_the_dot_product() {
    let a = 25;
    let table = dot_product_table(a, 5);
    assert_eq!(table.len(), 32);
    for (x, &v) in table.iter().enumerate() {
        assert_eq!(v as u64, bitwise_dot(a as u64, x as u64));
    }
}
