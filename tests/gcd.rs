use knapsack_core::math::{gcd, gcd_all, GcdError};

#[test]
fn gcd_of_two_integers() {
    // 0 rather than the mathematically undefined value
    assert_eq!(gcd(0, 0), 0);
    assert_eq!(gcd(7, 0), 7);
    assert_eq!(gcd(7, 1), 1);
    assert_eq!(gcd(7, 7), 7);
    assert_eq!(gcd(22, 11), 11);
    assert_eq!(gcd(1024, 20), 4);
    assert_eq!(gcd(20, 1024), 4);
}

#[test]
fn gcd_ignores_sign() {
    assert_eq!(gcd(-7, 0), 7);
    assert_eq!(gcd(-7, 1), 1);
    assert_eq!(gcd(-7, -7), 7);
    assert_eq!(gcd(-22, -11), 11);
    assert_eq!(gcd(-1024, -20), 4);
    assert_eq!(gcd(-1024, 20), 4);
}

#[test]
fn gcd_handles_extreme_values() {
    assert_eq!(gcd(i64::MIN, 0), 1u64 << 63);
    assert_eq!(gcd(i64::MIN, i64::MIN), 1u64 << 63);
    assert_eq!(gcd(i64::MAX, i64::MAX), i64::MAX as u64);
    assert_eq!(gcd(i64::MIN, 6), 2);
}

#[test]
fn gcd_of_a_collection() {
    assert_eq!(gcd_all([0, 0, 0]).unwrap(), 0);
    assert_eq!(gcd_all([7, 0, 0]).unwrap(), 7);
    assert_eq!(gcd_all([7, 1, 0]).unwrap(), 1);
    assert_eq!(gcd_all([7, 7, 7]).unwrap(), 7);
    assert_eq!(gcd_all([22, 11, 0]).unwrap(), 11);
    assert_eq!(gcd_all([1024, 20, 40]).unwrap(), 4);
    assert_eq!(gcd_all([-7, 0, 0]).unwrap(), 7);
    assert_eq!(gcd_all([-7, -1, 0]).unwrap(), 1);
    assert_eq!(gcd_all([-7, -7, -7]).unwrap(), 7);
    assert_eq!(gcd_all([-22, -11, 0]).unwrap(), 11);
    assert_eq!(gcd_all([-1024, -20, -40]).unwrap(), 4);
}

#[test]
fn gcd_of_a_single_value_is_its_magnitude() {
    assert_eq!(gcd_all([-9]).unwrap(), 9);
    assert_eq!(gcd_all(vec![12]).unwrap(), 12);
}

#[test]
fn gcd_of_nothing_is_rejected() {
    assert_eq!(gcd_all(Vec::<i64>::new()), Err(GcdError::EmptyInput));
    assert_eq!(gcd_all(std::iter::empty()), Err(GcdError::EmptyInput));
}

#[test]
fn gcd_accepts_any_iterator() {
    let weights = vec![4_i64, 2, 2];
    assert_eq!(gcd_all(weights.iter().copied()).unwrap(), 2);
    assert_eq!(gcd_all((1..=5).map(|x| x * 6)).unwrap(), 6);
}
