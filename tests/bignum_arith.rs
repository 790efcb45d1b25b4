use mpint::bignum::{add_mpi, mul_mpi, sub_mpi, Mpi};

#[test]
fn add_then_subtract_is_identity() {
    let a = Mpi::from_i64(123_456_789).unwrap();
    let b = Mpi::from_i64(-987_654_321).unwrap();

    let sum = add_mpi(&a, &b).unwrap();
    let back = sub_mpi(&sum, &b).unwrap();
    assert_eq!(back, a);
}

#[test]
fn add_negation_is_zero() {
    let a = Mpi::from_i64(42).unwrap();
    let neg_a = Mpi::from_i64(-42).unwrap();
    let sum = add_mpi(&a, &neg_a).unwrap();
    assert!(sum.is_zero());
}

#[test]
fn s1_carry_propagates_into_a_new_limb() {
    // 0xFFFFFFFFFFFFFFFF + 1 == 0x10000000000000000
    let a = Mpi::from_u64(u64::MAX).unwrap();
    let one = Mpi::from_u64(1).unwrap();
    let sum = add_mpi(&a, &one).unwrap();

    let mut want = Mpi::one();
    mpint::bignum::shift_l(&mut want, 64).unwrap();
    assert_eq!(sum, want);
}

#[test]
fn multiply_by_zero_is_canonical_zero() {
    let a = Mpi::from_i64(-999).unwrap();
    let zero = Mpi::zero();
    let product = mul_mpi(&a, &zero).unwrap();
    assert!(product.is_zero());
    assert_eq!(product.sign(), 1);
}

#[test]
fn multiply_sign_rules() {
    let a = Mpi::from_i64(-6).unwrap();
    let b = Mpi::from_i64(7).unwrap();
    let product = mul_mpi(&a, &b).unwrap();
    assert_eq!(product, Mpi::from_i64(-42).unwrap());
}

#[test]
fn aliasing_add_to_self_doubles() {
    let a = Mpi::from_i64(17).unwrap();
    let doubled = add_mpi(&a, &a).unwrap();
    assert_eq!(doubled, Mpi::from_i64(34).unwrap());
}
