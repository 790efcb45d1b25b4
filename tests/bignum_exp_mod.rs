use mpint::bignum::{add_mpi, exp_mod, mod_mpi, mul_mpi, Mpi};

#[test]
fn s3_modular_exponentiation() {
    let a = Mpi::from_u64(4).unwrap();
    let e = Mpi::from_u64(13).unwrap();
    let n = Mpi::from_u64(497).unwrap();

    assert_eq!(exp_mod(&a, &e, &n, None).unwrap(), Mpi::from_u64(445).unwrap());
}

#[test]
fn exponent_one_is_reduction() {
    let a = Mpi::from_u64(123_456_789).unwrap();
    let n = Mpi::from_u64(997).unwrap();
    let one = Mpi::from_u64(1).unwrap();

    assert_eq!(exp_mod(&a, &one, &n, None).unwrap(), mod_mpi(&a, &n).unwrap());
}

#[test]
fn exponent_zero_is_one() {
    let a = Mpi::from_u64(9999).unwrap();
    let n = Mpi::from_u64(101).unwrap();
    let zero = Mpi::zero();

    assert_eq!(exp_mod(&a, &zero, &n, None).unwrap(), Mpi::from_u64(1).unwrap());
}

#[test]
fn exponent_addition_law() {
    let a = Mpi::from_u64(7).unwrap();
    let n = Mpi::from_u64(1009).unwrap();
    let e1 = Mpi::from_u64(12).unwrap();
    let e2 = Mpi::from_u64(31).unwrap();
    let e_sum = add_mpi(&e1, &e2).unwrap();

    let lhs = exp_mod(&a, &e_sum, &n, None).unwrap();
    let r1 = exp_mod(&a, &e1, &n, None).unwrap();
    let r2 = exp_mod(&a, &e2, &n, None).unwrap();
    let rhs = mod_mpi(&mul_mpi(&r1, &r2).unwrap(), &n).unwrap();

    assert_eq!(lhs, rhs);
}

#[test]
fn even_modulus_is_rejected() {
    let a = Mpi::from_u64(3).unwrap();
    let e = Mpi::from_u64(5).unwrap();
    let n = Mpi::from_u64(100).unwrap();
    assert!(exp_mod(&a, &e, &n, None).is_err());
}

#[test]
fn negative_exponent_is_rejected() {
    let a = Mpi::from_u64(3).unwrap();
    let e = Mpi::from_i64(-1).unwrap();
    let n = Mpi::from_u64(101).unwrap();
    assert!(exp_mod(&a, &e, &n, None).is_err());
}

#[test]
fn cached_rr_matches_computed_rr() {
    let n = Mpi::from_u64(1009).unwrap();
    let rr = mpint::bignum::montg_rr(&n).unwrap();

    let a = Mpi::from_u64(55).unwrap();
    let e = Mpi::from_u64(17).unwrap();

    let without_cache = exp_mod(&a, &e, &n, None).unwrap();
    let with_cache = exp_mod(&a, &e, &n, Some(&rr)).unwrap();
    assert_eq!(without_cache, with_cache);
}
