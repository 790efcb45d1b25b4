use mpint::bignum::{gcd, inv_mod, mod_mpi, mul_mpi, Error, Mpi};

#[test]
fn s4_gcd_of_coprime_values() {
    let a = Mpi::from_u64(0xDEADBEEF).unwrap();
    let b = Mpi::from_u64(0xCAFEBABE).unwrap();
    assert_eq!(gcd(&a, &b).unwrap(), Mpi::from_u64(1).unwrap());
}

#[test]
fn gcd_with_zero_is_the_other_operand() {
    let a = Mpi::from_u64(123_456).unwrap();
    let zero = Mpi::zero();
    assert_eq!(gcd(&a, &zero).unwrap(), a);
    assert_eq!(gcd(&zero, &a).unwrap(), a);
}

#[test]
fn gcd_scales_linearly() {
    let a = Mpi::from_u64(12).unwrap();
    let b = Mpi::from_u64(18).unwrap();
    let k = Mpi::from_u64(5).unwrap();

    let g = gcd(&a, &b).unwrap();
    let ka = mul_mpi(&a, &k).unwrap();
    let kb = mul_mpi(&b, &k).unwrap();
    let kg = gcd(&ka, &kb).unwrap();

    assert_eq!(kg, mul_mpi(&g, &k).unwrap());
}

#[test]
fn s5_modular_inverse() {
    let a = Mpi::from_u64(3).unwrap();
    let n = Mpi::from_u64(11).unwrap();

    let inv = inv_mod(&a, &n).unwrap();
    assert_eq!(inv, Mpi::from_u64(4).unwrap());

    let product = mul_mpi(&a, &inv).unwrap();
    assert_eq!(mod_mpi(&product, &n).unwrap(), Mpi::from_u64(1).unwrap());
}

#[test]
fn inv_mod_rejects_non_invertible() {
    let a = Mpi::from_u64(4).unwrap();
    let n = Mpi::from_u64(8).unwrap();
    assert_eq!(inv_mod(&a, &n).unwrap_err(), Error::NotAcceptable);
}

#[test]
fn inv_mod_rejects_n_leq_one() {
    let a = Mpi::from_u64(3).unwrap();
    assert_eq!(
        inv_mod(&a, &Mpi::from_u64(1).unwrap()).unwrap_err(),
        Error::BadInputData
    );
}
