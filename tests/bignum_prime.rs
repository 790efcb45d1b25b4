use mpint::bignum::{gen_prime, is_prime, shift_l, sub_int, Error, Mpi};
use mpint::rng::Csprng;

fn rng() -> Csprng {
    Csprng::from_seed([0x5A; 32])
}

#[test]
fn small_known_primes_pass() {
    let mut r = rng();
    for p in [2u64, 3, 5, 7, 11, 13, 104_729] {
        assert!(is_prime(&Mpi::from_u64(p).unwrap(), &mut r).is_ok());
    }
}

#[test]
fn small_known_composites_fail() {
    let mut r = rng();
    for c in [0u64, 1, 4, 6, 9, 15, 100, 1_000_000] {
        assert_eq!(
            is_prime(&Mpi::from_u64(c).unwrap(), &mut r).unwrap_err(),
            Error::NotAcceptable
        );
    }
}

#[test]
fn s6_mersenne_521_is_prime() {
    let mut n = Mpi::one();
    shift_l(&mut n, 521).unwrap();
    let n = sub_int(&n, 1).unwrap();

    let mut r = rng();
    assert!(is_prime(&n, &mut r).is_ok());
}

#[test]
fn s6_two_to_the_64_minus_1_is_composite() {
    let mut n = Mpi::one();
    shift_l(&mut n, 64).unwrap();
    let n = sub_int(&n, 1).unwrap();

    let mut r = rng();
    assert_eq!(is_prime(&n, &mut r).unwrap_err(), Error::NotAcceptable);
}

#[test]
fn gen_prime_rejects_tiny_width() {
    let mut r = rng();
    assert_eq!(gen_prime(2, false, &mut r).unwrap_err(), Error::BadInputData);
}

#[test]
fn gen_prime_produces_a_prime_of_the_requested_width() {
    let mut r = rng();
    let p = gen_prime(64, false, &mut r).unwrap();

    assert_eq!(mpint::bignum::bitlen(&p), 64);
    assert_eq!(mpint::bignum::get_bit(&p, 0), 1);

    let mut r2 = rng();
    assert!(is_prime(&p, &mut r2).is_ok());
}

#[test]
fn gen_prime_dh_flag_yields_a_safe_prime() {
    let mut r = rng();
    let p = gen_prime(48, true, &mut r).unwrap();

    assert_eq!(mpint::bignum::bitlen(&p), 48);
    assert_eq!(mpint::bignum::get_bit(&p, 1), 1);

    let half = {
        let mut y = sub_int(&p, 1).unwrap();
        mpint::bignum::shift_r(&mut y, 1);
        y
    };

    let mut r2 = rng();
    assert!(is_prime(&p, &mut r2).is_ok());
    let mut r3 = rng();
    assert!(is_prime(&half, &mut r3).is_ok());
}
