use mpint::bignum::{bitlen, get_bit, lsb, set_bit, shift_l, shift_r, Mpi};

#[test]
fn bitlen_of_zero_is_zero() {
    assert_eq!(bitlen(&Mpi::zero()), 0);
}

#[test]
fn bitlen_tracks_msb() {
    let x = Mpi::from_u64(0b1011).unwrap();
    assert_eq!(bitlen(&x), 4);

    let x = Mpi::from_u64(1).unwrap();
    assert_eq!(bitlen(&x), 1);
}

#[test]
fn get_bit_beyond_bitlen_is_zero() {
    let x = Mpi::from_u64(5).unwrap();
    assert_eq!(get_bit(&x, 0), 1);
    assert_eq!(get_bit(&x, 1), 0);
    assert_eq!(get_bit(&x, 2), 1);
    assert_eq!(get_bit(&x, 500), 0);
}

#[test]
fn set_bit_round_trips() {
    let mut x = Mpi::zero();
    set_bit(&mut x, 130, 1).unwrap();
    assert_eq!(get_bit(&x, 130), 1);
    assert_eq!(bitlen(&x), 131);

    set_bit(&mut x, 130, 0).unwrap();
    assert_eq!(get_bit(&x, 130), 0);
    assert!(x.is_zero());
}

#[test]
fn set_bit_rejects_bad_value() {
    let mut x = Mpi::zero();
    assert!(set_bit(&mut x, 0, 2).is_err());
}

#[test]
fn lsb_finds_trailing_zeros() {
    assert_eq!(lsb(&Mpi::zero()), 0);
    assert_eq!(lsb(&Mpi::from_u64(8).unwrap()), 3);
    assert_eq!(lsb(&Mpi::from_u64(1).unwrap()), 0);
}

#[test]
fn shift_l_is_multiply_by_power_of_two() {
    let mut x = Mpi::from_u64(3).unwrap();
    shift_l(&mut x, 10).unwrap();
    assert_eq!(x.to_u64(), Some(3 << 10));
}

#[test]
fn shift_r_is_floor_divide_by_power_of_two() {
    let mut x = Mpi::from_u64(1025).unwrap();
    shift_r(&mut x, 3);
    assert_eq!(x.to_u64(), Some(1025 >> 3));
}

#[test]
fn shift_r_past_bitlen_is_zero() {
    let mut x = Mpi::from_u64(7).unwrap();
    shift_r(&mut x, 100);
    assert!(x.is_zero());
}
