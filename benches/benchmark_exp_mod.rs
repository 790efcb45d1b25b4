use mpint::bignum::{self, Mpi};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Builds a fixed 2048-bit odd modulus, a ~2047-bit exponent, and a small
/// base — synthetic but representative of the RSA-sized inputs `exp_mod`
/// is built for.
fn bench_inputs() -> (Mpi, Mpi, Mpi) {
    let mut n = Mpi::one();
    bignum::shift_l(&mut n, 2048).unwrap();
    let n = bignum::sub_int(&n, 159).unwrap();

    let mut e = Mpi::one();
    bignum::shift_l(&mut e, 2047).unwrap();
    let e = bignum::add_int(&e, 65537).unwrap();

    let a = Mpi::from_u64(123_456_789).unwrap();

    (a, e, n)
}

pub fn bench_exp_mod(c: &mut Criterion) {
    let (a, e, n) = bench_inputs();

    c.bench_function("exp_mod 2048-bit", |b| {
        b.iter(|| bignum::exp_mod(black_box(&a), black_box(&e), black_box(&n), None).unwrap())
    });
}

criterion_group!(benches, bench_exp_mod);
criterion_main!(benches);
