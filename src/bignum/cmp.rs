//! Magnitude and signed comparison of MPIs.

use std::cmp::Ordering;

use crate::bignum::config::SLimb;
use crate::bignum::mpi::Mpi;

/// Compares `|a|` against `|b|`.
pub fn cmp_abs(a: &Mpi, b: &Mpi) -> Ordering {
    let la = a.used_len();
    let lb = b.used_len();

    if la != lb {
        return la.cmp(&lb);
    }

    for i in (0..la).rev() {
        let (wa, wb) = (a.limb(i), b.limb(i));
        if wa != wb {
            return wa.cmp(&wb);
        }
    }

    Ordering::Equal
}

/// Compares `a` against `b`, honoring sign. Canonical zero always has
/// `sign == 1`, so zero compares as non-negative regardless of which side
/// is zero.
pub fn cmp_mpi(a: &Mpi, b: &Mpi) -> Ordering {
    let a_zero = a.is_zero();
    let b_zero = b.is_zero();

    if a_zero && b_zero {
        return Ordering::Equal;
    }

    let a_sign = if a_zero { 1 } else { a.sign() };
    let b_sign = if b_zero { 1 } else { b.sign() };

    if a_sign != b_sign {
        return a_sign.cmp(&b_sign);
    }

    let mag = cmp_abs(a, b);
    if a_sign > 0 { mag } else { mag.reverse() }
}

/// Compares `a` against the signed scalar `z`.
pub fn cmp_int(a: &Mpi, z: SLimb) -> Ordering {
    let b = Mpi::from_i64(z as i64).expect("single-limb scalar never overflows MAX_LIMBS");
    cmp_mpi(a, &b)
}
