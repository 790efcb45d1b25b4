//! Unsigned add/sub kernels and their signed composition.

use crate::bignum::cmp::cmp_abs;
use crate::bignum::config::SLimb;
use crate::bignum::error::{Error, Result};
use crate::bignum::limb::{add_carry, sub_borrow};
use crate::bignum::mpi::Mpi;
use std::cmp::Ordering;

/// `X = |A| + |B|`. Result always has `sign == 1`.
pub fn add_abs(a: &Mpi, b: &Mpi) -> Result<Mpi> {
    let (big, small) = if a.used_len() >= b.used_len() { (a, b) } else { (b, a) };

    let mut out = Mpi::new();
    out.grow(big.used_len() + 1)?;

    let mut carry = 0;
    for i in 0..big.used_len() {
        let (sum, c) = add_carry(big.limb(i), small.limb(i), carry);
        out.limbs[i] = sum;
        carry = c;
    }
    out.limbs[big.used_len()] = carry;

    out.sign = 1;
    Ok(out)
}

/// `X = |A| - |B|`. Requires `|A| >= |B|`.
pub fn sub_abs(a: &Mpi, b: &Mpi) -> Result<Mpi> {
    if cmp_abs(a, b) == Ordering::Less {
        return Err(Error::NegativeValue);
    }

    let mut out = Mpi::new();
    out.grow(a.used_len())?;

    let mut borrow = 0;
    for i in 0..a.used_len() {
        let (diff, br) = sub_borrow(a.limb(i), b.limb(i), borrow);
        out.limbs[i] = diff;
        borrow = br;
    }
    debug_assert_eq!(borrow, 0);

    out.sign = 1;
    Ok(out)
}

/// `X = A + B`, signed.
pub fn add_mpi(a: &Mpi, b: &Mpi) -> Result<Mpi> {
    if a.sign() == b.sign() {
        let mut out = add_abs(a, b)?;
        out.sign = a.sign();
        return Ok(out);
    }

    match cmp_abs(a, b) {
        Ordering::Equal => Ok(Mpi::zero()),
        Ordering::Greater => {
            let mut out = sub_abs(a, b)?;
            out.sign = a.sign();
            Ok(out)
        }
        Ordering::Less => {
            let mut out = sub_abs(b, a)?;
            out.sign = b.sign();
            Ok(out)
        }
    }
}

/// `X = A - B`, signed. Implemented as `add_mpi(A, -B)`.
pub fn sub_mpi(a: &Mpi, b: &Mpi) -> Result<Mpi> {
    let mut neg_b = b.clone();
    if !neg_b.is_zero() {
        neg_b.sign = -neg_b.sign;
    }
    add_mpi(a, &neg_b)
}

/// `X = A + b`, signed scalar.
pub fn add_int(a: &Mpi, b: SLimb) -> Result<Mpi> {
    let ephemeral = Mpi::from_i64(b as i64)?;
    add_mpi(a, &ephemeral)
}

/// `X = A - b`, signed scalar.
pub fn sub_int(a: &Mpi, b: SLimb) -> Result<Mpi> {
    let ephemeral = Mpi::from_i64(b as i64)?;
    sub_mpi(a, &ephemeral)
}
