//! Binary (Stein's) GCD and modular inverse via the extended Euclidean
//! algorithm. Neither claims constant time — only `safe_cond_*` and
//! `exp_mod`'s table lookup carry that contract.

use crate::bignum::add_sub::{sub_abs, sub_mpi};
use crate::bignum::bits::{lsb, shift_l, shift_r};
use crate::bignum::cmp::{cmp_abs, cmp_int};
use crate::bignum::div::div_mpi;
use crate::bignum::error::{Error, Result};
use crate::bignum::modulo::mod_mpi;
use crate::bignum::mpi::Mpi;
use crate::bignum::mul::mul_mpi;
use std::cmp::Ordering;

fn abs_of(x: &Mpi) -> Mpi {
    let mut y = x.clone();
    y.sign = 1;
    y
}

/// `G = gcd(A, B)`, always non-negative. `gcd(A, 0) == |A|`.
pub fn gcd(a: &Mpi, b: &Mpi) -> Result<Mpi> {
    if a.is_zero() {
        return Ok(abs_of(b));
    }
    if b.is_zero() {
        return Ok(abs_of(a));
    }

    let mut ta = abs_of(a);
    let mut tb = abs_of(b);

    let sa = lsb(&ta);
    let sb = lsb(&tb);
    let s = sa.min(sb);

    shift_r(&mut ta, s);
    shift_r(&mut tb, s);

    let za = lsb(&ta);
    shift_r(&mut ta, za);

    loop {
        let zb = lsb(&tb);
        shift_r(&mut tb, zb);

        if cmp_abs(&ta, &tb) == Ordering::Greater {
            std::mem::swap(&mut ta, &mut tb);
        }

        tb = sub_abs(&tb, &ta)?;
        if tb.is_zero() {
            break;
        }
    }

    shift_l(&mut ta, s)?;
    ta.sign = 1;
    Ok(ta)
}

/// `X = A^-1 mod N`, the unique `X` in `[1, N)` with `(A*X) mod N == 1`.
pub fn inv_mod(a: &Mpi, n: &Mpi) -> Result<Mpi> {
    if cmp_int(n, 1) != Ordering::Greater {
        return Err(Error::BadInputData);
    }

    let a0 = mod_mpi(a, n)?;

    let mut old_r = n.clone();
    let mut r = a0;
    let mut old_s = Mpi::zero();
    let mut s = Mpi::one();

    while !r.is_zero() {
        let (q, rem) = div_mpi(&old_r, &r)?;
        old_r = r;
        r = rem;

        let qs = mul_mpi(&q, &s)?;
        let new_s = sub_mpi(&old_s, &qs)?;
        old_s = s;
        s = new_s;
    }

    if cmp_abs(&old_r, &Mpi::one()) != Ordering::Equal {
        return Err(Error::NotAcceptable);
    }

    let result = mod_mpi(&old_s, n)?;
    if result.is_zero() {
        return Err(Error::NotAcceptable);
    }

    Ok(result)
}
