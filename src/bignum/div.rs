//! Long division: Knuth's Algorithm D.
//!
//! `knuth_divide` works on trimmed, unsigned limb slices and returns
//! `(quotient, remainder)` limb vectors; [`div_mpi`]/[`div_int`] layer sign
//! handling and the `Mpi` container on top.

use crate::bignum::config::{DoubleLimb, Limb, LIMB_BITS, SLimb};
use crate::bignum::error::{Error, Result};
use crate::bignum::limb::{add_carry, sub_borrow};
use crate::bignum::mpi::Mpi;

/// Divides the unsigned magnitude `u` by `v` (both already trimmed of
/// leading zero limbs, `v` non-empty). Returns `(quotient, remainder)`.
fn knuth_divide(u: &[Limb], v: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let n = v.len();

    if n == 1 {
        return div_by_single_limb(u, v[0]);
    }

    if u.len() < n || cmp_slice(u, v) == std::cmp::Ordering::Less {
        return (Vec::new(), u.to_vec());
    }

    // d = number of bits needed to normalize v so its top limb's MSB is set.
    let d = v[n - 1].leading_zeros() as usize;

    let mut vn = v.to_vec();
    shl_bits_with_carry(&mut vn, d);

    let m = u.len() - n;
    let mut un = vec![0 as Limb; u.len() + 1];
    un[..u.len()].copy_from_slice(u);
    let carry = shl_bits_with_carry(&mut un[..u.len()], d);
    un[u.len()] = carry;

    let mut q = vec![0 as Limb; m + 1];
    let base: DoubleLimb = 1 << LIMB_BITS;
    let v_top = vn[n - 1] as DoubleLimb;

    for j in (0..=m).rev() {
        let top2 = ((un[j + n] as DoubleLimb) << LIMB_BITS) | (un[j + n - 1] as DoubleLimb);
        let mut qhat = top2 / v_top;
        let mut rhat = top2 % v_top;

        loop {
            let too_big = qhat >= base
                || qhat * (vn[n - 2] as DoubleLimb)
                    > (rhat << LIMB_BITS) + (un[j + n - 2] as DoubleLimb);

            if too_big {
                qhat -= 1;
                rhat += v_top;
                if rhat < base {
                    continue;
                }
            }
            break;
        }

        let mut borrow: Limb = 0;
        let mut mulcarry: Limb = 0;
        for i in 0..n {
            let p = qhat * (vn[i] as DoubleLimb) + mulcarry as DoubleLimb;
            let plo = p as Limb;
            mulcarry = (p >> LIMB_BITS) as Limb;

            let (diff, b) = sub_borrow(un[j + i], plo, borrow);
            un[j + i] = diff;
            borrow = b;
        }
        let (diff_top, borrow_top) = sub_borrow(un[j + n], mulcarry, borrow);
        un[j + n] = diff_top;

        if borrow_top != 0 {
            qhat -= 1;

            let mut addcarry: Limb = 0;
            for i in 0..n {
                let (sum, c) = add_carry(un[j + i], vn[i], addcarry);
                un[j + i] = sum;
                addcarry = c;
            }
            un[j + n] = un[j + n].wrapping_add(addcarry);
        }

        q[j] = qhat as Limb;
    }

    shr_bits_in_place(&mut un[..n], d);
    un.truncate(n);

    (q, un)
}

/// Fast path for a single-limb divisor: ordinary short division.
fn div_by_single_limb(u: &[Limb], v: Limb) -> (Vec<Limb>, Vec<Limb>) {
    let mut q = vec![0 as Limb; u.len()];
    let mut rem: Limb = 0;

    for i in (0..u.len()).rev() {
        let cur = ((rem as DoubleLimb) << LIMB_BITS) | (u[i] as DoubleLimb);
        q[i] = (cur / v as DoubleLimb) as Limb;
        rem = (cur % v as DoubleLimb) as Limb;
    }

    (q, vec![rem])
}

fn cmp_slice(a: &[Limb], b: &[Limb]) -> std::cmp::Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    std::cmp::Ordering::Equal
}

fn shl_bits_with_carry(buf: &mut [Limb], bits: usize) -> Limb {
    if bits == 0 {
        return 0;
    }
    let mut carry: Limb = 0;
    for w in buf.iter_mut() {
        let nw = (*w << bits) | carry;
        carry = *w >> (LIMB_BITS as usize - bits);
        *w = nw;
    }
    carry
}

fn shr_bits_in_place(buf: &mut [Limb], bits: usize) {
    if bits == 0 {
        return;
    }
    let mut carry: Limb = 0;
    for w in buf.iter_mut().rev() {
        let nw = (*w >> bits) | carry;
        carry = *w << (LIMB_BITS as usize - bits);
        *w = nw;
    }
}

fn trim(mut limbs: Vec<Limb>) -> Vec<Limb> {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
    limbs
}

fn mpi_from_limbs(limbs: Vec<Limb>, sign: i8) -> Result<Mpi> {
    let limbs = trim(limbs);
    let mut out = Mpi::new();
    if limbs.is_empty() {
        return Ok(out);
    }
    out.grow(limbs.len())?;
    out.limbs[..limbs.len()].copy_from_slice(&limbs);
    out.sign = sign;
    Ok(out)
}

/// `A = Q*B + R`. Either output may be discarded by the caller.
/// `Q` takes `sign(A)*sign(B)`; `R` takes `sign(A)` (the remainder follows
/// the dividend's sign, per the usual sign-magnitude convention).
pub fn div_mpi(a: &Mpi, b: &Mpi) -> Result<(Mpi, Mpi)> {
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }

    if crate::bignum::cmp::cmp_abs(a, b) == std::cmp::Ordering::Less {
        return Ok((Mpi::zero(), a.clone()));
    }

    let u: Vec<Limb> = a.limbs()[..a.used_len()].to_vec();
    let v: Vec<Limb> = b.limbs()[..b.used_len()].to_vec();

    let (q, r) = knuth_divide(&u, &v);

    let q_sign = a.sign() * b.sign();
    let r_sign = if a.is_zero() { 1 } else { a.sign() };

    let quotient = mpi_from_limbs(q, q_sign)?;
    let mut remainder = mpi_from_limbs(r, r_sign)?;
    if remainder.is_zero() {
        remainder.sign = 1;
    }

    Ok((quotient, remainder))
}

/// `A = Q*b + R`, scalar divisor.
pub fn div_int(a: &Mpi, b: SLimb) -> Result<(Mpi, Mpi)> {
    let ephemeral = Mpi::from_i64(b as i64)?;
    div_mpi(a, &ephemeral)
}
