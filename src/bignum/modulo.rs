//! `R = A mod B` and the Montgomery setup shared by `exp_mod`.

use crate::bignum::config::{DoubleLimb, Limb, LIMB_BITS, SLimb};
use crate::bignum::div::div_mpi;
use crate::bignum::error::{Error, Result};
use crate::bignum::limb::{add_carry, mul_acc};
use crate::bignum::mpi::Mpi;

/// `R = A mod B`, `B > 0` required. Result lies in `[0, B)` regardless of
/// the sign of `A` (unlike [`div_mpi`]'s remainder, which follows the
/// dividend's sign).
pub fn mod_mpi(a: &Mpi, b: &Mpi) -> Result<Mpi> {
    if b.is_negative() {
        return Err(Error::NegativeValue);
    }
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let (_, mut r) = div_mpi(a, b)?;

    if r.is_negative() {
        r = crate::bignum::add_sub::add_mpi(&r, b)?;
    } else if crate::bignum::cmp::cmp_abs(&r, b) != std::cmp::Ordering::Less {
        r = crate::bignum::add_sub::sub_abs(&r, b)?;
    }

    if r.is_zero() {
        r.sign = 1;
    }

    Ok(r)
}

/// `r = A mod b`, scalar modulus.
pub fn mod_int(a: &Mpi, b: SLimb) -> Result<Limb> {
    let ephemeral = Mpi::from_i64(b as i64)?;
    let r = mod_mpi(a, &ephemeral)?;
    Ok(r.to_u64().expect("remainder fits in a single limb") as Limb)
}

/// Precomputed Montgomery context for a fixed odd modulus `n`.
pub struct MontgomeryContext {
    pub n: Mpi,
    pub mm: Limb,
    pub rr: Mpi,
}

/// Computes `mm = -N^-1 mod 2^LIMB_BITS` by Hensel lifting on the low limb.
/// `n` must be odd.
pub fn montg_init(n: &Mpi) -> Limb {
    let n0 = n.limb(0);
    debug_assert!(n0 & 1 == 1, "Montgomery setup requires an odd modulus");

    let mut x: Limb = 1;
    // Newton/Hensel iteration: doubles the number of correct bits each
    // round, so `LIMB_BITS.ilog2() + 1` rounds suffice. All arithmetic
    // wraps mod 2^LIMB_BITS, which is exactly the ring we're inverting in.
    let rounds = LIMB_BITS.trailing_zeros() as usize + 1;
    for _ in 0..rounds {
        let t = n0.wrapping_mul(x);
        x = x.wrapping_mul((2 as Limb).wrapping_sub(t));
    }

    x.wrapping_neg()
}

/// `RR = R^2 mod N` where `R = 2^(LIMB_BITS * N.used_len())`. Cacheable
/// across multiple `exp_mod` calls against the same modulus.
pub fn montg_rr(n: &Mpi) -> Result<Mpi> {
    let k = n.used_len().max(1);
    let mut rr = Mpi::new();
    crate::bignum::bits::set_bit(&mut rr, 2 * k * LIMB_BITS as usize, 1)?;
    mod_mpi(&rr, n)
}

/// CIOS Montgomery multiplication: `(A*B*R^-1) mod N`, followed by a
/// conditional (constant-time) final subtraction of `N`.
pub fn mont_mul(a: &Mpi, b: &Mpi, ctx: &MontgomeryContext) -> Result<Mpi> {
    let k = ctx.n.used_len().max(1);
    let mut t = vec![0 as Limb; k + 2];

    for i in 0..k {
        let ai = a.limb(i);

        let mut carry: Limb = 0;
        for j in 0..k {
            let (sum, c) = mul_acc(ai, b.limb(j), t[j], carry);
            t[j] = sum;
            carry = c;
        }
        let (sum, c1) = add_carry(t[k], carry, 0);
        t[k] = sum;
        let (sum2, c2) = add_carry(t[k + 1], c1, 0);
        t[k + 1] = sum2;
        debug_assert_eq!(c2, 0);

        let u = t[0].wrapping_mul(ctx.mm);

        let mut carry: Limb = 0;
        for j in 0..k {
            let (sum, c) = mul_acc(u, ctx.n.limb(j), t[j], carry);
            t[j] = sum;
            carry = c;
        }
        let (sum, c1) = add_carry(t[k], carry, 0);
        t[k] = sum;
        let (sum2, c2) = add_carry(t[k + 1], c1, 0);
        t[k + 1] = sum2;
        debug_assert_eq!(c2, 0);

        // shift t right by one limb
        for j in 0..k + 1 {
            t[j] = t[j + 1];
        }
        t[k + 1] = 0;
    }

    // t[0..=k] holds the full (k+1)-word pre-reduction result (t[k+1] is
    // always 0 after the final shift); the subtraction below runs over all
    // k+1 words, since the top word can be set whenever N's MSB is set.
    let mut wide = vec![0 as Limb; k + 1];
    wide.copy_from_slice(&t[..k + 1]);

    // Conditional subtraction of N, executed branchlessly on the limb
    // words so the memory-access pattern does not depend on the result.
    // `N`'s own (k+1)-th word is implicitly 0.
    let borrow_if_sub = {
        let mut borrow: Limb = 0;
        let mut tmp = vec![0 as Limb; k + 1];
        for i in 0..k {
            let (diff, b) = crate::bignum::limb::sub_borrow(wide[i], ctx.n.limb(i), borrow);
            tmp[i] = diff;
            borrow = b;
        }
        let (diff, b) = crate::bignum::limb::sub_borrow(wide[k], 0, borrow);
        tmp[k] = diff;
        (b, tmp)
    };

    let need_sub = 1u8 - (borrow_if_sub.0 as u8);
    let mask = (need_sub as Limb).wrapping_neg();
    for i in 0..=k {
        wide[i] = (wide[i] & !mask) ^ (borrow_if_sub.1[i] & mask);
    }
    debug_assert_eq!(wide[k], 0, "CIOS result must fit in k limbs after reduction");

    let mut out = Mpi::new();
    out.grow(k)?;
    out.limbs[..k].copy_from_slice(&wide[..k]);
    out.sign = 1;

    Ok(out)
}
