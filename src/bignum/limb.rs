//! Limb-level primitives: single-word add-with-carry and the
//! multiply-accumulate `(lo, hi) = a*b + c + carry_in` that anchors every
//! higher kernel (mul, div, Montgomery multiplication).
//!
//! These use a double-width integer (`u128` on 64-bit targets, `u64` on
//! 32-bit ones) rather than splitting into half-words — the double-width
//! fast path.

use crate::bignum::config::{DoubleLimb, Limb};

/// `(sum, carry_out) = a + b + carry_in`. `carry_in`/`carry_out` are 0 or 1.
#[inline(always)]
pub fn add_carry(a: Limb, b: Limb, carry_in: Limb) -> (Limb, Limb) {
    let sum = a as DoubleLimb + b as DoubleLimb + carry_in as DoubleLimb;
    (sum as Limb, (sum >> LIMB_BITS_U32) as Limb)
}

/// `(diff, borrow_out) = a - b - borrow_in`. `borrow_in`/`borrow_out` are 0 or 1.
#[inline(always)]
pub fn sub_borrow(a: Limb, b: Limb, borrow_in: Limb) -> (Limb, Limb) {
    let (d1, borrowed1) = a.overflowing_sub(b);
    let (d2, borrowed2) = d1.overflowing_sub(borrow_in);
    (d2, (borrowed1 as Limb) | (borrowed2 as Limb))
}

/// `(lo, hi) = a*b + c + carry_in`, the schoolbook multiply-accumulate step.
#[inline(always)]
pub fn mul_acc(a: Limb, b: Limb, c: Limb, carry_in: Limb) -> (Limb, Limb) {
    let product =
        a as DoubleLimb * b as DoubleLimb + c as DoubleLimb + carry_in as DoubleLimb;
    (product as Limb, (product >> LIMB_BITS_U32) as Limb)
}

const LIMB_BITS_U32: u32 = Limb::BITS;
