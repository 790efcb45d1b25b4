//! Bit-level accessors and arbitrary-count shifts.

use crate::bignum::config::{Limb, LIMB_BITS};
use crate::bignum::error::{Error, Result};
use crate::bignum::mpi::Mpi;

/// Returns bit `pos` of `|x|` (0-indexed from the LSB). Reading beyond
/// [`bitlen`] returns 0.
pub fn get_bit(x: &Mpi, pos: usize) -> u8 {
    let limb_idx = pos / LIMB_BITS as usize;
    let bit_idx = pos % LIMB_BITS as usize;
    ((x.limb(limb_idx) >> bit_idx) & 1) as u8
}

/// Sets bit `pos` of `|x|` to `val` (must be 0 or 1). Grows `x` when
/// `val == 1` lands in a limb that does not exist yet; never grows for
/// `val == 0`.
pub fn set_bit(x: &mut Mpi, pos: usize, val: u8) -> Result<()> {
    if val > 1 {
        return Err(Error::BadInputData);
    }

    let limb_idx = pos / LIMB_BITS as usize;
    let bit_idx = pos % LIMB_BITS as usize;

    if val == 1 {
        x.grow(limb_idx + 1)?;
        x.limbs[limb_idx] |= 1 << bit_idx;
    } else if limb_idx < x.limbs.len() {
        x.limbs[limb_idx] &= !(1 << bit_idx);
    }

    Ok(())
}

/// Index of the least-significant set bit of `|x|`; 0 if `x == 0`.
pub fn lsb(x: &Mpi) -> usize {
    for (i, &w) in x.limbs().iter().enumerate() {
        if w != 0 {
            return i * LIMB_BITS as usize + w.trailing_zeros() as usize;
        }
    }
    0
}

/// One-based index of the most-significant set bit of `|x|`; 0 if `x == 0`.
pub fn bitlen(x: &Mpi) -> usize {
    let used = x.used_len();
    if used == 0 {
        return 0;
    }
    let top = x.limb(used - 1);
    (used - 1) * LIMB_BITS as usize + (LIMB_BITS - top.leading_zeros()) as usize
}

/// Left-shifts `|x|` by `count` bits in place (`x <<= count`), growing as
/// needed. Sign is preserved.
pub fn shift_l(x: &mut Mpi, count: usize) -> Result<()> {
    if count == 0 {
        return Ok(());
    }

    let new_bitlen = bitlen(x) + count;
    let new_len = (new_bitlen.div_ceil(LIMB_BITS as usize)).max(1);
    x.grow(new_len)?;

    let limb_shift = count / LIMB_BITS as usize;
    let bit_shift = count % LIMB_BITS as usize;

    if limb_shift > 0 {
        for i in (0..x.limbs.len()).rev() {
            x.limbs[i] = if i >= limb_shift { x.limbs[i - limb_shift] } else { 0 };
        }
    }

    if bit_shift > 0 {
        let mut carry: Limb = 0;
        for i in limb_shift..x.limbs.len() {
            let w = x.limbs[i];
            x.limbs[i] = (w << bit_shift) | carry;
            carry = w >> (LIMB_BITS as usize - bit_shift);
        }
    }

    Ok(())
}

/// Right-shifts `|x|` by `count` bits in place (arithmetic on the
/// magnitude, no sign extension). Result is 0 if `count >= bitlen(x)`.
pub fn shift_r(x: &mut Mpi, count: usize) {
    if count == 0 {
        return;
    }

    let len = x.limbs.len();
    if len == 0 {
        return;
    }

    let limb_shift = count / LIMB_BITS as usize;
    let bit_shift = count % LIMB_BITS as usize;

    if limb_shift >= len {
        x.limbs.fill(0);
        return;
    }

    if limb_shift > 0 {
        for i in 0..len {
            x.limbs[i] = if i + limb_shift < len { x.limbs[i + limb_shift] } else { 0 };
        }
    }

    if bit_shift > 0 {
        let mut carry: Limb = 0;
        for i in (0..len).rev() {
            let w = x.limbs[i];
            x.limbs[i] = (w >> bit_shift) | carry;
            carry = w << (LIMB_BITS as usize - bit_shift);
        }
    }
}
