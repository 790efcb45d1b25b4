//! Sliding-window Montgomery modular exponentiation — the centerpiece of
//! the engine (HAC Algorithm 14.85, specialized to odd moduli via
//! Montgomery form).

use crate::bignum::bits;
use crate::bignum::config::{Limb, WINDOW_SIZE};
use crate::bignum::error::{Error, Result};
use crate::bignum::mpi::Mpi;
use crate::bignum::modulo::{mod_mpi, mont_mul, montg_init, montg_rr, MontgomeryContext};

/// `X = A^E mod N`. `N` must be positive and odd; `E` must be non-negative.
/// `rr`, if supplied, must be `R^2 mod N` for the same `N` (see
/// [`montg_rr`]) and lets repeated calls against one modulus skip
/// recomputing it.
pub fn exp_mod(a: &Mpi, e: &Mpi, n: &Mpi, rr: Option<&Mpi>) -> Result<Mpi> {
    if e.is_negative() {
        return Err(Error::BadInputData);
    }
    if n.is_zero() || n.is_negative() {
        return Err(Error::BadInputData);
    }
    if n.limb(0) & 1 == 0 {
        // This engine requires Montgomery form, hence an odd modulus.
        // Even-modulus exponentiation is a separate "generic" algorithm
        // that this crate does not provide.
        return Err(Error::BadInputData);
    }

    let neg_base = a.is_negative();
    let a_mod = mod_mpi(a, n)?;

    let rr_owned;
    let rr_ref: &Mpi = match rr {
        Some(r) => r,
        None => {
            rr_owned = montg_rr(n)?;
            &rr_owned
        }
    };

    let mm = montg_init(n);
    let ctx = MontgomeryContext {
        n: n.clone(),
        mm,
        rr: rr_ref.clone(),
    };
    let k = n.used_len().max(1);

    let mont_one = mont_mul(&Mpi::one(), rr_ref, &ctx)?;

    let bl = bits::bitlen(e);
    if bl == 0 {
        return mont_mul(&mont_one, &Mpi::one(), &ctx);
    }

    let a_bar = mont_mul(&a_mod, rr_ref, &ctx)?;
    let w = window_size_for(bl);
    let table_len = 1usize << (w - 1);

    let a_sq = mont_mul(&a_bar, &a_bar, &ctx)?;
    let mut table = Vec::with_capacity(table_len);
    table.push(a_bar);
    for j in 1..table_len {
        let next = mont_mul(&table[j - 1], &a_sq, &ctx)?;
        table.push(next);
    }

    let mut x = mont_one;
    let mut i = bl - 1;

    loop {
        if bits::get_bit(e, i) == 0 {
            x = mont_mul(&x, &x, &ctx)?;
            if i == 0 {
                break;
            }
            i -= 1;
            continue;
        }

        let l0 = i.saturating_sub(w - 1);
        let mut l = l0;
        while bits::get_bit(e, l) == 0 {
            l += 1;
        }

        for _ in 0..=(i - l) {
            x = mont_mul(&x, &x, &ctx)?;
        }

        let mut value: u64 = 0;
        for b in (l..=i).rev() {
            value = (value << 1) | bits::get_bit(e, b) as u64;
        }
        let idx = ((value - 1) / 2) as usize;

        let g = ct_select_table(&table, idx, k);
        x = mont_mul(&x, &g, &ctx)?;

        if l == 0 {
            break;
        }
        i = l - 1;
    }

    let mut result = mont_mul(&x, &Mpi::one(), &ctx)?;

    if neg_base && bits::get_bit(e, 0) == 1 && !result.is_zero() {
        result = crate::bignum::add_sub::sub_abs(n, &result)?;
    }

    Ok(result)
}

/// Picks a sliding-window width from the exponent's bit length, a common
/// staircase schedule capped at [`WINDOW_SIZE`].
fn window_size_for(bitlen: usize) -> usize {
    let w = if bitlen <= 7 {
        1
    } else if bitlen <= 18 {
        2
    } else if bitlen <= 48 {
        3
    } else if bitlen <= 116 {
        4
    } else if bitlen <= 260 {
        5
    } else {
        6
    };
    w.min(WINDOW_SIZE)
}

/// Reads every table entry and conditionally merges it into the result
/// using a mask derived from `j == idx`, so the access pattern does not
/// depend on which entry is selected.
fn ct_select_table(table: &[Mpi], idx: usize, limb_len: usize) -> Mpi {
    let mut out = Mpi::new();
    out.grow(limb_len).expect("table entries stay within MAX_LIMBS");

    for (j, entry) in table.iter().enumerate() {
        let mask = ct_eq_mask(j, idx);
        for k in 0..limb_len {
            out.limbs[k] |= entry.limb(k) & mask;
        }
    }

    out
}

/// Branchless equality mask: all-ones if `a == b`, all-zero otherwise.
fn ct_eq_mask(a: usize, b: usize) -> Limb {
    let diff = (a ^ b) as Limb;
    // `diff | -diff` has its top bit set iff diff != 0 (two's-complement
    // identity), independent of limb width.
    let nonzero = (diff | diff.wrapping_neg()) >> (crate::bignum::config::LIMB_BITS - 1);
    (1 as Limb ^ nonzero).wrapping_neg()
}
