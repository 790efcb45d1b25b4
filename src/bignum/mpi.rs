//! The MPI container: sign, limbs, and the lifecycle/aliasing operations
//! every higher-level kernel builds on.
//!
//! Representation is sign-magnitude, little-endian by limb (`limbs[0]` is
//! least significant). Zero is canonical: `sign == 1` and every limb zero.
//! `limbs.len()` is the backing capacity: operations that cannot safely
//! compute in place write into a scratch `Mpi` and `swap` it into the
//! output, so every limb slot that is logically part of the value is
//! always present, with unused high limbs held at zero.

use crate::bignum::config::{Limb, MAX_LIMBS, SLimb};
use crate::bignum::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct Mpi {
    pub(crate) sign: i8,
    pub(crate) limbs: Vec<Limb>,
}

impl Mpi {
    /// Initializes an empty MPI (value 0, no limbs allocated).
    pub fn new() -> Self {
        Self {
            sign: 1,
            limbs: Vec::new(),
        }
    }

    /// Alias for [`Mpi::new`] — the canonical zero value.
    pub fn zero() -> Self {
        Self::new()
    }

    pub fn one() -> Self {
        let mut x = Self::new();
        x.lset(1).expect("lset(1) never allocates past MAX_LIMBS");
        x
    }

    pub fn sign(&self) -> i8 {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.used_len() == 0
    }

    pub fn is_negative(&self) -> bool {
        self.sign < 0 && !self.is_zero()
    }

    /// Index one past the most significant non-zero limb; 0 for zero.
    pub(crate) fn used_len(&self) -> usize {
        self.limbs.iter().rposition(|&l| l != 0).map_or(0, |i| i + 1)
    }

    pub(crate) fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Raw limb access; 0 beyond the allocated length.
    pub(crate) fn limb(&self, i: usize) -> Limb {
        self.limbs.get(i).copied().unwrap_or(0)
    }

    /// Total size in bytes: `ceil(bitlen/8)`, 0 for zero.
    pub fn size_bytes(&self) -> usize {
        crate::bignum::bits::bitlen(self).div_ceil(8)
    }

    /// Grows the backing storage to at least `n` limbs, preserving value.
    /// A no-op if already large enough.
    pub fn grow(&mut self, n: usize) -> Result<()> {
        if n > MAX_LIMBS {
            return Err(Error::AllocFailed);
        }
        if self.limbs.len() < n {
            self.limbs.resize(n, 0);
        }
        Ok(())
    }

    /// Shrinks storage down to `max(n, used_len())`, never losing value.
    pub fn shrink(&mut self, n: usize) -> Result<()> {
        let target = n.max(self.used_len());
        if target > MAX_LIMBS {
            return Err(Error::AllocFailed);
        }
        if self.limbs.len() < target {
            self.limbs.resize(target, 0);
        } else {
            self.limbs.truncate(target);
        }
        Ok(())
    }

    /// Deep-copies `other` into `self`. A self-copy is a no-op.
    pub fn copy_from(&mut self, other: &Mpi) -> Result<()> {
        if std::ptr::eq(self, other) {
            return Ok(());
        }

        let len = other.limbs.len();
        self.grow(len)?;
        self.limbs.fill(0);
        self.limbs[..len].copy_from_slice(&other.limbs);
        self.sign = other.sign;
        Ok(())
    }

    /// Exchanges the sign and backing buffer of `self` and `other`.
    pub fn swap(&mut self, other: &mut Mpi) {
        std::mem::swap(self, other);
    }

    /// Zero-fills limbs and truncates to the empty state. Called
    /// automatically on drop; exposed so callers can scrub secret
    /// intermediates (Montgomery tables, MR witnesses) before they would
    /// otherwise go out of scope.
    pub fn free(&mut self) {
        self.limbs.fill(0);
        self.limbs.clear();
        self.limbs.shrink_to_fit();
        self.sign = 1;
    }

    /// Sets `self` to the signed single-limb value `z`.
    pub fn lset(&mut self, z: SLimb) -> Result<()> {
        self.grow(1)?;
        self.limbs.fill(0);
        self.sign = if z < 0 { -1 } else { 1 };
        self.limbs[0] = z.unsigned_abs() as Limb;
        Ok(())
    }

    /// Constructs an MPI from an unsigned 64-bit value.
    pub fn from_u64(v: u64) -> Result<Mpi> {
        let mut x = Mpi::new();
        if v == 0 {
            return Ok(x);
        }

        #[cfg(target_pointer_width = "64")]
        {
            x.grow(1)?;
            x.limbs[0] = v as Limb;
        }
        #[cfg(not(target_pointer_width = "64"))]
        {
            let lo = (v & 0xFFFF_FFFF) as Limb;
            let hi = (v >> 32) as Limb;
            if hi != 0 {
                x.grow(2)?;
                x.limbs[0] = lo;
                x.limbs[1] = hi;
            } else {
                x.grow(1)?;
                x.limbs[0] = lo;
            }
        }

        Ok(x)
    }

    /// Constructs an MPI from a signed 64-bit value.
    pub fn from_i64(v: i64) -> Result<Mpi> {
        let mut x = Mpi::from_u64(v.unsigned_abs())?;
        if v < 0 {
            x.sign = -1;
        }
        Ok(x)
    }

    /// Returns the value as a `u64` if it fits, discarding sign.
    pub fn to_u64(&self) -> Option<u64> {
        let used = self.used_len();
        if used == 0 {
            return Some(0);
        }

        #[cfg(target_pointer_width = "64")]
        {
            if used > 1 {
                return None;
            }
            Some(self.limbs[0] as u64)
        }
        #[cfg(not(target_pointer_width = "64"))]
        {
            if used > 2 {
                return None;
            }
            let lo = self.limbs[0] as u64;
            let hi = if used > 1 { self.limbs[1] as u64 } else { 0 };
            Some(lo | (hi << 32))
        }
    }

    /// Conditionally assigns `other` to `self` in constant time: the set of
    /// memory words touched and the order they are touched in do not
    /// depend on `cond`. `cond` must be 0 or 1.
    pub fn safe_cond_assign(&mut self, other: &Mpi, cond: u8) -> Result<()> {
        debug_assert!(cond == 0 || cond == 1);

        let len = self.limbs.len().max(other.limbs.len());
        self.grow(len)?;

        let mask = (cond as Limb).wrapping_neg();
        for i in 0..len {
            let o = other.limb(i);
            self.limbs[i] = (self.limbs[i] & !mask) ^ (o & mask);
        }

        let mask8 = 0u8.wrapping_sub(cond);
        let self_b = self.sign as u8;
        let other_b = other.sign as u8;
        self.sign = ((self_b & !mask8) | (other_b & mask8)) as i8;

        Ok(())
    }

    /// Conditionally swaps `self` and `other` in constant time, with the
    /// same contract as [`Mpi::safe_cond_assign`].
    pub fn safe_cond_swap(&mut self, other: &mut Mpi, cond: u8) -> Result<()> {
        debug_assert!(cond == 0 || cond == 1);

        let len = self.limbs.len().max(other.limbs.len());
        self.grow(len)?;
        other.grow(len)?;

        let mask = (cond as Limb).wrapping_neg();
        for i in 0..len {
            let diff = (self.limbs[i] ^ other.limbs[i]) & mask;
            self.limbs[i] ^= diff;
            other.limbs[i] ^= diff;
        }

        let mask8 = 0u8.wrapping_sub(cond);
        let self_b = self.sign as u8;
        let other_b = other.sign as u8;
        let diff8 = (self_b ^ other_b) & mask8;
        self.sign = (self_b ^ diff8) as i8;
        other.sign = (other_b ^ diff8) as i8;

        Ok(())
    }
}

impl Default for Mpi {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Mpi {
    fn drop(&mut self) {
        self.limbs.fill(0);
    }
}

impl PartialEq for Mpi {
    fn eq(&self, other: &Self) -> bool {
        crate::bignum::cmp::cmp_mpi(self, other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Mpi {}
