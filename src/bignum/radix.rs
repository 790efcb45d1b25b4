//! Thin external-collaborator converters: ASCII radix I/O and big-endian
//! binary I/O. Deliberately straightforward — no streaming, no locale
//! handling, no file I/O.

use crate::bignum::add_sub::add_int;
use crate::bignum::config::{Limb, LIMB_BITS};
use crate::bignum::div::div_mpi;
use crate::bignum::error::{Error, Result};
use crate::bignum::mpi::Mpi;
use crate::bignum::mul::mul_int;

/// Parses `s` (optional leading `-`, digits valid in `radix`) into `x`.
/// `radix` must be in `2..=16`.
pub fn read_string(x: &mut Mpi, radix: u32, s: &str) -> Result<()> {
    if !(2..=16).contains(&radix) {
        return Err(Error::BadInputData);
    }

    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1i8, rest),
        None => (1i8, s),
    };
    if digits.is_empty() {
        return Err(Error::InvalidCharacter);
    }

    x.free();
    for ch in digits.chars() {
        let d = ch.to_digit(radix).ok_or(Error::InvalidCharacter)?;
        let scaled = mul_int(x, radix as Limb)?;
        *x = add_int(&scaled, d as i64 as crate::bignum::config::SLimb)?;
    }

    x.sign = if x.is_zero() { 1 } else { sign };
    Ok(())
}

/// Renders `x` in `radix` into `buf`. If `buf` is empty, returns the
/// required length without writing (mirrors the header's `olen` probe).
pub fn write_string(x: &Mpi, radix: u32, buf: &mut [u8]) -> Result<usize> {
    if !(2..=16).contains(&radix) {
        return Err(Error::BadInputData);
    }

    let mut digits = Vec::new();
    let mut work = x.clone();
    work.sign = 1;
    let base = Mpi::from_u64(radix as u64)?;

    if work.is_zero() {
        digits.push(b'0');
    } else {
        while !work.is_zero() {
            let (q, r) = div_mpi(&work, &base)?;
            let d = r.to_u64().expect("remainder < radix fits in u64") as u32;
            digits.push(std::char::from_digit(d, radix).expect("digit < radix") as u8);
            work = q;
        }
    }

    if x.is_negative() {
        digits.push(b'-');
    }
    digits.reverse();

    let needed = digits.len();
    if buf.is_empty() {
        return Ok(needed);
    }
    if buf.len() < needed {
        return Err(Error::BufferTooSmall);
    }
    buf[..needed].copy_from_slice(&digits);
    Ok(needed)
}

/// Installs `buf` (big-endian unsigned) as `x`'s magnitude, `sign = +1`.
pub fn read_binary(x: &mut Mpi, buf: &[u8]) -> Result<()> {
    x.free();
    if buf.is_empty() {
        return Ok(());
    }

    let limb_bytes = (LIMB_BITS / 8) as usize;
    let nlimbs = buf.len().div_ceil(limb_bytes);
    x.grow(nlimbs)?;

    for (i, &byte) in buf.iter().rev().enumerate() {
        let limb_idx = i / limb_bytes;
        let byte_idx = i % limb_bytes;
        x.limbs[limb_idx] |= (byte as Limb) << (byte_idx * 8);
    }
    x.sign = 1;
    Ok(())
}

/// Writes `x`'s magnitude into `buf` as big-endian bytes, zero-padded on
/// the left. `BufferTooSmall` if `buf` is shorter than [`Mpi::size_bytes`].
pub fn write_binary(x: &Mpi, buf: &mut [u8]) -> Result<()> {
    if buf.len() < x.size_bytes() {
        return Err(Error::BufferTooSmall);
    }

    let limb_bytes = (LIMB_BITS / 8) as usize;
    let n = buf.len();
    for i in 0..n {
        let limb_idx = i / limb_bytes;
        let byte_idx = i % limb_bytes;
        buf[n - 1 - i] = ((x.limb(limb_idx) >> (byte_idx * 8)) & 0xFF) as u8;
    }
    Ok(())
}
