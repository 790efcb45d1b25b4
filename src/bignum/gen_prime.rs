//! Prime generation: random candidate → small-factor sieve → Miller-Rabin,
//! with an optional safe-prime ((X-1)/2 also prime) pass for
//! Diffie-Hellman use.

use crate::bignum::add_sub::{add_int, sub_int};
use crate::bignum::bits::{set_bit, shift_r};
use crate::bignum::config::SLimb;
use crate::bignum::error::{Error, Result};
use crate::bignum::modulo::mod_int;
use crate::bignum::mpi::Mpi;
use crate::bignum::prime::{is_prime, SMALL_PRIMES};
use crate::bignum::random::{fill_random, RandomSource};

/// The candidate search is otherwise unbounded; cap it and report a
/// distinct error rather than spin forever on a pathological sieve.
const MAX_CANDIDATES: usize = 1_000_000;

/// Generates an `nbits`-bit prime. If `dh_flag`, the result is a safe
/// prime: `(X-1)/2` is also prime, and bit 1 is forced so `X ≡ 3 (mod 4)`.
pub fn gen_prime<R: RandomSource + ?Sized>(
    nbits: usize,
    dh_flag: bool,
    rng: &mut R,
) -> Result<Mpi> {
    if nbits < 3 {
        return Err(Error::BadInputData);
    }

    let nbytes = nbits.div_ceil(8);
    let cap_bits = nbytes * 8;
    let step: SLimb = if dh_flag { 4 } else { 2 };

    let mut x = Mpi::new();
    fill_random(&mut x, nbytes, rng)?;
    mask_to_bits(&mut x, nbits, cap_bits)?;
    set_bit(&mut x, nbits - 1, 1)?;
    set_bit(&mut x, 0, 1)?;
    if dh_flag {
        set_bit(&mut x, 1, 1)?;
    }

    let mut residues: Vec<u32> = SMALL_PRIMES
        .iter()
        .map(|&p| mod_int(&x, p as SLimb).map(|r| r as u32))
        .collect::<Result<Vec<_>>>()?;

    for _ in 0..MAX_CANDIDATES {
        if sieve_clear(&x, &residues) && accept(&x, dh_flag, rng)? {
            return Ok(x);
        }

        for (i, &p) in SMALL_PRIMES.iter().enumerate() {
            residues[i] = ((residues[i] as u64 + step as u64) % p as u64) as u32;
        }
        x = add_int(&x, step)?;

        if crate::bignum::bits::bitlen(&x) > nbits {
            // Wrapped past the requested width; reseed a fresh candidate
            // with the required bits forced again.
            fill_random(&mut x, nbytes, rng)?;
            mask_to_bits(&mut x, nbits, cap_bits)?;
            set_bit(&mut x, nbits - 1, 1)?;
            set_bit(&mut x, 0, 1)?;
            if dh_flag {
                set_bit(&mut x, 1, 1)?;
            }
            residues = SMALL_PRIMES
                .iter()
                .map(|&p| mod_int(&x, p as SLimb).map(|r| r as u32))
                .collect::<Result<Vec<_>>>()?;
        }
    }

    Err(Error::NotAcceptable)
}

/// True if no small prime divides `x` (other than `x` itself).
fn sieve_clear(x: &Mpi, residues: &[u32]) -> bool {
    for (i, &p) in SMALL_PRIMES.iter().enumerate() {
        if residues[i] == 0 && crate::bignum::cmp::cmp_int(x, p as SLimb) != std::cmp::Ordering::Equal {
            return false;
        }
    }
    true
}

/// Runs the Miller-Rabin pass(es) required for this candidate: just `x`
/// normally, or both `x` and `(x-1)/2` for a safe prime.
fn accept<R: RandomSource + ?Sized>(x: &Mpi, dh_flag: bool, rng: &mut R) -> Result<bool> {
    match is_prime(x, rng) {
        Ok(()) => {}
        Err(Error::NotAcceptable) => return Ok(false),
        Err(e) => return Err(e),
    }

    if !dh_flag {
        return Ok(true);
    }

    let mut y = sub_int(x, 1)?;
    shift_r(&mut y, 1);

    match is_prime(&y, rng) {
        Ok(()) => Ok(true),
        Err(Error::NotAcceptable) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Clears every bit from `nbits` up to `cap_bits`, so the random fill is
/// truncated to exactly the requested width before the top/bottom bits
/// are forced.
fn mask_to_bits(x: &mut Mpi, nbits: usize, cap_bits: usize) -> Result<()> {
    for i in nbits..cap_bits {
        set_bit(x, i, 0)?;
    }
    Ok(())
}
