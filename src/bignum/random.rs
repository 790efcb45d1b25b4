//! RNG plumbing. Randomness quality is the caller's concern; this module
//! only fixes the shape every RNG-consuming operation (`fill_random`,
//! `is_prime`, `gen_prime`) takes, and adapts the crate's own `Csprng` to
//! it so those operations have something concrete to drive in tests.

use crate::bignum::error::Result;
use crate::bignum::radix::read_binary;
use crate::bignum::mpi::Mpi;
use crate::rng::Csprng;

/// Anything that can fill a byte buffer with randomness, or fail. The
/// header's `(f_rng, p_rng)` pair collapses to this single closure shape
/// in Rust.
pub trait RandomSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<F: FnMut(&mut [u8]) -> Result<()>> RandomSource for F {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self(buf)
    }
}

impl RandomSource for Csprng {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.fill_bytes(buf);
        Ok(())
    }
}

/// Draws `n` bytes from `rng` and installs them as `x`'s big-endian
/// unsigned magnitude, `sign = +1`.
pub fn fill_random<R: RandomSource + ?Sized>(x: &mut Mpi, n: usize, rng: &mut R) -> Result<()> {
    let mut buf = vec![0u8; n];
    rng.fill(&mut buf)?;
    read_binary(x, &buf)
}
