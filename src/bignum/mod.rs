//! Multi-precision integer arithmetic for public-key cryptography:
//! sign-magnitude bignums, a limb-level arithmetic kernel, sliding-window
//! Montgomery modular exponentiation, binary GCD/modular inverse, and
//! Miller-Rabin-backed prime generation.
//!
//! Modeled end to end on a single classic C bignum library: sign-magnitude
//! representation, `MAX_LIMBS`/`WINDOW_SIZE`/`MAX_SIZE` configuration, and
//! the same constant-time contract on `safe_cond_*` and the exponentiation
//! table lookup. RNG quality, ASCII/file I/O beyond thin converters,
//! Karatsuba/Toom/FFT, and the `self_test` harness are explicitly out of
//! scope — see each module's doc comment for the boundary.

pub mod add_sub;
pub mod bits;
pub mod cmp;
pub mod config;
pub mod div;
pub mod error;
pub mod exp_mod;
pub mod gcd;
pub mod gen_prime;
pub mod limb;
pub mod modulo;
pub mod mpi;
pub mod mul;
pub mod prime;
pub mod radix;
pub mod random;

pub use config::{Limb, MAX_LIMBS, MAX_SIZE, WINDOW_SIZE};
pub use error::{Error, Result};
pub use mpi::Mpi;

pub use add_sub::{add_int, add_mpi, sub_int, sub_mpi};
pub use bits::{bitlen, get_bit, lsb, set_bit, shift_l, shift_r};
pub use cmp::{cmp_abs, cmp_int, cmp_mpi};
pub use div::{div_int, div_mpi};
pub use exp_mod::exp_mod;
pub use gcd::{gcd, inv_mod};
pub use gen_prime::gen_prime;
pub use modulo::{mod_int, mod_mpi, montg_rr};
pub use mul::{mul_int, mul_mpi};
pub use prime::is_prime;
pub use radix::{read_binary, read_string, write_binary, write_string};
pub use random::{fill_random, RandomSource};
