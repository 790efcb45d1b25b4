//! Compile-time configuration for the bignum engine.
//!
//! Mirrors the `HAVE_INT32`/`HAVE_INT64`/`MPI_MAX_LIMBS`/`MPI_WINDOW_SIZE`/
//! `MPI_MAX_SIZE` knobs of the original library: the limb width follows the
//! target's native word size, everything else is a `pub const`.

/// A single machine word of an [`crate::bignum::mpi::Mpi`]'s magnitude.
#[cfg(target_pointer_width = "64")]
pub type Limb = u64;
#[cfg(not(target_pointer_width = "64"))]
pub type Limb = u32;

/// Double-width unsigned type, wide enough to hold `Limb::MAX * Limb::MAX`.
#[cfg(target_pointer_width = "64")]
pub type DoubleLimb = u128;
#[cfg(not(target_pointer_width = "64"))]
pub type DoubleLimb = u64;

/// Signed counterpart of [`Limb`], used for scalar operands (`add_int`,
/// `lset`, ...).
#[cfg(target_pointer_width = "64")]
pub type SLimb = i64;
#[cfg(not(target_pointer_width = "64"))]
pub type SLimb = i32;

/// Number of bits in a single limb.
pub const LIMB_BITS: u32 = Limb::BITS;

/// Maximum number of limbs any [`crate::bignum::mpi::Mpi`] may grow to.
pub const MAX_LIMBS: usize = 10_000;

/// Upper bound on the sliding-window width used by `exp_mod`. Valid range
/// is 1..=6; the table built for a window of size `w` holds `2^(w-1)`
/// entries.
pub const WINDOW_SIZE: usize = 6;

/// User-facing byte cap for `read_binary`/`write_binary` buffers.
pub const MAX_SIZE: usize = 1024;

/// Maximum number of bits implied by [`MAX_SIZE`].
pub const MAX_BITS: usize = MAX_SIZE * 8;
