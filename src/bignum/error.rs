//! Error taxonomy for the bignum engine.
//!
//! Plain enum, hand-written `Display`, no external error crate.

use std::fmt;

/// One variant per failure mode the engine can report; callers match on
/// the variant rather than a numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// I/O layer failure (file read/write).
    FileIoError,
    /// Out-of-range or otherwise malformed argument.
    BadInputData,
    /// A radix string contained a character outside its base.
    InvalidCharacter,
    /// An output buffer was too small to hold the result.
    BufferTooSmall,
    /// A signed constraint was violated (e.g. `sub_abs` with `|A| < |B|`).
    NegativeValue,
    /// The divisor was zero.
    DivisionByZero,
    /// A logical precondition failed (composite where prime was required,
    /// no modular inverse exists, ...).
    NotAcceptable,
    /// Growing an MPI past [`crate::bignum::config::MAX_LIMBS`] (or beyond
    /// what the platform allocator will give us).
    AllocFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::FileIoError => "file I/O error",
            Error::BadInputData => "bad input data",
            Error::InvalidCharacter => "invalid character in digit string",
            Error::BufferTooSmall => "buffer too small",
            Error::NegativeValue => "negative value not allowed here",
            Error::DivisionByZero => "division by zero",
            Error::NotAcceptable => "not acceptable",
            Error::AllocFailed => "memory allocation failed",
        };

        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
