//! Multi-precision integer arithmetic for Nebula's public-key primitives.
//!
//! This crate provides a sign-magnitude bignum engine tailored to RSA/DH-style
//! number theory: limb-level arithmetic, sliding-window Montgomery modular
//! exponentiation, binary GCD/modular inverse, and Miller-Rabin-backed prime
//! generation.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All components
//! are explicit in their semantics and suitable for security-critical code.
//!
//! # Module overview
//!
//! - `bignum`
//!   The arbitrary-precision integer engine: the `Mpi` container, the limb
//!   kernel, add/sub/mul/div, modular reduction and exponentiation, GCD and
//!   modular inverse, primality testing, and prime generation.
//!
//! - `rng`
//!   A cryptographically secure pseudorandom number generator (ChaCha20-DRBG
//!   seeded from OS entropy) used to drive `bignum`'s randomized operations
//!   (`fill_random`, `is_prime`, `gen_prime`) in tests and by callers who
//!   don't bring their own RNG.
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between the arithmetic engine and its RNG/OS glue

mod os;

pub mod bignum;
pub mod rng;
