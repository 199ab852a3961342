//! Parameter sets of the compact schemes and digests mapping byte strings
//! to their field elements.

use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::One;

use crate::poly::{Modulus, Scalar};

mod sha256d;

// Re-exports.
pub use self::sha256d::*;

/// A trait for hashing arbitrary-length byte strings to elements of a prime field.
pub trait FieldDigest {
    /// Hashes an arbitrary-length byte string to an element of the prime
    /// field defined by `M`.
    ///
    /// The same message always yields the same element.
    fn hash_to_field<M: Modulus>(msg: &[u8]) -> Scalar<M>;
}

lazy_static! {
    static ref COMPACT96_MODULUS: BigUint = (BigUint::one() << 96usize) - 17u32;
    static ref COMPACT104_MODULUS: BigUint = (BigUint::one() << 104usize) - 17u32;
    static ref COMPACT128_MODULUS: BigUint = (BigUint::one() << 128usize) - 159u32;
}

/// The 96-bit prime field with modulus `2^96 - 17`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compact96;

impl Modulus for Compact96 {
    const NUM_BITS: usize = 96;

    fn modulus() -> &'static BigUint {
        &COMPACT96_MODULUS
    }
}

/// The 104-bit prime field with modulus `2^104 - 17`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compact104;

impl Modulus for Compact104 {
    const NUM_BITS: usize = 104;

    fn modulus() -> &'static BigUint {
        &COMPACT104_MODULUS
    }
}

/// The 128-bit prime field with modulus `2^128 - 159`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compact128;

impl Modulus for Compact128 {
    const NUM_BITS: usize = 128;

    fn modulus() -> &'static BigUint {
        &COMPACT128_MODULUS
    }
}
