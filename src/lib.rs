//! secp256k1 elliptic curve
//!
//! A pure-Rust implementation of the secp256k1 curve `y² = x³ + 7` over the
//! ~256-bit prime field with p = 2²⁵⁶ − 2³² − 977, as specified in Certicom's
//! SEC 2: Recommended Elliptic Curve Domain Parameters:
//!
//! <https://www.secg.org/sec2-v2.pdf>
//!
//! It's primarily notable for its use in Bitcoin and other cryptocurrencies.
//!
//! All arithmetic is constant-time in operand values: field and scalar
//! operations are delegated to [`crypto_bigint`]'s Montgomery-form modular
//! integers, point addition uses a complete formula with no data-dependent
//! branches, and scalar multiplication runs a fixed double-and-add ladder
//! driven by conditional assignment.

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

#[cfg(test)]
extern crate std;

pub mod arithmetic;
pub mod traits;

mod error;

pub use crate::{
    arithmetic::{AffinePoint, FieldElement, ProjectivePoint, Scalar},
    error::{Error, Result},
};
pub use crypto_bigint as bigint;

use crypto_bigint::U256;

/// 32-byte big-endian serialization of a field element or scalar.
pub type FieldBytes = [u8; 32];

/// 33-byte SEC1 compressed serialization of a curve point.
pub type CompressedPoint = [u8; 33];

/// p = 2²⁵⁶ − 2³² − 977: the modulus of the base field.
pub const FIELD_MODULUS: U256 =
    U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

/// q: the order of the secp256k1 group, i.e. the modulus of the scalar field.
pub const ORDER: U256 =
    U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// The secp256k1 elliptic curve.
///
/// Stateless handle implementing [`traits::Curve`]: it produces fresh
/// zero-valued scalars, identity points, and copies of the base point, and
/// exposes the curve's domain parameters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Secp256k1;

impl traits::Curve for Secp256k1 {
    type Point = ProjectivePoint;
    type Scalar = Scalar;

    fn name(&self) -> &'static str {
        "secp256k1"
    }

    fn scalar_bits(&self) -> usize {
        256
    }

    fn safe_scalar_bytes(&self) -> usize {
        32
    }

    fn order(&self) -> U256 {
        ORDER
    }

    fn new_point(&self) -> ProjectivePoint {
        ProjectivePoint::IDENTITY
    }

    fn new_base_point(&self) -> ProjectivePoint {
        // `GENERATOR` is a const; every call hands out an independent copy.
        ProjectivePoint::GENERATOR
    }

    fn new_scalar(&self) -> Scalar {
        Scalar::ZERO
    }
}
