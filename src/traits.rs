//! Generic elliptic curve traits.
//!
//! These traits describe the surface a curve implementation exposes to
//! protocol code: a stateless [`Curve`] handle acting as a factory for
//! values, group elements ([`Point`]) and scalars ([`Scalar`]) with
//! constant-time arithmetic, and fixed-width byte encodings.
//!
//! The associated types tie each point and scalar type to exactly one curve,
//! so mixing values from different curve implementations is a compile error
//! rather than a runtime precondition.

use crate::{CompressedPoint, FieldBytes, Result};
use crypto_bigint::{
    subtle::{Choice, CtOption},
    U256,
};

/// An elliptic curve with a prime-order cyclic group.
///
/// Implementations are stateless values: every accessor returns a fresh,
/// independently-owned scalar or point.
pub trait Curve: Clone + Copy + Default + Sized {
    /// Group elements of this curve.
    type Point: Point<Curve = Self>;

    /// Scalars acting on this curve's group.
    type Scalar: Scalar<Curve = Self>;

    /// A human-readable name for this curve.
    fn name(&self) -> &'static str;

    /// The number of bits needed to represent a scalar.
    fn scalar_bits(&self) -> usize;

    /// The number of random bytes from which a scalar can be derived
    /// without bias.
    fn safe_scalar_bytes(&self) -> usize;

    /// The order of this curve's group.
    fn order(&self) -> U256;

    /// Returns a new identity point.
    fn new_point(&self) -> Self::Point;

    /// Returns a fresh copy of this curve's base point.
    fn new_base_point(&self) -> Self::Point;

    /// Returns a new zero-valued scalar.
    fn new_scalar(&self) -> Self::Scalar;
}

/// An element of a curve's group, in constant time.
pub trait Point: Clone + Copy + Sized {
    /// The curve this point belongs to.
    type Curve: Curve<Point = Self>;

    /// The curve this point belongs to.
    fn curve(&self) -> Self::Curve;

    /// Returns `self + rhs`.
    fn add(&self, rhs: &Self) -> Self;

    /// Returns `self - rhs`.
    fn sub(&self, rhs: &Self) -> Self;

    /// Returns `-self`.
    fn negate(&self) -> Self;

    /// Checks whether two points represent the same group element.
    fn equal(&self, rhs: &Self) -> Choice;

    /// Checks whether this point is the identity.
    fn is_identity(&self) -> Choice;

    /// The affine x-coordinate of this point, reduced modulo the group order.
    ///
    /// The identity yields the zero scalar; callers that care must check
    /// [`Point::is_identity`] first.
    fn x_scalar(&self) -> <Self::Curve as Curve>::Scalar;

    /// Serializes this point in SEC1 compressed form.
    ///
    /// Fails with [`Error::CannotEncodeIdentity`](crate::Error) for the
    /// identity point, which compressed SEC1 cannot represent.
    fn marshal(&self) -> Result<CompressedPoint>;

    /// Deserializes a point from its SEC1 compressed form.
    fn unmarshal(data: &[u8]) -> Result<Self>;
}

/// An element of the scalar field acting on a curve's group, in
/// constant time.
pub trait Scalar: Clone + Copy + Sized {
    /// The curve this scalar acts on.
    type Curve: Curve<Scalar = Self>;

    /// The curve this scalar acts on.
    fn curve(&self) -> Self::Curve;

    /// Returns `self + rhs mod q`.
    fn add(&self, rhs: &Self) -> Self;

    /// Returns `self - rhs mod q`.
    fn sub(&self, rhs: &Self) -> Self;

    /// Returns `-self mod q`.
    fn negate(&self) -> Self;

    /// Returns `self * rhs mod q`.
    fn mul(&self, rhs: &Self) -> Self;

    /// Returns the multiplicative inverse, or `None` for the zero scalar.
    fn invert(&self) -> CtOption<Self>;

    /// Checks whether two scalars are equal.
    fn equal(&self, rhs: &Self) -> Choice;

    /// Checks whether this scalar is zero.
    fn is_zero(&self) -> Choice;

    /// Constructs a scalar by reducing an integer modulo the group order.
    fn reduce(uint: &U256) -> Self;

    /// The group action: computes `self · point`.
    fn act(&self, point: &<Self::Curve as Curve>::Point) -> <Self::Curve as Curve>::Point;

    /// Computes `self · G` for the curve's base point G.
    fn act_on_base(&self) -> <Self::Curve as Curve>::Point;

    /// Serializes this scalar as 32 big-endian bytes.
    fn marshal(&self) -> FieldBytes;

    /// Deserializes a scalar from 32 big-endian bytes, rejecting values
    /// not reduced modulo the group order.
    fn unmarshal(data: &[u8]) -> Result<Self>;
}
