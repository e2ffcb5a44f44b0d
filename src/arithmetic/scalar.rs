//! Scalar field arithmetic modulo the group order q.

#![allow(clippy::op_ref)]

use crate::{arithmetic::ProjectivePoint, traits, Error, FieldBytes, Result, Secp256k1, ORDER};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use crypto_bigint::{
    impl_modulus,
    modular::ConstMontyForm,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption},
    Encoding, Invert, U256,
};
use zeroize::DefaultIsZeroes;

impl_modulus!(
    ScalarModulus,
    U256,
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"
);

type Inner = ConstMontyForm<ScalarModulus, { U256::LIMBS }>;

/// An element of the secp256k1 scalar field, i.e. a residue modulo the
/// group order q.
///
/// Scalars act on curve points by multiplication ([`traits::Scalar::act`]);
/// all arithmetic is constant-time in operand values.
#[derive(Clone, Copy, Debug)]
pub struct Scalar(Inner);

impl Scalar {
    /// The zero scalar.
    pub const ZERO: Self = Self(Inner::ZERO);

    /// The multiplicative identity.
    pub const ONE: Self = Self(Inner::ONE);

    /// Converts a small integer into a scalar.
    pub const fn from_u64(w: u64) -> Self {
        Self(Inner::new(&U256::from_u64(w)))
    }

    /// Converts an integer into a scalar, reducing it modulo q.
    pub const fn from_uint_reduced(w: &U256) -> Self {
        Self(Inner::new(w))
    }

    /// Decodes a scalar from 32 big-endian bytes.
    ///
    /// Returns `None` if the value is not reduced modulo the group order q.
    /// The bound really is q: an integer in `[q, p)` is a valid field
    /// encoding but not a valid scalar.
    pub fn from_bytes(repr: &FieldBytes) -> CtOption<Self> {
        let w = U256::from_be_bytes(*repr);
        CtOption::new(Self(Inner::new(&w)), w.ct_lt(&ORDER))
    }

    /// Decodes a scalar from a byte slice, which must be exactly 32
    /// big-endian bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let repr: &FieldBytes = slice.try_into().map_err(|_| Error::InvalidLength {
            expected: 32,
            actual: slice.len(),
        })?;
        Option::from(Self::from_bytes(repr)).ok_or(Error::OutOfRange)
    }

    /// Encodes this scalar as 32 big-endian bytes.
    pub fn to_bytes(self) -> FieldBytes {
        self.0.retrieve().to_be_bytes()
    }

    /// Checks whether the scalar is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Returns `self + rhs mod q`.
    pub const fn add(&self, rhs: &Self) -> Self {
        Self(Inner::add(&self.0, &rhs.0))
    }

    /// Returns `self - rhs mod q`.
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self(Inner::sub(&self.0, &rhs.0))
    }

    /// Returns `self * rhs mod q`.
    pub const fn mul(&self, rhs: &Self) -> Self {
        Self(Inner::mul(&self.0, &rhs.0))
    }

    /// Returns `-self mod q`.
    pub const fn negate(&self) -> Self {
        Self(Inner::neg(&self.0))
    }

    /// Returns `self * self mod q`.
    pub const fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Returns the multiplicative inverse of `self`, if `self` is non-zero.
    pub fn invert(&self) -> CtOption<Self> {
        Invert::invert(&self.0).map(Self)
    }
}

impl traits::Scalar for Scalar {
    type Curve = Secp256k1;

    fn curve(&self) -> Secp256k1 {
        Secp256k1
    }

    fn add(&self, rhs: &Self) -> Self {
        Scalar::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Scalar::sub(self, rhs)
    }

    fn negate(&self) -> Self {
        Scalar::negate(self)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Scalar::mul(self, rhs)
    }

    fn invert(&self) -> CtOption<Self> {
        Scalar::invert(self)
    }

    fn equal(&self, rhs: &Self) -> Choice {
        self.ct_eq(rhs)
    }

    fn is_zero(&self) -> Choice {
        Scalar::is_zero(self)
    }

    fn reduce(uint: &U256) -> Self {
        Self::from_uint_reduced(uint)
    }

    fn act(&self, point: &ProjectivePoint) -> ProjectivePoint {
        self * point
    }

    fn act_on_base(&self) -> ProjectivePoint {
        ProjectivePoint::mul_by_generator(self)
    }

    fn marshal(&self) -> FieldBytes {
        self.to_bytes()
    }

    fn unmarshal(data: &[u8]) -> Result<Self> {
        Self::from_slice(data)
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Inner::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl Default for Scalar {
    fn default() -> Self {
        Self::ZERO
    }
}

impl DefaultIsZeroes for Scalar {}

impl From<u64> for Scalar {
    fn from(w: u64) -> Self {
        Self::from_u64(w)
    }
}

impl Add<Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, other: Scalar) -> Scalar {
        Scalar::add(&self, &other)
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        Scalar::add(&self, other)
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        Scalar::add(self, other)
    }
}

impl AddAssign<Scalar> for Scalar {
    fn add_assign(&mut self, rhs: Scalar) {
        *self = Scalar::add(self, &rhs);
    }
}

impl AddAssign<&Scalar> for Scalar {
    fn add_assign(&mut self, rhs: &Scalar) {
        *self = Scalar::add(self, rhs);
    }
}

impl Sub<Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, other: Scalar) -> Scalar {
        Scalar::sub(&self, &other)
    }
}

impl Sub<&Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, other: &Scalar) -> Scalar {
        Scalar::sub(&self, other)
    }
}

impl Sub<&Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, other: &Scalar) -> Scalar {
        Scalar::sub(self, other)
    }
}

impl SubAssign<Scalar> for Scalar {
    fn sub_assign(&mut self, rhs: Scalar) {
        *self = Scalar::sub(self, &rhs);
    }
}

impl SubAssign<&Scalar> for Scalar {
    fn sub_assign(&mut self, rhs: &Scalar) {
        *self = Scalar::sub(self, rhs);
    }
}

impl Mul<Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, other: Scalar) -> Scalar {
        Scalar::mul(&self, &other)
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        Scalar::mul(&self, other)
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        Scalar::mul(self, other)
    }
}

impl MulAssign<Scalar> for Scalar {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = Scalar::mul(self, &rhs);
    }
}

impl MulAssign<&Scalar> for Scalar {
    fn mul_assign(&mut self, rhs: &Scalar) {
        *self = Scalar::mul(self, rhs);
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar::negate(&self)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar::negate(self)
    }
}
