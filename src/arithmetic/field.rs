//! Field arithmetic modulo p = 2²⁵⁶ − 2³² − 977.
//!
//! Elements are held in Montgomery form by [`crypto_bigint`]'s
//! [`ConstMontyForm`], which provides the constant-time modular primitives;
//! this module layers the curve-specific operations (Legendre symbol, square
//! roots, parity, serialization) on top.

#![allow(clippy::op_ref)]

use crate::{Error, FieldBytes, Result, FIELD_MODULUS};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use crypto_bigint::{
    impl_modulus,
    modular::ConstMontyForm,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption},
    Encoding, Invert, U256,
};
use zeroize::DefaultIsZeroes;

impl_modulus!(
    FieldModulus,
    U256,
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"
);

type Inner = ConstMontyForm<FieldModulus, { U256::LIMBS }>;

/// An element of the secp256k1 base field, i.e. a residue in `[0, p)`.
///
/// All operations are constant-time in the values of their operands. The
/// residue is reduced modulo p by construction and stays reduced through
/// every operation.
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(Inner);

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = Self(Inner::ZERO);

    /// The multiplicative identity.
    pub const ONE: Self = Self(Inner::ONE);

    /// (p − 1) / 2: the Legendre symbol exponent.
    const LEGENDRE_EXPONENT: U256 =
        U256::from_be_hex("7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF7FFFFE17");

    /// (p + 1) / 4: the square root exponent, valid because p ≡ 3 (mod 4).
    const SQRT_EXPONENT: U256 =
        U256::from_be_hex("3FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFBFFFFF0C");

    /// Converts a small integer into a field element.
    pub const fn from_u64(w: u64) -> Self {
        Self(Inner::new(&U256::from_u64(w)))
    }

    /// Converts an integer into a field element, reducing it modulo p.
    pub const fn from_uint_reduced(w: &U256) -> Self {
        Self(Inner::new(w))
    }

    /// Parses a field element from a big-endian hex string.
    ///
    /// Intended for defining constants; panics at compile time on
    /// malformed input.
    pub(crate) const fn from_hex(hex: &str) -> Self {
        Self(Inner::new(&U256::from_be_hex(hex)))
    }

    /// Decodes a field element from 32 big-endian bytes.
    ///
    /// Returns `None` if the value is not reduced modulo p.
    pub fn from_bytes(repr: &FieldBytes) -> CtOption<Self> {
        let w = U256::from_be_bytes(*repr);
        CtOption::new(Self(Inner::new(&w)), w.ct_lt(&FIELD_MODULUS))
    }

    /// Decodes a field element from a byte slice, which must be exactly
    /// 32 big-endian bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let repr: &FieldBytes = slice.try_into().map_err(|_| Error::InvalidLength {
            expected: 32,
            actual: slice.len(),
        })?;
        Option::from(Self::from_bytes(repr)).ok_or(Error::OutOfRange)
    }

    /// Encodes this field element as 32 big-endian bytes.
    pub fn to_bytes(self) -> FieldBytes {
        self.0.retrieve().to_be_bytes()
    }

    /// Checks whether the element is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Checks whether the least significant bit of the residue is set.
    pub fn is_odd(&self) -> Choice {
        Choice::from(self.to_bytes()[31] & 1)
    }

    /// Checks whether the residue is even.
    pub fn is_even(&self) -> Choice {
        !self.is_odd()
    }

    /// Returns `self + rhs mod p`.
    pub const fn add(&self, rhs: &Self) -> Self {
        Self(Inner::add(&self.0, &rhs.0))
    }

    /// Returns `self + rhs mod p`, treating `rhs` as a small integer.
    pub const fn add_single(&self, rhs: u64) -> Self {
        Self(Inner::add(&self.0, &Inner::new(&U256::from_u64(rhs))))
    }

    /// Returns `self - rhs mod p`.
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self(Inner::sub(&self.0, &rhs.0))
    }

    /// Returns `self * rhs mod p`.
    pub const fn mul(&self, rhs: &Self) -> Self {
        Self(Inner::mul(&self.0, &rhs.0))
    }

    /// Returns `self * rhs mod p`, treating `rhs` as a small integer.
    pub const fn mul_single(&self, rhs: u64) -> Self {
        Self(Inner::mul(&self.0, &Inner::new(&U256::from_u64(rhs))))
    }

    /// Returns `-self mod p`.
    pub const fn negate(&self) -> Self {
        Self(Inner::neg(&self.0))
    }

    /// Returns `self * self mod p`.
    pub const fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Returns `2 * self mod p`.
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns the multiplicative inverse of `self`, if `self` is non-zero.
    pub fn invert(&self) -> CtOption<Self> {
        Invert::invert(&self.0).map(Self)
    }

    /// The Legendre symbol, as a choice: 1 if the element is a quadratic
    /// residue modulo p (or zero), 0 otherwise.
    ///
    /// Computed as `self^((p − 1) / 2)`.
    pub fn is_square(&self) -> Choice {
        let chi = self.pow(&Self::LEGENDRE_EXPONENT);
        chi.ct_eq(&Self::ONE) | chi.is_zero()
    }

    /// Returns the square root of `self` mod p, or `None` if no square
    /// root exists.
    ///
    /// Since p ≡ 3 (mod 4), the candidate root is `self^((p + 1) / 4)`;
    /// squaring it back decides whether `self` was a residue at all.
    pub fn sqrt(&self) -> CtOption<Self> {
        let sqrt = self.pow(&Self::SQRT_EXPONENT);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    fn pow(&self, exponent: &U256) -> Self {
        Self(self.0.pow(exponent))
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Inner::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl DefaultIsZeroes for FieldElement {}

impl From<u64> for FieldElement {
    fn from(w: u64) -> Self {
        Self::from_u64(w)
    }
}

impl Add<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: FieldElement) -> FieldElement {
        FieldElement::add(&self, &other)
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement::add(&self, other)
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement::add(self, other)
    }
}

impl AddAssign<FieldElement> for FieldElement {
    fn add_assign(&mut self, rhs: FieldElement) {
        *self = FieldElement::add(self, &rhs);
    }
}

impl AddAssign<&FieldElement> for FieldElement {
    fn add_assign(&mut self, rhs: &FieldElement) {
        *self = FieldElement::add(self, rhs);
    }
}

impl Sub<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: FieldElement) -> FieldElement {
        FieldElement::sub(&self, &other)
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement::sub(&self, other)
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement::sub(self, other)
    }
}

impl SubAssign<FieldElement> for FieldElement {
    fn sub_assign(&mut self, rhs: FieldElement) {
        *self = FieldElement::sub(self, &rhs);
    }
}

impl SubAssign<&FieldElement> for FieldElement {
    fn sub_assign(&mut self, rhs: &FieldElement) {
        *self = FieldElement::sub(self, rhs);
    }
}

impl Mul<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: FieldElement) -> FieldElement {
        FieldElement::mul(&self, &other)
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::mul(&self, other)
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::mul(self, other)
    }
}

impl MulAssign<FieldElement> for FieldElement {
    fn mul_assign(&mut self, rhs: FieldElement) {
        *self = FieldElement::mul(self, &rhs);
    }
}

impl MulAssign<&FieldElement> for FieldElement {
    fn mul_assign(&mut self, rhs: &FieldElement) {
        *self = FieldElement::mul(self, rhs);
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::negate(&self)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::negate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldElement;
    use crate::{Error, FIELD_MODULUS};
    use crypto_bigint::{
        subtle::{ConditionallyNegatable, Choice},
        Encoding, U256,
    };
    use proptest::prelude::*;

    prop_compose! {
        fn field_element()(bytes in any::<[u8; 32]>()) -> FieldElement {
            FieldElement::from_uint_reduced(&U256::from_be_slice(&bytes))
        }
    }

    #[test]
    fn zero_is_additive_identity() {
        let zero = FieldElement::ZERO;
        let one = FieldElement::ONE;
        assert_eq!(zero + zero, zero);
        assert_eq!(one + zero, one);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let one = FieldElement::ONE;
        assert_eq!(one * one, one);
    }

    #[test]
    fn from_bytes() {
        assert_eq!(
            FieldElement::from_bytes(&[0; 32]).unwrap(),
            FieldElement::ZERO
        );

        let mut one = [0u8; 32];
        one[31] = 1;
        assert_eq!(FieldElement::from_bytes(&one).unwrap(), FieldElement::ONE);

        // p itself and anything above it must be rejected.
        assert!(bool::from(
            FieldElement::from_bytes(&FIELD_MODULUS.to_be_bytes()).is_none()
        ));
        assert!(bool::from(FieldElement::from_bytes(&[0xff; 32]).is_none()));

        // p - 1 is the largest valid encoding.
        let p_minus_one = FIELD_MODULUS.wrapping_sub(&U256::ONE);
        assert!(bool::from(
            FieldElement::from_bytes(&p_minus_one.to_be_bytes()).is_some()
        ));
    }

    #[test]
    fn from_slice_rejects_bad_lengths() {
        assert_eq!(
            FieldElement::from_slice(&[0u8; 31]),
            Err(Error::InvalidLength {
                expected: 32,
                actual: 31
            })
        );
        assert_eq!(
            FieldElement::from_slice(&[0u8; 33]),
            Err(Error::InvalidLength {
                expected: 32,
                actual: 33
            })
        );
        assert_eq!(
            FieldElement::from_slice(&FIELD_MODULUS.to_be_bytes()),
            Err(Error::OutOfRange)
        );
    }

    #[test]
    fn to_bytes() {
        assert_eq!(FieldElement::ZERO.to_bytes(), [0; 32]);

        let mut one = [0u8; 32];
        one[31] = 1;
        assert_eq!(FieldElement::ONE.to_bytes(), one);
    }

    #[test]
    fn negation() {
        let two = FieldElement::from_u64(2);
        let neg_two = -two;
        assert_eq!(two + neg_two, FieldElement::ZERO);
        assert_eq!(-neg_two, two);
    }

    #[test]
    fn conditional_negation() {
        let mut x = FieldElement::from_u64(5);
        x.conditional_negate(Choice::from(0));
        assert_eq!(x, FieldElement::from_u64(5));
        x.conditional_negate(Choice::from(1));
        assert_eq!(x, -FieldElement::from_u64(5));
    }

    #[test]
    fn invert() {
        assert!(bool::from(FieldElement::ZERO.invert().is_none()));

        let one = FieldElement::ONE;
        assert_eq!(one.invert().unwrap(), one);

        let two = FieldElement::from_u64(2);
        let inv_two = two.invert().unwrap();
        assert_eq!(two * inv_two, one);
    }

    #[test]
    fn sqrt() {
        let two = FieldElement::from_u64(2);
        let four = two.square();
        let root = four.sqrt().unwrap();
        assert_eq!(root.square(), four);
        assert!(bool::from(four.is_square()));

        // 7 is a non-residue mod p, which also makes x = 0 an invalid
        // compressed-point abscissa.
        let seven = FieldElement::from_u64(7);
        assert!(!bool::from(seven.is_square()));
        assert!(bool::from(seven.sqrt().is_none()));
    }

    #[test]
    fn parity() {
        assert!(bool::from(FieldElement::ZERO.is_even()));
        assert!(bool::from(FieldElement::ONE.is_odd()));
        assert!(bool::from(FieldElement::from_u64(2).is_even()));
    }

    #[test]
    fn small_operand_variants() {
        let x = FieldElement::from_u64(41);
        assert_eq!(x.add_single(1), FieldElement::from_u64(42));
        assert_eq!(x.mul_single(2), FieldElement::from_u64(82));
    }

    proptest! {
        #[test]
        fn add_commutative(a in field_element(), b in field_element()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn add_associative(a in field_element(), b in field_element(), c in field_element()) {
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn add_zero_identity(a in field_element()) {
            prop_assert_eq!(a + FieldElement::ZERO, a);
        }

        #[test]
        fn add_negation_cancels(a in field_element()) {
            prop_assert_eq!(a + (-a), FieldElement::ZERO);
        }

        #[test]
        fn mul_commutative(a in field_element(), b in field_element()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn mul_one_identity(a in field_element()) {
            prop_assert_eq!(a * FieldElement::ONE, a);
        }

        #[test]
        fn mul_inverse(a in field_element()) {
            prop_assume!(!bool::from(a.is_zero()));
            prop_assert_eq!(a.invert().unwrap() * a, FieldElement::ONE);
        }

        #[test]
        fn mul_distributes_over_add(
            a in field_element(),
            b in field_element(),
            c in field_element(),
        ) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn square_roots_of_squares(a in field_element()) {
            let sq = a.square();
            prop_assert!(bool::from(sq.is_square()));
            prop_assert_eq!(sq.sqrt().unwrap().square(), sq);
        }

        #[test]
        fn bytes_round_trip(a in field_element()) {
            prop_assert_eq!(FieldElement::from_bytes(&a.to_bytes()).unwrap(), a);
        }
    }
}
