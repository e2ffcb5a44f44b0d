//! Scalar multiplication: the action of the scalar field on curve points.

use crate::arithmetic::{ProjectivePoint, Scalar};
use core::ops::{Mul, MulAssign};
use crypto_bigint::subtle::{Choice, ConditionallySelectable};

/// Computes `scalar * point` with a fixed double-and-add ladder.
///
/// The ladder walks the scalar's 32-byte big-endian encoding from the most
/// significant bit down. Every iteration performs exactly one doubling and
/// one complete addition; the scalar bit only selects between the two
/// results by conditional assignment, so the instruction sequence is
/// independent of the scalar's value.
pub(crate) fn mul(point: &ProjectivePoint, scalar: &Scalar) -> ProjectivePoint {
    let mut acc = ProjectivePoint::IDENTITY;

    for byte in scalar.to_bytes() {
        for i in (0..8).rev() {
            acc = acc.double();
            let sum = acc + point;
            acc.conditional_assign(&sum, Choice::from((byte >> i) & 1));
        }
    }

    acc
}

impl ProjectivePoint {
    /// Computes `scalar * G` for the secp256k1 base point G.
    pub fn mul_by_generator(scalar: &Scalar) -> ProjectivePoint {
        mul(&ProjectivePoint::GENERATOR, scalar)
    }
}

impl Mul<Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: Scalar) -> ProjectivePoint {
        mul(&self, &other)
    }
}

impl Mul<&Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: &Scalar) -> ProjectivePoint {
        mul(&self, other)
    }
}

impl Mul<&Scalar> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: &Scalar) -> ProjectivePoint {
        mul(self, other)
    }
}

impl MulAssign<Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = mul(self, &rhs);
    }
}

impl MulAssign<&Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, rhs: &Scalar) {
        *self = mul(self, rhs);
    }
}

impl Mul<ProjectivePoint> for Scalar {
    type Output = ProjectivePoint;

    fn mul(self, other: ProjectivePoint) -> ProjectivePoint {
        mul(&other, &self)
    }
}

impl Mul<&ProjectivePoint> for Scalar {
    type Output = ProjectivePoint;

    fn mul(self, other: &ProjectivePoint) -> ProjectivePoint {
        mul(other, &self)
    }
}

impl Mul<&ProjectivePoint> for &Scalar {
    type Output = ProjectivePoint;

    fn mul(self, other: &ProjectivePoint) -> ProjectivePoint {
        mul(other, self)
    }
}

#[cfg(test)]
mod tests {
    use super::mul;
    use crate::{
        arithmetic::{AffinePoint, FieldElement, ProjectivePoint, Scalar, CURVE_EQUATION_B},
        ORDER,
    };
    use crypto_bigint::U256;
    use proptest::prelude::*;

    prop_compose! {
        fn scalar()(bytes in any::<[u8; 32]>()) -> Scalar {
            Scalar::from_uint_reduced(&U256::from_be_slice(&bytes))
        }
    }

    prop_compose! {
        fn curve_point()(bytes in any::<[u8; 32]>()) -> ProjectivePoint {
            let mut x = FieldElement::from_uint_reduced(&U256::from_be_slice(&bytes));
            loop {
                let rhs = x.square() * x + CURVE_EQUATION_B;
                if bool::from(rhs.is_square()) {
                    let y = rhs.sqrt().unwrap();
                    return AffinePoint::new(x, y).into();
                }
                x += FieldElement::ONE;
            }
        }
    }

    #[test]
    fn one_fixes_the_basepoint() {
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(g * Scalar::ONE, g);
        assert_eq!(ProjectivePoint::mul_by_generator(&Scalar::ONE), g);
    }

    #[test]
    fn zero_annihilates() {
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(g * Scalar::ZERO, ProjectivePoint::IDENTITY);
    }

    #[test]
    fn order_annihilates_the_basepoint() {
        // q reduces to the zero scalar, so q·G is the identity.
        let q = Scalar::from_uint_reduced(&ORDER);
        assert!(bool::from(q.is_zero()));
        assert_eq!(
            ProjectivePoint::mul_by_generator(&q),
            ProjectivePoint::IDENTITY
        );
    }

    #[test]
    fn small_multiples_match_repeated_addition() {
        let g = ProjectivePoint::GENERATOR;
        let mut expected = ProjectivePoint::IDENTITY;

        for k in 1u64..=8 {
            expected += g;
            assert_eq!(g * Scalar::from_u64(k), expected);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn action_distributes_over_scalar_addition(
            a in scalar(),
            b in scalar(),
            p in curve_point(),
        ) {
            prop_assert_eq!((p * a) + (p * b), p * (a + b));
        }

        #[test]
        fn action_is_compatible_with_scalar_multiplication(
            a in scalar(),
            b in scalar(),
            p in curve_point(),
        ) {
            prop_assert_eq!(p * (a * b), (p * b) * a);
        }

        #[test]
        fn zero_annihilates_any_point(p in curve_point()) {
            prop_assert_eq!(p * Scalar::ZERO, ProjectivePoint::IDENTITY);
        }

        #[test]
        fn one_fixes_any_point(p in curve_point()) {
            prop_assert_eq!(p * Scalar::ONE, p);
        }

        #[test]
        fn order_annihilates_any_point(p in curve_point()) {
            prop_assert_eq!(mul(&p, &Scalar::from_uint_reduced(&ORDER)), ProjectivePoint::IDENTITY);
        }

        #[test]
        fn action_stays_on_curve(a in scalar(), p in curve_point()) {
            prop_assert!(bool::from((p * a).is_on_curve()));
        }
    }
}
