//! Projective points.

#![allow(clippy::op_ref)]

use super::{CURVE_EQUATION_B, CURVE_EQUATION_B3};
use crate::{
    arithmetic::{AffinePoint, FieldElement, Scalar},
    traits, CompressedPoint, Error, Result, Secp256k1,
};
use core::{
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};
use crypto_bigint::{
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
    Encoding, U256,
};
use zeroize::DefaultIsZeroes;

/// A point on the secp256k1 curve in projective coordinates.
///
/// The triple (X : Y : Z) represents the affine point (X/Z, Y/Z) when Z ≠ 0
/// and the point at infinity when Z = 0, so the identity needs no special
/// case anywhere in the arithmetic.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl ProjectivePoint {
    /// Additive identity of the group: the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    /// Base point of secp256k1.
    pub const GENERATOR: Self = Self {
        x: AffinePoint::GENERATOR.x,
        y: AffinePoint::GENERATOR.y,
        z: FieldElement::ONE,
    };

    /// Is this point the identity point?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Returns the affine representation of this point.
    ///
    /// Both cases run the same instruction sequence: Z is inverted
    /// unconditionally (the result is irrelevant when Z = 0) and the identity
    /// representative is installed by conditional assignment afterwards.
    pub fn to_affine(&self) -> AffinePoint {
        let zinv = self.z.invert().unwrap_or(FieldElement::ZERO);
        let affine = AffinePoint::new(self.x * &zinv, self.y * &zinv);
        AffinePoint::conditional_select(&affine, &AffinePoint::IDENTITY, self.z.is_zero())
    }

    /// Checks the projective curve equation `Y²·Z = X³ + 7·Z³`.
    ///
    /// Holds for every valid point, including the identity.
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square() * &self.z;
        let rhs = self.x.square() * &self.x + CURVE_EQUATION_B * self.z.square() * &self.z;
        lhs.ct_eq(&rhs)
    }

    /// Returns `-self`.
    fn neg(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Returns `self + other`.
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina
    /// 2015] (Algorithm 7), specialized to a = 0 with b3 = 3·7 = 21. It is
    /// valid for every pair of inputs — doublings, identities and P + (−P)
    /// included — with no data-dependent branches. The comments after each
    /// line indicate which algorithm steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add(&self, other: &ProjectivePoint) -> ProjectivePoint {
        let b3 = CURVE_EQUATION_B3;

        let t0 = self.x * &other.x; // 1
        let t1 = self.y * &other.y; // 2
        let t2 = self.z * &other.z; // 3
        let t3 = self.x + &self.y; // 4
        let t4 = other.x + &other.y; // 5
        let t3 = t3 * &t4; // 6
        let t4 = t0 + &t1; // 7
        let t3 = t3 - &t4; // 8
        let t4 = self.y + &self.z; // 9
        let x3 = other.y + &other.z; // 10
        let t4 = t4 * &x3; // 11
        let x3 = t1 + &t2; // 12
        let t4 = t4 - &x3; // 13
        let x3 = self.x + &self.z; // 14
        let y3 = other.x + &other.z; // 15
        let x3 = x3 * &y3; // 16
        let y3 = t0 + &t2; // 17
        let y3 = x3 - &y3; // 18
        let x3 = t0 + &t0; // 19
        let t0 = x3 + &t0; // 20
        let t2 = b3 * &t2; // 21
        let z3 = t1 + &t2; // 22
        let t1 = t1 - &t2; // 23
        let y3 = b3 * &y3; // 24
        let x3 = t4 * &y3; // 25
        let t2 = t3 * &t1; // 26
        let x3 = t2 - &x3; // 27
        let y3 = y3 * &t0; // 28
        let t1 = t1 * &z3; // 29
        let y3 = t1 + &y3; // 30
        let t0 = t0 * &t3; // 31
        let z3 = z3 * &t4; // 32
        let z3 = z3 + &t0; // 33

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Doubles this point.
    ///
    /// The addition formula is complete, so doubling is simply `self + self`.
    pub fn double(&self) -> ProjectivePoint {
        self.add(self)
    }

    /// Returns `self - other`.
    fn sub(&self, other: &ProjectivePoint) -> ProjectivePoint {
        self.add(&other.neg())
    }
}

impl From<AffinePoint> for ProjectivePoint {
    fn from(p: AffinePoint) -> Self {
        let projective = ProjectivePoint {
            x: p.x,
            y: p.y,
            z: FieldElement::ONE,
        };
        Self::conditional_select(&projective, &Self::IDENTITY, p.is_identity())
    }
}

impl From<&AffinePoint> for ProjectivePoint {
    fn from(p: &AffinePoint) -> Self {
        Self::from(*p)
    }
}

impl From<ProjectivePoint> for AffinePoint {
    fn from(p: ProjectivePoint) -> AffinePoint {
        p.to_affine()
    }
}

impl From<&ProjectivePoint> for AffinePoint {
    fn from(p: &ProjectivePoint) -> AffinePoint {
        p.to_affine()
    }
}

impl traits::Point for ProjectivePoint {
    type Curve = Secp256k1;

    fn curve(&self) -> Secp256k1 {
        Secp256k1
    }

    fn add(&self, rhs: &Self) -> Self {
        ProjectivePoint::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Self {
        ProjectivePoint::sub(self, rhs)
    }

    fn negate(&self) -> Self {
        ProjectivePoint::neg(self)
    }

    fn equal(&self, rhs: &Self) -> Choice {
        self.ct_eq(rhs)
    }

    fn is_identity(&self) -> Choice {
        ProjectivePoint::is_identity(self)
    }

    fn x_scalar(&self) -> Scalar {
        Scalar::from_uint_reduced(&U256::from_be_bytes(self.to_affine().x()))
    }

    fn marshal(&self) -> Result<CompressedPoint> {
        let affine = self.to_affine();
        if bool::from(affine.is_identity()) {
            return Err(Error::CannotEncodeIdentity);
        }
        Ok(affine.to_compressed())
    }

    fn unmarshal(data: &[u8]) -> Result<Self> {
        let bytes: &CompressedPoint = data.try_into().map_err(|_| Error::InvalidLength {
            expected: 33,
            actual: data.len(),
        })?;

        // The prefix byte encodes the parity of y; anything other than the
        // two compressed-form tags is not a point encoding.
        let y_is_odd = match bytes[0] {
            0x02 => Choice::from(0),
            0x03 => Choice::from(1),
            _ => return Err(Error::InvalidPoint),
        };

        let mut x_bytes = [0u8; 32];
        x_bytes.copy_from_slice(&bytes[1..]);
        let x = Option::from(FieldElement::from_bytes(&x_bytes)).ok_or(Error::OutOfRange)?;

        let affine: Option<AffinePoint> = AffinePoint::decompress(&x, y_is_odd).into();
        affine.map(Self::from).ok_or(Error::InvalidPoint)
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ConstantTimeEq for ProjectivePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        // Comparing normalized representatives (x₁, y₁) and (x₂, y₂) is the
        // same as comparing the cross-multiplied coordinates
        // (x₁z₂, y₁z₂) and (x₂z₁, y₂z₁), which needs no inversion.
        //
        // An identity is always of the form (0, y, 0) with y ≠ 0: both sides
        // identity compares (0, 0) with (0, 0); identity against a finite
        // point leaves one y-product of the form y·z ≠ 0 against 0.
        let lhs_x = self.x * &other.z;
        let rhs_x = other.x * &self.z;
        let lhs_y = self.y * &other.z;
        let rhs_y = other.y * &self.z;
        lhs_x.ct_eq(&rhs_x) & lhs_y.ct_eq(&rhs_y)
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ProjectivePoint {}

impl Default for ProjectivePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DefaultIsZeroes for ProjectivePoint {}

impl Add<ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(&self, &other)
    }
}

impl Add<&ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(&self, other)
    }
}

impl Add<&ProjectivePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(self, other)
    }
}

impl AddAssign<ProjectivePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: ProjectivePoint) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl AddAssign<&ProjectivePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: &ProjectivePoint) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl Sub<ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(&self, &other)
    }
}

impl Sub<&ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(&self, other)
    }
}

impl Sub<&ProjectivePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(self, other)
    }
}

impl SubAssign<ProjectivePoint> for ProjectivePoint {
    fn sub_assign(&mut self, rhs: ProjectivePoint) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl SubAssign<&ProjectivePoint> for ProjectivePoint {
    fn sub_assign(&mut self, rhs: &ProjectivePoint) {
        *self = ProjectivePoint::sub(self, rhs);
    }
}

impl Neg for ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint::neg(&self)
    }
}

impl Neg for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint::neg(self)
    }
}

impl Sum for ProjectivePoint {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ProjectivePoint::IDENTITY, |a, b| a + b)
    }
}

impl<'a> Sum<&'a ProjectivePoint> for ProjectivePoint {
    fn sum<I: Iterator<Item = &'a ProjectivePoint>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
