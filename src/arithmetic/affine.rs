//! Affine points.
//!
//! [`AffinePoint`] is the canonical representative of a group element: a
//! normalized [`ProjectivePoint`](crate::ProjectivePoint) with Z fixed to 1
//! (or the identity flag set). The SEC1 compressed codec lives here, since
//! it is defined on affine coordinates.

#![allow(clippy::op_ref)]

use super::CURVE_EQUATION_B;
use crate::{arithmetic::FieldElement, CompressedPoint, FieldBytes};
use core::ops::Neg;
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// A point on the secp256k1 curve in affine coordinates.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint {
    /// x-coordinate.
    pub(crate) x: FieldElement,

    /// y-coordinate.
    pub(crate) y: FieldElement,

    /// Is this point the point at infinity? 0 = no, 1 = yes.
    ///
    /// This is a proxy for [`Choice`], but uses `u8` instead to permit
    /// `const` constructors for `IDENTITY` and `GENERATOR`.
    pub(crate) infinity: u8,
}

impl AffinePoint {
    /// Additive identity of the group: the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
        infinity: 1,
    };

    /// Base point of secp256k1.
    ///
    /// ```text
    /// Gₓ = 79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798
    /// Gᵧ = 483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8
    /// ```
    pub const GENERATOR: Self = Self {
        x: FieldElement::from_hex(
            "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        ),
        y: FieldElement::from_hex(
            "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
        ),
        infinity: 0,
    };

    /// Creates a new [`AffinePoint`] with the given coordinates.
    pub(crate) const fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y, infinity: 0 }
    }

    /// Is this point the identity point?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// The x-coordinate, as 32 big-endian bytes.
    pub fn x(&self) -> FieldBytes {
        self.x.to_bytes()
    }

    /// Whether the y-coordinate is odd.
    pub fn y_is_odd(&self) -> Choice {
        self.y.is_odd()
    }

    /// Decompresses a point from its x-coordinate and the parity of its
    /// y-coordinate.
    ///
    /// Solves `y² = x³ + 7` for y, then negates the root if its parity does
    /// not match the request. Returns `None` when the right-hand side has no
    /// square root, i.e. `x` is not the abscissa of a curve point.
    pub fn decompress(x: &FieldElement, y_is_odd: Choice) -> CtOption<Self> {
        let alpha = x.square() * x + CURVE_EQUATION_B;
        alpha.sqrt().map(|beta| {
            let y = FieldElement::conditional_select(
                &-beta,
                &beta,
                beta.is_odd().ct_eq(&y_is_odd),
            );
            Self::new(*x, y)
        })
    }

    /// Returns the SEC1 compressed encoding of this point.
    ///
    /// The identity is not representable; callers must exclude it first
    /// (the [`traits::Point::marshal`](crate::traits::Point::marshal)
    /// boundary turns it into an error).
    pub fn to_compressed(&self) -> CompressedPoint {
        let mut encoded = [0u8; 33];
        encoded[0] = u8::conditional_select(&0x02, &0x03, self.y.is_odd());
        encoded[1..].copy_from_slice(&self.x.to_bytes());
        encoded
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DefaultIsZeroes for AffinePoint {}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> Self::Output {
        AffinePoint {
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AffinePoint;
    use crate::arithmetic::FieldElement;
    use crypto_bigint::subtle::Choice;
    use hex_literal::hex;

    const COMPRESSED_BASEPOINT: [u8; 33] =
        hex!("0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

    #[test]
    fn generator_is_on_curve() {
        let g = AffinePoint::GENERATOR;
        let lhs = g.y.square();
        let rhs = g.x.square() * g.x + super::CURVE_EQUATION_B;
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn compress_basepoint() {
        assert_eq!(AffinePoint::GENERATOR.to_compressed(), COMPRESSED_BASEPOINT);
    }

    #[test]
    fn decompress_basepoint() {
        let x = FieldElement::from_slice(&COMPRESSED_BASEPOINT[1..]).unwrap();

        // G_y is even, so an even-parity request recovers G itself.
        let even = AffinePoint::decompress(&x, Choice::from(0)).unwrap();
        assert_eq!(even, AffinePoint::GENERATOR);

        // The odd-parity request recovers -G.
        let odd = AffinePoint::decompress(&x, Choice::from(1)).unwrap();
        assert_eq!(odd, -AffinePoint::GENERATOR);
        assert!(bool::from(odd.y_is_odd()));
    }

    #[test]
    fn decompress_rejects_non_curve_abscissa() {
        // x = 0 gives rhs = 7, a non-residue mod p.
        let x = FieldElement::ZERO;
        assert!(bool::from(
            AffinePoint::decompress(&x, Choice::from(0)).is_none()
        ));
    }

    #[test]
    fn decompressed_parity_matches_request() {
        let x = FieldElement::from_slice(&COMPRESSED_BASEPOINT[1..]).unwrap();

        for parity in [0u8, 1u8] {
            let point = AffinePoint::decompress(&x, Choice::from(parity)).unwrap();
            assert_eq!(bool::from(point.y_is_odd()), parity == 1);
        }
    }

    #[test]
    fn affine_negation() {
        let basepoint = AffinePoint::GENERATOR;
        assert_eq!(-(-basepoint), basepoint);
        assert_eq!(-AffinePoint::IDENTITY, AffinePoint::IDENTITY);
    }
}
