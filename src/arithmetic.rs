//! A pure-Rust implementation of group operations on secp256k1.

pub(crate) mod affine;
pub(crate) mod field;
pub(crate) mod mul;
pub(crate) mod projective;
pub(crate) mod scalar;

pub use self::{
    affine::AffinePoint, field::FieldElement, projective::ProjectivePoint, scalar::Scalar,
};

/// b = 7: the constant term of the curve equation `y² = x³ + 7`.
pub(crate) const CURVE_EQUATION_B_SINGLE: u64 = 7;

/// b as a field element.
pub(crate) const CURVE_EQUATION_B: FieldElement =
    FieldElement::from_u64(CURVE_EQUATION_B_SINGLE);

/// 3·b = 21: the curve constant the complete addition formula folds b into.
pub(crate) const CURVE_EQUATION_B3: FieldElement =
    FieldElement::from_u64(3 * CURVE_EQUATION_B_SINGLE);
