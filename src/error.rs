//! Error types.

use core::fmt;

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced when encoding or decoding curve values.
///
/// Every fallible operation validates its input before constructing a value,
/// so an error never leaves partially-decoded state behind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The byte string has the wrong length for the expected encoding.
    InvalidLength {
        /// Length the encoding requires.
        expected: usize,
        /// Length of the provided data.
        actual: usize,
    },

    /// The decoded integer is not reduced: it is at least as large as the
    /// modulus (p for field elements, q for scalars).
    OutOfRange,

    /// The encoded x-coordinate does not correspond to a point on the curve.
    InvalidPoint,

    /// The identity point has no SEC1 compressed encoding.
    CannotEncodeIdentity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected} bytes, got {actual}")
            }
            Error::OutOfRange => f.write_str("value is not reduced modulo the modulus"),
            Error::InvalidPoint => f.write_str("invalid curve point"),
            Error::CannotEncodeIdentity => f.write_str("the identity point cannot be encoded"),
        }
    }
}

impl core::error::Error for Error {}
