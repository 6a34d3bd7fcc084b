//! Error types.

use core::fmt;

/// Errors raised by the Baby Jubjub arithmetic.
///
/// All errors are hard rejections: no operation ever returns a partial
/// result or falls back to the identity point.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Coordinates are outside `[0, p)` or do not satisfy
    /// `a·x² + y² = 1 + d·x²·y²`.
    InvalidPoint,

    /// A field inverse was requested for zero.
    NotInvertible,

    /// The group law produced a zero denominator for validated inputs.
    ///
    /// The curve coefficients rule this out, so seeing it means a bug in
    /// validation or arithmetic rather than a bad input.
    MathInvariantViolation,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidPoint => "point is not on the Baby Jubjub curve",
            Error::NotInvertible => "zero has no multiplicative inverse",
            Error::MathInvariantViolation => "group law hit a zero denominator",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for elliptic_curve::Error {
    fn from(_: Error) -> elliptic_curve::Error {
        elliptic_curve::Error
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    use std::string::ToString;

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidPoint.to_string(),
            "point is not on the Baby Jubjub curve"
        );
        assert_eq!(
            Error::MathInvariantViolation.to_string(),
            "group law hit a zero denominator"
        );
    }

    #[test]
    fn into_elliptic_curve_error() {
        fn fallible() -> elliptic_curve::Result<()> {
            crate::FieldElement::ZERO.invert()?;
            Ok(())
        }

        let err: elliptic_curve::Error = Error::InvalidPoint.into();
        assert_eq!(err.to_string(), elliptic_curve::Error.to_string());
        assert!(fallible().is_err());
    }
}
