//! Affine points and the twisted Edwards group law.

#![allow(clippy::should_implement_trait)]

use super::{extended::ExtendedPoint, field::FieldElement, mul};
use crate::{Error, Result};
use core::ops::Neg;
use elliptic_curve::bigint::U256;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on Baby Jubjub in affine coordinates:
///
/// ```text
/// a·x² + y² = 1 + d·x²·y²,  a = 168700, d = 168696
/// ```
///
/// Values of this type always satisfy the curve equation: they are only
/// produced by validation, by the group law, or as constants.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl AffinePoint {
    /// Neutral element `(0, 1)`.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
    };

    /// Generator of the full group of order `8·l` (EIP-2494).
    pub const GENERATOR: Self = Self {
        x: FieldElement::from_uint_reduced(&U256::from_be_hex(
            "023343e3445b673d38bcba38f25645adb494b1255b1162bb40f41a59f4d4b45e",
        )),
        y: FieldElement::from_uint_reduced(&U256::from_be_hex(
            "0c19139cb84c680a6e14116da06056174a0cfa121e6e5c2450f87d64fc000001",
        )),
    };

    /// `B8 = 8·G`, generator of the prime-order subgroup.
    pub const BASE8: Self = Self {
        x: FieldElement::from_uint_reduced(&U256::from_be_hex(
            "0bb77a6ad63e739b4eacb2e09d6277c12ab8d8010534e0b62893f3f6bb957051",
        )),
        y: FieldElement::from_uint_reduced(&U256::from_be_hex(
            "25797203f7a0b24925572e1cd16bf9edfce0051fb9e133774b3c257a872d7d8b",
        )),
    };

    /// Validate a pair of field elements as a curve point.
    pub fn from_coordinates(x: FieldElement, y: FieldElement) -> Result<Self> {
        let point = Self { x, y };

        if bool::from(point.is_on_curve()) {
            Ok(point)
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Validate a pair of integers as a curve point.
    ///
    /// Both coordinates must lie in `[0, p)`; they are never reduced.
    pub fn from_uints(x: &U256, y: &U256) -> Result<Self> {
        let x = Option::<FieldElement>::from(FieldElement::from_uint(x));
        let y = Option::<FieldElement>::from(FieldElement::from_uint(y));

        match (x, y) {
            (Some(x), Some(y)) => Self::from_coordinates(x, y),
            _ => Err(Error::InvalidPoint),
        }
    }

    /// Validate a pair of big-endian encoded coordinates as a curve point.
    pub fn from_be_bytes(x: &[u8; 32], y: &[u8; 32]) -> Result<Self> {
        Self::from_uints(&U256::from_be_slice(x), &U256::from_be_slice(y))
    }

    /// The x-coordinate.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// The y-coordinate.
    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// Canonical integer coordinates `(x, y)`.
    pub fn to_uints(&self) -> (U256, U256) {
        (self.x.to_uint(), self.y.to_uint())
    }

    /// Canonical big-endian coordinates `(x, y)`.
    pub fn to_be_bytes(&self) -> ([u8; 32], [u8; 32]) {
        (self.x.to_be_bytes(), self.y.to_be_bytes())
    }

    /// Check the curve equation `a·x² + y² = 1 + d·x²·y²`.
    pub fn is_on_curve(&self) -> Choice {
        let xx = self.x.square();
        let yy = self.y.square();
        let lhs = FieldElement::EDWARDS_A * xx + yy;
        let rhs = FieldElement::ONE + FieldElement::EDWARDS_D * xx * yy;

        lhs.ct_eq(&rhs)
    }

    /// Is this the neutral element?
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::IDENTITY)
    }

    /// Add two points with the unified twisted Edwards law:
    ///
    /// ```text
    /// x3 = (x1·y2 + y1·x2) / (1 + d·x1·x2·y1·y2)
    /// y3 = (y1·y2 - a·x1·x2) / (1 - d·x1·x2·y1·y2)
    /// ```
    ///
    /// The same formula doubles a point. `a` is a square and `d` is not, so
    /// neither denominator vanishes for points on the curve; if one does,
    /// [`Error::MathInvariantViolation`] is returned.
    pub fn add(&self, other: &AffinePoint) -> Result<AffinePoint> {
        let x1x2 = self.x * other.x;
        let y1y2 = self.y * other.y;
        let dxxyy = FieldElement::EDWARDS_D * x1x2 * y1y2;

        let x_numerator = self.x * other.y + self.y * other.x;
        let x_denominator = FieldElement::ONE + dxxyy;
        let y_numerator = y1y2 - FieldElement::EDWARDS_A * x1x2;
        let y_denominator = FieldElement::ONE - dxxyy;

        let x = x_numerator
            .checked_div(&x_denominator)
            .map_err(|_| Error::MathInvariantViolation)?;
        let y = y_numerator
            .checked_div(&y_denominator)
            .map_err(|_| Error::MathInvariantViolation)?;

        Ok(AffinePoint { x, y })
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Result<AffinePoint> {
        self.add(self)
    }

    /// Multiply by a scalar with constant-time double-and-add.
    ///
    /// All 256 bits of `k` are processed; `k` need not be reduced modulo the
    /// subgroup order.
    pub fn mul(&self, k: &U256) -> Result<AffinePoint> {
        ExtendedPoint::from(*self).mul(k).to_affine()
    }

    /// Multiply by a public scalar.
    ///
    /// Uses the affine addition law and branches on the bits of `k`, so it
    /// leaks `k` through timing. Results are identical to [`AffinePoint::mul`].
    pub fn mul_vartime(&self, k: &U256) -> Result<AffinePoint> {
        mul::double_and_add_vartime(self, k)
    }

    /// Returns `8·self`, clearing the small-order component.
    pub fn mul_by_cofactor(&self) -> Result<AffinePoint> {
        ExtendedPoint::from(*self)
            .double()
            .double()
            .double()
            .to_affine()
    }

    /// Does this point belong to the subgroup of prime order `l`?
    pub fn is_in_prime_subgroup(&self) -> Choice {
        ExtendedPoint::from(*self).mul(&super::ORDER).is_identity()
    }

    /// Convert to extended coordinates.
    pub fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint::from(*self)
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        AffinePoint {
            x: -self.x,
            y: self.y,
        }
    }
}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        -*self
    }
}

impl TryFrom<(U256, U256)> for AffinePoint {
    type Error = Error;

    fn try_from((x, y): (U256, U256)) -> Result<Self> {
        Self::from_uints(&x, &y)
    }
}

impl From<AffinePoint> for (U256, U256) {
    fn from(point: AffinePoint) -> (U256, U256) {
        point.to_uints()
    }
}
