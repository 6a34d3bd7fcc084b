//! Extended twisted Edwards coordinates.
//!
//! A point `(X : Y : Z : T)` represents the affine point `(X/Z, Y/Z)` with
//! `T = X·Y/Z`. Formulas are from Hisil, Wong, Carter, Dawson,
//! "Twisted Edwards Curves Revisited" (<https://eprint.iacr.org/2008/522>),
//! in the variants valid for arbitrary `a`.

#![allow(non_snake_case, clippy::should_implement_trait)]

use super::{
    affine::AffinePoint,
    field::{FieldElement, FieldResidue},
    mul,
};
use crate::{Error, Result};
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use elliptic_curve::bigint::U256;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on Baby Jubjub in extended coordinates.
///
/// Addition is complete, so no operation on this type can fail; only the
/// final conversion back to affine coordinates inverts a field element.
#[derive(Clone, Copy, Debug)]
pub struct ExtendedPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl ExtendedPoint {
    /// Neutral element.
    pub const IDENTITY: Self = Self {
        X: FieldElement::ZERO,
        Y: FieldElement::ONE,
        Z: FieldElement::ONE,
        T: FieldElement::ZERO,
    };

    /// Generator of the prime-order subgroup, see [`AffinePoint::BASE8`].
    pub const BASE8: Self = Self::from_affine(&AffinePoint::BASE8);

    const fn from_affine(p: &AffinePoint) -> Self {
        Self {
            X: p.x,
            Y: p.y,
            Z: FieldElement::ONE,
            T: FieldElement(FieldResidue::mul(&p.x.0, &p.y.0)),
        }
    }

    /// Complete addition, "add-2008-hwcd".
    ///
    /// Cost: 9M + 2D.
    pub fn add(&self, other: &ExtendedPoint) -> ExtendedPoint {
        let A = self.X * other.X;
        let B = self.Y * other.Y;
        let C = FieldElement::EDWARDS_D * self.T * other.T;
        let D = self.Z * other.Z;
        let E = (self.X + self.Y) * (other.X + other.Y) - A - B;
        let F = D - C;
        let G = D + C;
        let H = B - FieldElement::EDWARDS_A * A;

        ExtendedPoint {
            X: E * F,
            Y: G * H,
            Z: F * G,
            T: E * H,
        }
    }

    /// Doubling, "dbl-2008-hwcd".
    ///
    /// Cost: 4M + 4S + 1D.
    pub fn double(&self) -> ExtendedPoint {
        let A = self.X.square();
        let B = self.Y.square();
        let C = self.Z.square().double();
        let D = FieldElement::EDWARDS_A * A;
        let E = (self.X + self.Y).square() - A - B;
        let G = D + B;
        let F = G - C;
        let H = D - B;

        ExtendedPoint {
            X: E * F,
            Y: G * H,
            Z: F * G,
            T: E * H,
        }
    }

    /// Constant-time scalar multiplication over all 256 bits of `k`.
    pub fn mul(&self, k: &U256) -> ExtendedPoint {
        mul::double_and_add(self, k)
    }

    /// Convert back to affine coordinates.
    ///
    /// `Z` is never zero for points produced by this module; if it is,
    /// [`Error::MathInvariantViolation`] is returned.
    pub fn to_affine(&self) -> Result<AffinePoint> {
        let z_inv = self
            .Z
            .invert()
            .map_err(|_| Error::MathInvariantViolation)?;
        debug_assert!(bool::from(self.is_on_curve()));

        Ok(AffinePoint {
            x: self.X * z_inv,
            y: self.Y * z_inv,
        })
    }

    /// Is this the neutral element?
    pub fn is_identity(&self) -> Choice {
        self.X.is_zero() & self.Y.ct_eq(&self.Z)
    }

    /// Check the projective curve equation and the `T` invariant:
    ///
    /// ```text
    /// (a·X² + Y²)·Z² = Z⁴ + d·X²·Y²,  X·Y = Z·T
    /// ```
    pub(crate) fn is_on_curve(&self) -> Choice {
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ = self.Z.square();

        let lhs = (FieldElement::EDWARDS_A * XX + YY) * ZZ;
        let rhs = ZZ.square() + FieldElement::EDWARDS_D * XX * YY;

        lhs.ct_eq(&rhs) & (self.X * self.Y).ct_eq(&(self.Z * self.T))
    }
}

impl Default for ExtendedPoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<AffinePoint> for ExtendedPoint {
    fn from(p: AffinePoint) -> Self {
        Self::from_affine(&p)
    }
}

impl From<&AffinePoint> for ExtendedPoint {
    fn from(p: &AffinePoint) -> Self {
        Self::from_affine(p)
    }
}

impl ConstantTimeEq for ExtendedPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let XZ = self.X * other.Z;
        let ZX = self.Z * other.X;

        let YZ = self.Y * other.Z;
        let ZY = self.Z * other.Y;

        XZ.ct_eq(&ZX) & YZ.ct_eq(&ZY)
    }
}

impl ConditionallySelectable for ExtendedPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ExtendedPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl PartialEq for ExtendedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ExtendedPoint {}

impl Add<&ExtendedPoint> for &ExtendedPoint {
    type Output = ExtendedPoint;

    fn add(self, rhs: &ExtendedPoint) -> ExtendedPoint {
        ExtendedPoint::add(self, rhs)
    }
}

define_binop_variants!(ExtendedPoint, Add::add, AddAssign::add_assign);

impl Sub<&ExtendedPoint> for &ExtendedPoint {
    type Output = ExtendedPoint;

    fn sub(self, rhs: &ExtendedPoint) -> ExtendedPoint {
        ExtendedPoint::add(self, &-rhs)
    }
}

define_binop_variants!(ExtendedPoint, Sub::sub, SubAssign::sub_assign);

impl Neg for ExtendedPoint {
    type Output = ExtendedPoint;

    fn neg(self) -> ExtendedPoint {
        ExtendedPoint {
            X: -self.X,
            Y: self.Y,
            Z: self.Z,
            T: -self.T,
        }
    }
}

impl Neg for &ExtendedPoint {
    type Output = ExtendedPoint;

    fn neg(self) -> ExtendedPoint {
        -*self
    }
}
