//! Field arithmetic modulo p = 21888242871839275222246405745257275088548364400416034343698204186575808495617
//! (the BN254 scalar field).

use crate::{Error, Result};
use core::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use elliptic_curve::bigint::{impl_modulus, modular::constant_mod::Residue, Encoding, U256};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption};

impl_modulus!(
    FieldModulus,
    U256,
    "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"
);

pub(crate) type FieldResidue = Residue<FieldModulus, { U256::LIMBS }>;

/// Field modulus as an integer.
pub const MODULUS: U256 =
    U256::from_be_hex("30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001");

/// Element of the Baby Jubjub base field, always reduced into `[0, p)`.
///
/// Internally kept in Montgomery form.
#[derive(Clone, Copy)]
pub struct FieldElement(pub(crate) FieldResidue);

impl FieldElement {
    /// Zero element.
    pub const ZERO: Self = Self(FieldResidue::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(FieldResidue::ONE);

    /// Twisted Edwards coefficient `a = 168700`.
    pub const EDWARDS_A: Self = Self::from_u64(168700);

    /// Twisted Edwards coefficient `d = 168696`.
    pub const EDWARDS_D: Self = Self::from_u64(168696);

    /// Create a field element from a small integer.
    pub const fn from_u64(n: u64) -> Self {
        Self(FieldResidue::new(&U256::from_u64(n)))
    }

    /// Create a field element from a canonical integer.
    ///
    /// Returns none if `n >= p`.
    pub fn from_uint(n: &U256) -> CtOption<Self> {
        let is_some = n.ct_lt(&MODULUS);
        CtOption::new(Self(FieldResidue::new(n)), is_some)
    }

    /// Create a field element from any 256-bit integer, reducing it mod `p`.
    pub const fn from_uint_reduced(n: &U256) -> Self {
        Self(FieldResidue::new(n))
    }

    /// Decode a field element from its canonical big-endian encoding.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> CtOption<Self> {
        Self::from_uint(&U256::from_be_slice(bytes))
    }

    /// Canonical integer value in `[0, p)`.
    pub const fn to_uint(&self) -> U256 {
        self.0.retrieve()
    }

    /// Canonical big-endian encoding.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.to_uint().to_be_bytes()
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Returns `self + self`.
    pub const fn double(&self) -> Self {
        Self(FieldResidue::add(&self.0, &self.0))
    }

    /// Returns `self * self`.
    pub const fn square(&self) -> Self {
        Self(FieldResidue::square(&self.0))
    }

    /// Multiplicative inverse.
    ///
    /// Fails with [`Error::NotInvertible`] when `self` is zero.
    pub fn invert(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::NotInvertible);
        }

        let (inverse, _) = self.0.invert();
        Ok(Self(inverse))
    }

    /// Returns `self / rhs`, computed as `self * rhs⁻¹`.
    ///
    /// Fails with [`Error::NotInvertible`] when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        Ok(self * &rhs.invert()?)
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(FieldResidue::conditional_select(&a.0, &b.0, choice))
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:x})", self.to_uint())
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.to_uint())
    }
}

impl LowerHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.to_uint())
    }
}

impl UpperHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.to_uint())
    }
}

impl From<u64> for FieldElement {
    fn from(n: u64) -> FieldElement {
        FieldElement::from_u64(n)
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        FieldElement(FieldResidue::add(&self.0, &rhs.0))
    }
}

define_binop_variants!(FieldElement, Add::add, AddAssign::add_assign);

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        FieldElement(FieldResidue::sub(&self.0, &rhs.0))
    }
}

define_binop_variants!(FieldElement, Sub::sub, SubAssign::sub_assign);

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        FieldElement(FieldResidue::mul(&self.0, &rhs.0))
    }
}

define_binop_variants!(FieldElement, Mul::mul, MulAssign::mul_assign);

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement(FieldResidue::neg(&self.0))
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -*self
    }
}
