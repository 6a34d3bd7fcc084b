#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    unused_attributes,
    unused_imports,
    unused_mut,
    unused_must_use
)]

//! ## Usage
//!
//! ```
//! use babyjubjub::{point_add, point_mul, AffinePoint, U256};
//!
//! let (x, y) = AffinePoint::BASE8.to_uints();
//!
//! let doubled = point_add(&x, &y, &x, &y)?;
//! assert_eq!(doubled, point_mul(&x, &y, &U256::from_u64(2))?);
//! # Ok::<(), babyjubjub::Error>(())
//! ```

#[cfg(any(feature = "std", test))]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
mod macros;

mod arithmetic;
mod error;
mod ops;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    arithmetic::{
        affine::AffinePoint,
        extended::ExtendedPoint,
        field::{FieldElement, MODULUS},
        COFACTOR, ORDER,
    },
    error::{Error, Result},
    ops::{point_add, point_add_bytes, point_mul, point_mul_bytes},
};
pub use elliptic_curve::{self, bigint::U256};
pub use subtle;

use elliptic_curve::{consts::U32, Curve, FieldBytesEncoding};

/// Baby Jubjub: twisted Edwards curve over the BN254 scalar field.
///
/// ```text
/// 168700·x² + y² = 1 + 168696·x²·y²  (mod p)
/// ```
///
/// `ORDER` is the order `l` of the prime subgroup generated by
/// [`AffinePoint::BASE8`]; the full group has order `8·l`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BabyJubjub;

impl Curve for BabyJubjub {
    /// 32-byte serialized field elements.
    type FieldBytesSize = U32;

    /// 256-bit integer type used for internally representing field elements.
    type Uint = U256;

    /// Order of the prime subgroup.
    const ORDER: U256 = ORDER;
}

impl FieldBytesEncoding<BabyJubjub> for U256 {}

/// Serialized big-endian field element.
pub type FieldBytes = elliptic_curve::FieldBytes<BabyJubjub>;
