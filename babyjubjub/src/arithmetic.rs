//! Group arithmetic on Baby Jubjub.
//!
//! The curve is the twisted Edwards curve
//!
//! ```text
//! E: 168700·x² + y² = 1 + 168696·x²·y²
//! ```
//!
//! over the BN254 scalar field, as specified in EIP-2494. The group has
//! order `8·l` where `l` is the prime below.

pub(crate) mod affine;
pub(crate) mod extended;
pub(crate) mod field;
mod mul;

use elliptic_curve::bigint::U256;

/// Order of the prime subgroup generated by `B8`.
///
/// ```text
/// l = 2736030358979909402780800718157159386076813972158567259200215660948447373041
/// ```
pub const ORDER: U256 =
    U256::from_be_hex("060c89ce5c263405370a08b6d0302b0bab3eedb83920ee0a677297dc392126f1");

/// Ratio between the full group order and [`ORDER`].
pub const COFACTOR: u64 = 8;
