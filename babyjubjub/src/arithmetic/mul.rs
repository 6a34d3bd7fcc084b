//! Double-and-add scalar multiplication.

use super::{affine::AffinePoint, extended::ExtendedPoint};
use crate::Result;
use elliptic_curve::bigint::{Encoding, U256};
use subtle::{Choice, ConditionallySelectable};

/// Bits of `k`, most significant first.
fn bits_msb_first(k: &U256) -> impl Iterator<Item = u8> {
    let bytes = k.to_be_bytes();
    (0..256).map(move |i| (bytes[i / 8] >> (7 - i % 8)) & 1)
}

/// Constant-time double-and-add.
///
/// Every bit costs one doubling and one addition; the addend is selected
/// between the identity and `point` without branching on the bit.
pub(crate) fn double_and_add(point: &ExtendedPoint, k: &U256) -> ExtendedPoint {
    let mut result = ExtendedPoint::IDENTITY;

    for bit in bits_msb_first(k) {
        result = result.double();

        let mut addend = ExtendedPoint::IDENTITY;
        addend.conditional_assign(point, Choice::from(bit));
        result = result.add(&addend);
    }

    result
}

/// Variable-time double-and-add on affine points.
///
/// Leading zero bits are skipped and the addition only happens for set
/// bits, so the running time depends on `k`.
pub(crate) fn double_and_add_vartime(point: &AffinePoint, k: &U256) -> Result<AffinePoint> {
    let mut result = AffinePoint::IDENTITY;

    for bit in bits_msb_first(k).skip_while(|&bit| bit == 0) {
        result = result.double()?;

        if bit == 1 {
            result = result.add(point)?;
        }
    }

    Ok(result)
}
