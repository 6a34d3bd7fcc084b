//! Point operations on raw coordinates.
//!
//! These functions are the boundary used by hosts that pass coordinates as
//! fixed-width big integers. Every input point is validated before any
//! arithmetic happens, and results are canonical coordinates in `[0, p)`.

use crate::{AffinePoint, Error, Result};
use elliptic_curve::bigint::U256;

/// Add the points `(x1, y1)` and `(x2, y2)`.
///
/// Fails with [`Error::InvalidPoint`] if either pair is not on the curve.
pub fn point_add(x1: &U256, y1: &U256, x2: &U256, y2: &U256) -> Result<(U256, U256)> {
    let p1 = validate(x1, y1)?;
    let p2 = validate(x2, y2)?;
    let sum = p1.add(&p2).map_err(invariant_violation)?;

    Ok(sum.to_uints())
}

/// Multiply the point `(x1, y1)` by the scalar `k`.
///
/// `k` is not reduced; every one of its 256 bits is processed in constant
/// time. Fails with [`Error::InvalidPoint`] if the point is not on the curve.
pub fn point_mul(x1: &U256, y1: &U256, k: &U256) -> Result<(U256, U256)> {
    let p = validate(x1, y1)?;
    let product = p.mul(k).map_err(invariant_violation)?;

    Ok(product.to_uints())
}

/// [`point_add`] on 32-byte big-endian coordinates.
pub fn point_add_bytes(
    x1: &[u8; 32],
    y1: &[u8; 32],
    x2: &[u8; 32],
    y2: &[u8; 32],
) -> Result<([u8; 32], [u8; 32])> {
    let (x, y) = point_add(
        &U256::from_be_slice(x1),
        &U256::from_be_slice(y1),
        &U256::from_be_slice(x2),
        &U256::from_be_slice(y2),
    )?;

    Ok((to_be_bytes(&x), to_be_bytes(&y)))
}

/// [`point_mul`] on 32-byte big-endian coordinates and scalar.
pub fn point_mul_bytes(
    x1: &[u8; 32],
    y1: &[u8; 32],
    k: &[u8; 32],
) -> Result<([u8; 32], [u8; 32])> {
    let (x, y) = point_mul(
        &U256::from_be_slice(x1),
        &U256::from_be_slice(y1),
        &U256::from_be_slice(k),
    )?;

    Ok((to_be_bytes(&x), to_be_bytes(&y)))
}

fn validate(x: &U256, y: &U256) -> Result<AffinePoint> {
    AffinePoint::from_uints(x, y).map_err(|err| {
        #[cfg(feature = "tracing")]
        tracing::debug!(%x, %y, "rejected coordinates not on Baby Jubjub");
        err
    })
}

fn invariant_violation(err: Error) -> Error {
    #[cfg(feature = "tracing")]
    tracing::error!(error = %err, "Baby Jubjub group law invariant violated");
    err
}

fn to_be_bytes(n: &U256) -> [u8; 32] {
    use elliptic_curve::bigint::Encoding;
    n.to_be_bytes()
}
