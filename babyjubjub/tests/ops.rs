//! Tests for the coordinate-level `point_add` / `point_mul` operations.

use babyjubjub::{point_add, point_mul, AffinePoint, Error, MODULUS, ORDER, U256};
use hex_literal::hex;
use proptest::{prelude::*, prop_compose, proptest};

const P1: ([u8; 32], [u8; 32]) = (
    hex!("0f3c160e26fc96c347dd9e705eb5a3e8d661502728609ff95b3b889296901ab5"),
    hex!("09979273078b5c735585107619130e62e315c5cafe683a064f79dfed17eb14e1"),
);

const P2: ([u8; 32], [u8; 32]) = (
    hex!("274dbce8d15179969bc0d49fa725bddf9de555e0ba6a693c6adb52fc9ee7a82c"),
    hex!("05ce98c61b05f47fe2eae9a542bd99f6b2e78246231640b54595febfd51eb853"),
);

fn uints((x, y): ([u8; 32], [u8; 32])) -> (U256, U256) {
    (U256::from_be_slice(&x), U256::from_be_slice(&y))
}

fn add(a: &(U256, U256), b: &(U256, U256)) -> (U256, U256) {
    point_add(&a.0, &a.1, &b.0, &b.1).unwrap()
}

fn mul(a: &(U256, U256), k: u64) -> (U256, U256) {
    mul_wide(a, &U256::from_u64(k))
}

fn mul_wide(a: &(U256, U256), k: &U256) -> (U256, U256) {
    point_mul(&a.0, &a.1, k).unwrap()
}

#[test]
fn doubling_by_add_and_mul_agree() {
    let p1 = uints(P1);
    assert_eq!(add(&p1, &p1), mul(&p1, 2));
}

#[test]
fn seven_times_by_chained_additions() {
    let p2 = uints(P2);

    let p2_2 = add(&p2, &p2);
    let p2_4 = add(&p2_2, &p2_2);
    let p2_6 = add(&p2_4, &p2_2);
    let p2_7 = add(&p2_6, &p2);

    assert_eq!(mul(&p2, 7), p2_7);
    assert_eq!(mul(&p2, 7), add(&add(&mul(&p2, 4), &mul(&p2, 2)), &p2));
    assert_eq!(
        p2_7,
        uints((
            hex!("05234237db48a066a4e072c8a345de7bb0f5a1d7230b6d62bdaa3e317e56a820"),
            hex!("2b970cf66a6744aacff7c68dab8de8bf9f49ae8a56bf78f60e992f65708a36a3"),
        ))
    );
}

#[test]
fn known_answers() {
    let p1 = uints(P1);
    let p2 = uints(P2);

    assert_eq!(mul(&p2, 2), p1);
    assert_eq!(
        add(&p1, &p2),
        uints((
            hex!("2ad46cbfb78773b6254adc1d80c6efa02f3bf948c37e5a2222136421d7bec942"),
            hex!("14e9693f16d75f7065ce51e1f46ae6c60841ca1e0cf264eda26398e36ca2ed69"),
        ))
    );
    assert_eq!(
        mul(&p1, 2),
        uints((
            hex!("2f6458832049e917c95867185a96621336df33e13c98e81d1ef4928cdbb77772"),
            hex!("0cff2af4732b74bc7a1644cfe1b6eb9c139c4a8a19783c0520c02e871fb6800f"),
        ))
    );
    assert_eq!(
        mul(&p1, 8),
        uints((
            hex!("264d5b0bc8560e43f09b096f4fbf14c2cf81e3e2422d29a4e85dce5f3eafaf36"),
            hex!("2c4425a7c2490b63ff2370105fa833648c87e9f69987da69b8192058bc9f140f"),
        ))
    );
    assert_eq!(point_mul(&p1.0, &p1.1, &ORDER).unwrap(), (U256::ZERO, U256::ONE));
}

#[test]
fn generator_multiples() {
    let g = AffinePoint::GENERATOR.to_uints();

    assert_eq!(
        mul(&g, 2),
        uints((
            hex!("03b4d18b8801b12c784c95e319fb43588e55207574ab4bb046e484d5dab02db9"),
            hex!("1990f0c54f32b2d188cb36e43d585714b1954cce117adaa425990bcfcf4a055a"),
        ))
    );
    assert_eq!(
        mul(&g, 3),
        uints((
            hex!("0fb14fe0b032b25d011c8eef5578e6d3349e457428b46c9580ccb1f9edf4f5fd"),
            hex!("2d3bfc8a221308908c9f36bb8f370677486660a2477819aac50ec714417f57e1"),
        ))
    );
    assert_eq!(mul(&g, 8), AffinePoint::BASE8.to_uints());
}

#[test]
fn distributivity_across_subgroup_order() {
    let b8 = AffinePoint::BASE8.to_uints();
    let g = AffinePoint::GENERATOR.to_uints();
    let order_plus_five = ORDER.wrapping_add(&U256::from_u64(5));
    let sum = ORDER.wrapping_add(&order_plus_five);

    // B8 has order l, G has order 8·l.
    for p in [b8, g] {
        assert_eq!(
            add(&mul_wide(&p, &ORDER), &mul_wide(&p, &order_plus_five)),
            mul_wide(&p, &sum)
        );
    }
    assert_eq!(mul_wide(&b8, &sum), mul(&b8, 5));
    assert_ne!(mul_wide(&g, &sum), mul(&g, 5));
}

#[test]
fn zero_zero_is_rejected() {
    let zero = U256::ZERO;
    assert_eq!(
        point_add(&zero, &zero, &zero, &zero),
        Err(Error::InvalidPoint)
    );
    assert_eq!(
        point_mul(&zero, &zero, &U256::ONE),
        Err(Error::InvalidPoint)
    );
}

#[test]
fn off_curve_points_are_rejected() {
    let (x, y) = uints(P1);
    let y = y.wrapping_add(&U256::ONE);

    assert_eq!(point_add(&x, &y, &x, &y), Err(Error::InvalidPoint));
    assert_eq!(point_mul(&x, &y, &U256::ZERO), Err(Error::InvalidPoint));
}

#[test]
fn unreduced_coordinates_are_rejected() {
    let y = U256::ONE;
    assert_eq!(point_mul(&MODULUS, &y, &U256::ONE), Err(Error::InvalidPoint));
    assert_eq!(
        point_add(&U256::ZERO, &y, &U256::ZERO, &MODULUS.wrapping_add(&y)),
        Err(Error::InvalidPoint)
    );
}

prop_compose! {
    /// Random scalar below 2^255, so the sum of two never overflows.
    fn scalar()(bytes in any::<[u8; 32]>()) -> U256 {
        let mut bytes = bytes;
        bytes[0] &= 0x7f;
        U256::from_be_slice(&bytes)
    }
}

prop_compose! {
    /// Random point of the prime-order subgroup.
    fn point()(k in any::<[u8; 32]>()) -> (U256, U256) {
        let k = U256::from_be_slice(&k);
        AffinePoint::BASE8.mul_vartime(&k).unwrap().to_uints()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn closure(a in point(), b in point()) {
        let (x, y) = add(&a, &b);
        prop_assert!(AffinePoint::from_uints(&x, &y).is_ok());
    }

    #[test]
    fn identity(a in point()) {
        let identity = (U256::ZERO, U256::ONE);
        prop_assert_eq!(add(&a, &identity), a);
        prop_assert_eq!(add(&identity, &a), a);
        prop_assert_eq!(mul(&a, 1), a);
        prop_assert_eq!(mul(&a, 0), identity);
    }

    #[test]
    fn commutativity(a in point(), b in point()) {
        prop_assert_eq!(add(&a, &b), add(&b, &a));
    }

    #[test]
    fn associativity(a in point(), b in point(), c in point()) {
        prop_assert_eq!(add(&add(&a, &b), &c), add(&a, &add(&b, &c)));
    }

    #[test]
    fn doubling(a in point()) {
        prop_assert_eq!(add(&a, &a), mul(&a, 2));
    }

    #[test]
    fn distributivity(a in point(), j in scalar(), k in scalar()) {
        let sum = j.wrapping_add(&k);
        prop_assert_eq!(add(&mul_wide(&a, &j), &mul_wide(&a, &k)), mul_wide(&a, &sum));
    }
}
