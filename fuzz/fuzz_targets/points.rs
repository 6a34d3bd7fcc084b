#![no_main]
use babyjubjub::{point_add_bytes, point_mul_bytes, AffinePoint, Error, U256};
use libfuzzer_sys::fuzz_target;

fn bytes32(data: &[u8]) -> [u8; 32] {
    data.try_into().unwrap()
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 160 {
        return;
    }

    // Raw coordinates are almost never on the curve; they must be rejected,
    // never accepted with a bogus result.
    let (x1, y1) = (bytes32(&data[0..32]), bytes32(&data[32..64]));
    match point_add_bytes(&x1, &y1, &x1, &y1) {
        Ok(sum) => {
            let doubled = point_mul_bytes(&x1, &y1, &{
                let mut two = [0u8; 32];
                two[31] = 2;
                two
            })
            .unwrap();
            assert_eq!(sum, doubled);
        }
        Err(err) => {
            assert_eq!(err, Error::InvalidPoint);
            assert!(AffinePoint::from_be_bytes(&x1, &y1).is_err());
        }
    }

    // Valid points derived from the input.
    let k1 = U256::from_be_slice(&data[64..96]);
    let k2 = U256::from_be_slice(&data[96..128]);
    let s = U256::from_be_slice(&data[128..160]);

    let p1 = AffinePoint::BASE8.mul_vartime(&k1).unwrap();
    let p2 = AffinePoint::GENERATOR.mul_vartime(&k2).unwrap();
    let (p1x, p1y) = p1.to_be_bytes();
    let (p2x, p2y) = p2.to_be_bytes();

    let sum = point_add_bytes(&p1x, &p1y, &p2x, &p2y).unwrap();
    assert_eq!(sum, point_add_bytes(&p2x, &p2y, &p1x, &p1y).unwrap());
    assert!(AffinePoint::from_be_bytes(&sum.0, &sum.1).is_ok());

    // Adding a point to its negation gives the identity.
    let neg = (-p1).to_be_bytes();
    let zero = point_add_bytes(&p1x, &p1y, &neg.0, &neg.1).unwrap();
    assert_eq!(zero, AffinePoint::IDENTITY.to_be_bytes());

    // Constant-time and variable-time multiplication agree.
    let ct = point_mul_bytes(&p1x, &p1y, &bytes32(&data[128..160])).unwrap();
    assert_eq!(ct, p1.mul_vartime(&s).unwrap().to_be_bytes());
});
