#![no_main]
use babyjubjub::{Error, FieldElement, U256};
use libfuzzer_sys::fuzz_target;

fn test_field(fe1: FieldElement, fe2: FieldElement, fe3: FieldElement) {
    // Associativity
    assert_eq!(fe1 + (fe2 + fe3), (fe1 + fe2) + fe3);
    assert_eq!(fe1 * (fe2 * fe3), (fe1 * fe2) * fe3);

    // Commutativity
    assert_eq!(fe1 + fe2, fe2 + fe1);
    assert_eq!(fe1 * fe2, fe2 * fe1);

    // Identity
    assert_eq!(fe1 + FieldElement::ZERO, fe1);
    assert_eq!(fe1 * FieldElement::ONE, fe1);
    assert_eq!(fe1 - fe1, FieldElement::ZERO);

    // Distributivity
    assert_eq!(fe1 * (fe2 + fe3), fe1 * fe2 + fe1 * fe3);

    // Inverse, square, double
    assert_eq!(fe1 + (-fe1), FieldElement::ZERO);
    assert_eq!(fe1.square(), fe1 * fe1);
    assert_eq!(fe1.double(), fe1 + fe1);
    if bool::from(fe1.is_zero()) {
        assert_eq!(fe1.invert(), Err(Error::NotInvertible));
    } else {
        assert_eq!(fe1 * fe1.invert().unwrap(), FieldElement::ONE);
        assert_eq!(fe2.checked_div(&fe1).unwrap() * fe1, fe2);
    }

    // Canonical encoding
    let bytes = fe3.to_be_bytes();
    assert_eq!(FieldElement::from_be_bytes(&bytes).unwrap(), fe3);
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let fe1 = FieldElement::from_be_bytes(&data[0..32].try_into().unwrap())
        .unwrap_or(FieldElement::ONE);
    let fe2 = FieldElement::from_uint_reduced(&U256::from_be_slice(&data[32..64]));
    let fe3 = FieldElement::from_u64(u64::from_be_bytes(data[64..72].try_into().unwrap()))
        + FieldElement::from_uint_reduced(&U256::from_le_slice(&data[64..96]));

    test_field(fe1, fe2, fe3);
});
