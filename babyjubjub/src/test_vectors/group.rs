//! Baby Jubjub group test vectors.

use hex_literal::hex;

/// Repeated addition of the prime-subgroup base point `B8`.
///
/// Entry `i` holds the affine coordinates of `(i + 1)·B8`.
pub const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("0bb77a6ad63e739b4eacb2e09d6277c12ab8d8010534e0b62893f3f6bb957051"),
        hex!("25797203f7a0b24925572e1cd16bf9edfce0051fb9e133774b3c257a872d7d8b"),
    ),
    (
        hex!("162d7e417903fa1c82f2d227e35b846b1133cfca4f558b5feb9fdcd5f81dd902"),
        hex!("01666cafbf0a30da8b9ebeaf848a1da067a892296f1043188e1705402b6d6853"),
    ),
    (
        hex!("061c1436d1c3008037e887c8234dcf7c33c947ad93695b8000fcb4ab70477e3e"),
        hex!("21d66f0e2295ae954494f25889f9319cc1b4df71eff3f46ba9e4631b43fd7c95"),
    ),
    (
        hex!("1b16e357953d68d73398c838aa883cc65ddae2aef75a4bc437e4232afdbe43c8"),
        hex!("02d7ee0be055310d2895c5ed5090a8aa1c700e73c64294f1e817ec77f46b4fdc"),
    ),
    (
        hex!("1961ff2315812fd2f3e459a258f5ded2dde68cd35c79c8b9fb443e1860e1fbe4"),
        hex!("217d990737cc33efe8db5485973124fdd98c866783f0d81ffccfffe7102a9c6a"),
    ),
    (
        hex!("172dba8d231345b865223308fe44ba307c159de512787257113e2a7137f831b4"),
        hex!("25316c6b88a089801a57e442545e52c559cba980f84f44a8fca45c0f821c5cd7"),
    ),
    (
        hex!("2c6bfc7fe056ed38e26ec136ec8aec5f63ecc4b52c44afba967649cf1e6e2311"),
        hex!("1ac7675df6265f6e12d1c79a2b3b6658a0d46a320fba497ad0b817f9b19e0f21"),
    ),
    (
        hex!("10c347ae3592776a678f9fc29ecd029f8297367209a4f28f7cb49b09bffd4145"),
        hex!("113f8246f336e8d375c9daab552816825f481c210226f307bc863e017642566c"),
    ),
    (
        hex!("0a677185fd6cd905b6a544b1006f4b3ea4a0dd596d47cabdab76a305859d928f"),
        hex!("197ff60e146d51c662c83f975fdb7d86ed9a3be3d68ec62213c43264ef75a148"),
    ),
    (
        hex!("0056bb35a182e54545be6d1ea242a6b0afdaecc266c1aadfb94d32b8d5c3dc96"),
        hex!("08e36547afeb6215b2b84c396ccf4ef461394bd9f65c925205f17b61e9743397"),
    ),
];

/// Scalar multiples of `B8`, as `(k, x, y)`.
///
/// Scalars cover values around the subgroup order `l`, values with the top
/// bit set and `2^256 - 1`, none of which are reduced before use.
pub const MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("060c89ce5c263405370a08b6d0302b0bab3eedb83920ee0a677297dc392126f0"),
        hex!("24acd4080af32c8e69a392d5e41ee09bfd7b104774848fdb1b4e019d346a8fb0"),
        hex!("25797203f7a0b24925572e1cd16bf9edfce0051fb9e133774b3c257a872d7d8b"),
    ),
    (
        hex!("060c89ce5c263405370a08b6d0302b0bab3eedb83920ee0a677297dc392126f2"),
        hex!("0bb77a6ad63e739b4eacb2e09d6277c12ab8d8010534e0b62893f3f6bb957051"),
        hex!("25797203f7a0b24925572e1cd16bf9edfce0051fb9e133774b3c257a872d7d8b"),
    ),
    (
        hex!("8000000000000000000000000000000000000000000000000000000000003039"),
        hex!("229bdb006df9bffede5320f9ae5ca56ba6f689f79d3c1e4ce3f355171442da7a"),
        hex!("0e50def522de06908b2048bad76fe5012b202e6c01bd860ce304d9192469ab98"),
    ),
    (
        hex!("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        hex!("0cf377ae33ea80b7f6c5bd2eacd99d52841637ec041aa32a13eb6d5161a5dd26"),
        hex!("288c14039b0b9f73da98a4204638409979f852bea06aa8e3b44b413ca4ca00bf"),
    ),
    (
        hex!("1c9ef4c8ab1db5f1b9b0ee59ea7a8ff2bc6d2f2a3dfbc0b1d0b79d2b6dd84a3d"),
        hex!("1a500f4fa8635002d3ccac4961f1262a530bbe807d1021ccb373fea9c4bba016"),
        hex!("2dbbec2dc8cf8a356d35379550b0e486ef9aefe7c30a45915698eb68606d256f"),
    ),
    (
        hex!("06f6792dcf7803e616c51ba6b56f1951e18c0cdc302c18bc2ed7bb49b3a48ac9"),
        hex!("02f857de3c6570d6c6098669a1c6a2765f2a246a1a9fb0d0e552b5ce59ac7a80"),
        hex!("15a5f33ad9272c4075c8df527b4ffe0d14f27d43ea349d11464692d18524cbc4"),
    ),
    (
        hex!("f36ec45edb69785a5446a0280fec8146f3df09fc5ede20ad32bf3cdd8fd337ab"),
        hex!("0c2fea42e4e9cd1674587b3bb9a8bcd538d5fdaa7589dffe06f409b85238082a"),
        hex!("2c48f65cbcc46977db5bbb03e1e41ffefc109af43f0951c7b244be9e2c101183"),
    ),
];
