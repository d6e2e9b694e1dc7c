//! GF(2^8) arithmetic over the AES reduction polynomial.

/// Reduction polynomial `x^8 + x^4 + x^3 + x + 1`.
pub const REDUCTION_POLY: u16 = 0x11b;

/// Low byte of [`REDUCTION_POLY`], XORed in after a carry out of bit 7.
const REDUCTION_LOW: u8 = 0x1b;

/// Constant added by the AES affine map.
pub const AFFINE_CONSTANT: u8 = 0x63;

/// Multiplies `byte` by `x` (doubling), folding the carry back into 8 bits.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION_LOW
    } else {
        shifted
    }
}

/// Multiplies two field elements modulo [`REDUCTION_POLY`].
pub fn gf_multiply(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Returns the multiplicative inverse of `a`, or `None` for zero.
///
/// Searches the 255 nonzero candidates for the unique `x` with `a * x == 1`.
pub fn gf_inverse(a: u8) -> Option<u8> {
    if a == 0 {
        return None;
    }
    (1..=u8::MAX).find(|&candidate| gf_multiply(a, candidate) == 1)
}

/// Circular left rotation within a byte; `shift` is taken modulo 8.
#[inline]
pub fn rotate_left8(x: u8, shift: u32) -> u8 {
    x.rotate_left(shift % 8)
}

/// The AES affine map: `x ⊕ rotl(x,1) ⊕ rotl(x,2) ⊕ rotl(x,3) ⊕ rotl(x,4) ⊕ 0x63`.
pub fn affine_transform(x: u8) -> u8 {
    x ^ rotate_left8(x, 1)
        ^ rotate_left8(x, 2)
        ^ rotate_left8(x, 3)
        ^ rotate_left8(x, 4)
        ^ AFFINE_CONSTANT
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn xtime_matches_fips_example() {
        // FIPS-197 section 4.2.1: {57} * {02} .. {57} * {10}.
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
        assert_eq!(xtime(0x47), 0x8e);
        assert_eq!(xtime(0x8e), 0x07);
    }

    #[test]
    fn multiply_matches_fips_example() {
        assert_eq!(gf_multiply(0x57, 0x83), 0xc1);
        assert_eq!(gf_multiply(0x57, 0x13), 0xfe);
    }

    #[test]
    fn multiply_differs_from_integer_arithmetic() {
        // 0x02 * 0x80 overflows a byte and must reduce to 0x1b, not wrap to 0.
        assert_eq!(gf_multiply(0x02, 0x80), 0x1b);
        assert_ne!(gf_multiply(0x03, 0x03), 9);
    }

    #[test]
    fn zero_has_no_inverse() {
        assert_eq!(gf_inverse(0), None);
    }

    #[test]
    fn inverse_of_every_nonzero_element() {
        for a in 1..=u8::MAX {
            let inv = gf_inverse(a).expect("nonzero element is invertible");
            assert_eq!(gf_multiply(a, inv), 1, "a = {a:#04x}");
            assert_eq!(gf_inverse(inv), Some(a));
        }
    }

    #[test]
    fn known_inverses() {
        assert_eq!(gf_inverse(0x01), Some(0x01));
        assert_eq!(gf_inverse(0x53), Some(0xca));
    }

    #[test]
    fn rotation_wraps_within_byte() {
        assert_eq!(rotate_left8(0x80, 1), 0x01);
        assert_eq!(rotate_left8(0b1001_0110, 4), 0b0110_1001);
        assert_eq!(rotate_left8(0xa5, 0), 0xa5);
        assert_eq!(rotate_left8(0xa5, 8), 0xa5);
    }

    #[test]
    fn affine_of_zero_is_constant() {
        assert_eq!(affine_transform(0), AFFINE_CONSTANT);
    }

    #[test]
    fn affine_is_linear_plus_constant() {
        for x in 0..=u8::MAX {
            for y in [0x01u8, 0x1b, 0x80, 0xff] {
                let lhs = affine_transform(x ^ y);
                let rhs = affine_transform(x) ^ affine_transform(y) ^ AFFINE_CONSTANT;
                assert_eq!(lhs, rhs);
            }
        }
    }

    proptest! {
        #[test]
        fn multiply_is_commutative(a in any::<u8>(), b in any::<u8>()) {
            prop_assert_eq!(gf_multiply(a, b), gf_multiply(b, a));
        }

        #[test]
        fn multiply_distributes_over_xor(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
            prop_assert_eq!(gf_multiply(a, b ^ c), gf_multiply(a, b) ^ gf_multiply(a, c));
        }

        #[test]
        fn doubling_is_multiplication_by_two(a in any::<u8>()) {
            prop_assert_eq!(xtime(a), gf_multiply(a, 0x02));
        }
    }
}
