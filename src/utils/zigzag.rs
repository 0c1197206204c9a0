use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Map a zigzag-encoded u32 back to its signed value
pub fn decode_i32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Map a zigzag-encoded u64 back to its signed value
pub fn decode_i64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Arbitrary-precision zigzag decode.
///
/// Odd values are negative: `-(value + 1) / 2`. Even values are `value / 2`.
pub fn decode_big(value: &BigUint) -> BigInt {
    let half = BigInt::from(value >> 1usize);
    if (value & BigUint::one()).is_zero() {
        half
    } else {
        -(half + BigInt::one())
    }
}
