//! Write-side fixtures. The crate only reads; tests build inputs here.
#![allow(dead_code)]

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};

pub fn vlq(mut value: u64, out: &mut Vec<u8>) {
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

pub fn big_vlq(value: &BigUint, out: &mut Vec<u8>) {
    let mut groups = value.to_radix_le(128);
    if groups.is_empty() {
        groups.push(0);
    }
    let last = groups.len() - 1;
    for (i, group) in groups.into_iter().enumerate() {
        out.push(if i < last { group | 0x80 } else { group });
    }
}

pub fn zigzag_i32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

pub fn zigzag_i64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

pub fn zigzag_big(value: &BigInt) -> BigUint {
    let doubled: BigInt = value.abs() << 1usize;
    let encoded = if value.is_negative() {
        doubled - 1
    } else {
        doubled
    };
    encoded.to_biguint().unwrap_or_else(BigUint::zero)
}

pub fn long(value: &BigInt, out: &mut Vec<u8>) {
    big_vlq(&zigzag_big(value), out);
}

pub fn bigint(value: &BigInt, out: &mut Vec<u8>) {
    let bytes = value.to_signed_bytes_be();
    vlq(bytes.len() as u64, out);
    out.extend_from_slice(&bytes);
}
