mod common;

use sigma_reader::utils::hex;
use sigma_reader::{BigInt, ReaderError, SigmaReader};
use test_case::test_case;

#[test_case("01", true ; "one is true")]
#[test_case("02", false ; "two is false")]
fn boolean_scenarios(input: &str, expected: bool) {
    let bytes = hex::decode(input).unwrap();
    let mut reader = SigmaReader::new(&bytes);
    assert_eq!(reader.read_boolean().unwrap(), expected);
}

#[test]
fn vlq_of_150() {
    let bytes = hex::decode("9601").unwrap();
    let mut reader = SigmaReader::new(&bytes);
    assert_eq!(reader.read_vlq().unwrap(), 150);
}

#[test]
fn short_from_unsigned_two() {
    let mut reader = SigmaReader::new(&[0x02]);
    assert_eq!(reader.read_short().unwrap(), 1);
}

#[test]
fn empty_buffer_is_empty_and_unreadable() {
    let bytes = hex::decode("").unwrap();
    let mut reader = SigmaReader::new(&bytes);
    assert!(reader.is_empty());
    let err = reader.read_byte().expect_err("empty buffer");
    assert!(matches!(err, ReaderError::OutOfRange { .. }));
}

#[test]
fn bigint_with_hex_0100() {
    let bytes = hex::decode("020100").unwrap();
    let mut reader = SigmaReader::new(&bytes);
    let value = reader.read_bigint().unwrap();
    assert_eq!(value, BigInt::parse_bytes(b"0100", 16).unwrap());
}

#[test]
fn bits_then_byte_resumes_on_boundary() {
    let mut reader = SigmaReader::new(&[0b1010_1010, 0x7f]);
    let bits = reader.read_bits(3).unwrap();
    assert_eq!(bits, vec![false, true, false]);
    assert_eq!(reader.read_byte().unwrap(), 0x7f);
}

#[test]
fn is_empty_ignores_cursor() {
    let mut reader = SigmaReader::new(&[0x00]);
    reader.read_byte().unwrap();
    assert!(!reader.is_empty());
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn mixed_record() {
    let mut buffer = Vec::new();
    buffer.push(0x01);
    common::vlq(1_000_000, &mut buffer);
    common::long(&BigInt::from(-123_456_789_012i64), &mut buffer);
    common::vlq(u64::from(common::zigzag_i32(-42)), &mut buffer);
    common::bigint(&BigInt::from(-1_000_000_000_000i64), &mut buffer);
    buffer.extend_from_slice(&[0xde, 0xad]);

    let mut reader = SigmaReader::new(&buffer);
    assert!(reader.read_boolean().unwrap());
    assert_eq!(reader.read_vlq().unwrap(), 1_000_000);
    assert_eq!(reader.read_long().unwrap(), BigInt::from(-123_456_789_012i64));
    assert_eq!(reader.read_short().unwrap(), -42);
    assert_eq!(reader.read_bigint().unwrap(), BigInt::from(-1_000_000_000_000i64));
    assert_eq!(reader.read_bytes(2).unwrap(), &[0xde, 0xad]);
    reader.ensure_consumed().unwrap();
}

#[test]
fn int_rejects_values_past_i32() {
    let mut buffer = Vec::new();
    common::long(&BigInt::from(i64::from(i32::MIN) - 1), &mut buffer);
    let mut reader = SigmaReader::new(&buffer);
    let err = reader.read_int().expect_err("below i32::MIN");
    assert!(matches!(err, ReaderError::Overflow { target: "i32", .. }));

    let mut buffer = Vec::new();
    common::long(&BigInt::from(i32::MIN), &mut buffer);
    let mut reader = SigmaReader::new(&buffer);
    assert_eq!(reader.read_int().unwrap(), i32::MIN);
}

#[test]
fn truncated_long_is_malformed() {
    let mut reader = SigmaReader::new(&[0xff, 0xff]);
    let err = reader.read_long().expect_err("truncated");
    assert!(matches!(err, ReaderError::MalformedVarint { start: 0 }));
}

#[test]
fn invalid_hex_is_rejected_before_reading() {
    assert!(matches!(hex::decode("0g"), Err(ReaderError::InvalidHex(_))));
}
