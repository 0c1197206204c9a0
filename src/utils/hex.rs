use crate::protocol::ReaderResult;

/// Decode hex text into an owned buffer for a reader to borrow
pub fn decode(text: &str) -> ReaderResult<Vec<u8>> {
    Ok(::hex::decode(text.trim())?)
}

/// Lowercase hex rendering of a byte slice
pub fn encode(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ReaderError;

    #[test]
    fn decodes_and_trims() {
        assert_eq!(decode(" 0a0B\n").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(encode(&[0x0a, 0x0b]), "0a0b");
    }

    #[test]
    fn rejects_odd_length_and_bad_digits() {
        assert!(matches!(decode("abc"), Err(ReaderError::InvalidHex(_))));
        assert!(matches!(decode("zz"), Err(ReaderError::InvalidHex(_))));
    }
}
