use crate::protocol::{ReaderError, ReaderResult};
use crate::utils::buffer::ByteCursor;
use crate::utils::{varint, zigzag};
use num_bigint::BigInt;
use tracing::{debug, trace};

/// Sequential reader over a Sigma-serialized byte buffer.
///
/// Every read advances an internal cursor that never moves backwards. Byte
/// runs are returned as views into the original buffer, so they may be held
/// across further reads. After any error the reader should be discarded.
#[derive(Debug, Clone)]
pub struct SigmaReader<'a> {
    cursor: ByteCursor<'a>,
}

impl<'a> SigmaReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(bytes),
        }
    }

    /// True when the buffer holds no bytes at all
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// A single byte, `true` only when it equals `0x01`
    pub fn read_boolean(&mut self) -> ReaderResult<bool> {
        Ok(self.cursor.read_byte()? == 0x01)
    }

    pub fn read_bits(&mut self, count: usize) -> ReaderResult<Vec<bool>> {
        self.cursor.read_bits(count)
    }

    pub fn read_byte(&mut self) -> ReaderResult<u8> {
        self.cursor.read_byte()
    }

    pub fn read_bytes(&mut self, len: usize) -> ReaderResult<&'a [u8]> {
        self.cursor.read_bytes(len)
    }

    pub fn read_vlq(&mut self) -> ReaderResult<u32> {
        varint::read_vlq(&mut self.cursor)
    }

    /// Zigzag VLQ narrowed to 16 bits
    pub fn read_short(&mut self) -> ReaderResult<i16> {
        let value = zigzag::decode_i32(self.read_vlq()?);
        i16::try_from(value).map_err(|_| {
            debug!(position = self.position(), value, "short out of range");
            ReaderError::overflow("i16", value)
        })
    }

    /// Reads a long and checks that it fits in 32 bits
    pub fn read_int(&mut self) -> ReaderResult<i32> {
        let value = self.read_long()?;
        i32::try_from(&value).map_err(|_| {
            debug!(position = self.position(), %value, "int out of range");
            ReaderError::overflow("i32", value)
        })
    }

    pub fn read_long(&mut self) -> ReaderResult<BigInt> {
        let encoded = varint::read_big_vlq(&mut self.cursor)?;
        let value = zigzag::decode_big(&encoded);
        trace!(position = self.position(), %value, "read long");
        Ok(value)
    }

    /// Length-prefixed big-endian two's complement integer.
    ///
    /// An empty payload is zero; a set high bit in the first byte is negative.
    pub fn read_bigint(&mut self) -> ReaderResult<BigInt> {
        let len = self.read_vlq()?;
        let len = usize::try_from(len).map_err(|_| ReaderError::overflow("usize", len))?;
        let bytes = self.read_bytes(len)?;
        let value = BigInt::from_signed_bytes_be(bytes);
        trace!(position = self.position(), len, %value, "read bigint");
        Ok(value)
    }

    /// Fails if any bytes remain unread
    pub fn ensure_consumed(&self) -> ReaderResult<()> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(ReaderError::TrailingBytes {
                consumed: self.position(),
                remaining,
            }),
        }
    }
}

impl<'a> From<&'a [u8]> for SigmaReader<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        SigmaReader::new(bytes)
    }
}
