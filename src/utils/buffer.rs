use crate::protocol::constants::BITS_PER_BYTE;
use crate::protocol::{ReaderError, ReaderResult};
use tracing::debug;

/// Forward-only cursor over a borrowed byte slice
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// True when the underlying buffer has no bytes, wherever the cursor is
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Fails unless `len` more bytes are available
    fn ensure(&self, len: usize) -> ReaderResult<()> {
        if len > self.remaining() {
            debug!(
                position = self.position,
                requested = len,
                available = self.remaining(),
                "read past end of buffer"
            );
            return Err(ReaderError::out_of_range(self.position, len, self.remaining()));
        }
        Ok(())
    }

    pub fn read_byte(&mut self) -> ReaderResult<u8> {
        self.ensure(1)?;
        let byte = self.bytes[self.position];
        self.position += 1;
        Ok(byte)
    }

    /// Zero-copy view of the next `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> ReaderResult<&'a [u8]> {
        self.ensure(len)?;
        let start = self.position;
        self.position += len;
        Ok(&self.bytes[start..self.position])
    }

    /// Reads `count` bits, least significant bit first within each byte.
    ///
    /// The cursor always lands on the byte after the last one touched, so the
    /// unused high bits of a partially read byte are skipped.
    pub fn read_bits(&mut self, count: usize) -> ReaderResult<Vec<bool>> {
        let byte_len = count.div_ceil(BITS_PER_BYTE);
        let bytes = self.read_bytes(byte_len)?;

        let bits = (0..count)
            .map(|i| (bytes[i / BITS_PER_BYTE] >> (i % BITS_PER_BYTE)) & 1 == 1)
            .collect();
        Ok(bits)
    }
}

impl<'a> From<&'a [u8]> for ByteCursor<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteCursor::new(bytes)
    }
}
