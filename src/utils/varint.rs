use crate::protocol::constants::{BITS_PER_GROUP, CONTINUATION_FLAG, PAYLOAD_MASK};
use crate::protocol::{ReaderError, ReaderResult};
use crate::utils::buffer::ByteCursor;
use num_bigint::BigUint;
use tracing::debug;

/// Reads the next VLQ byte. Running out after the first byte is a malformed
/// varint rather than a plain short read.
fn next_group(cursor: &mut ByteCursor<'_>, start: usize) -> ReaderResult<u8> {
    let first = cursor.position() == start;
    cursor.read_byte().map_err(|err| {
        if first {
            err
        } else {
            debug!(start, "varint truncated by end of buffer");
            ReaderError::MalformedVarint { start }
        }
    })
}

/// Decode a VLQ into a u32
pub fn read_vlq(cursor: &mut ByteCursor<'_>) -> ReaderResult<u32> {
    let start = cursor.position();
    let mut result = 0u32;
    let mut shift = 0u32;

    loop {
        let byte = next_group(cursor, start)?;
        let group = u32::from(byte & PAYLOAD_MASK);

        if group != 0 {
            if shift > group.leading_zeros() {
                debug!(start, "varint exceeds 32 bits");
                return Err(ReaderError::overflow(
                    "u32",
                    format!("varint at offset {start}"),
                ));
            }
            result |= group << shift;
        }

        if byte & CONTINUATION_FLAG == 0 {
            return Ok(result);
        }
        shift = shift.saturating_add(BITS_PER_GROUP);
    }
}

/// Decode a VLQ of any length into an arbitrary-precision integer
pub fn read_big_vlq(cursor: &mut ByteCursor<'_>) -> ReaderResult<BigUint> {
    let start = cursor.position();
    let mut result = BigUint::default();
    let mut shift = 0usize;

    loop {
        let byte = next_group(cursor, start)?;
        let group = byte & PAYLOAD_MASK;

        if group != 0 {
            result |= BigUint::from(group) << shift;
        }

        if byte & CONTINUATION_FLAG == 0 {
            return Ok(result);
        }
        shift += BITS_PER_GROUP as usize;
    }
}
