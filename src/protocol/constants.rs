//! Wire constants for Sigma VLQ fields

/// High bit of a VLQ byte: another byte follows
pub const CONTINUATION_FLAG: u8 = 0x80;

/// Low seven bits of a VLQ byte carry the value
pub const PAYLOAD_MASK: u8 = 0x7F;

/// Bits contributed by each VLQ byte
pub const BITS_PER_GROUP: u32 = 7;

/// Bits per byte for bit-level reads
pub const BITS_PER_BYTE: usize = 8;
