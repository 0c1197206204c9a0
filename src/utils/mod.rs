pub mod buffer;
pub mod hex;
pub mod varint;
pub mod zigzag;
