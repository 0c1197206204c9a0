//! Reader for Sigma-serialized values: booleans, bit runs, raw bytes and
//! variable-length (VLQ + zigzag) integers of bounded and arbitrary width.

pub mod layout;
pub mod protocol;
pub mod reader;
pub mod utils;
pub mod value;

pub use layout::{FieldKind, Layout};
pub use protocol::{ReaderError, ReaderResult};
pub use reader::SigmaReader;
pub use value::Value;

pub use num_bigint::{BigInt, BigUint};
