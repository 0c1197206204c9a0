use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("out of range at offset {position}: {requested} byte(s) requested, {available} available")]
    OutOfRange {
        position: usize,
        requested: usize,
        available: usize,
    },

    #[error("malformed varint starting at offset {start}: buffer ended inside the value")]
    MalformedVarint { start: usize },

    #[error("{value} does not fit in {target}")]
    Overflow { target: &'static str, value: String },

    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("{remaining} trailing byte(s) after offset {consumed}")]
    TrailingBytes { consumed: usize, remaining: usize },

    #[error("invalid field layout: {0}")]
    InvalidLayout(String),
}

impl ReaderError {
    pub fn out_of_range(position: usize, requested: usize, available: usize) -> Self {
        ReaderError::OutOfRange {
            position,
            requested,
            available,
        }
    }

    pub fn overflow(target: &'static str, value: impl ToString) -> Self {
        ReaderError::Overflow {
            target,
            value: value.to_string(),
        }
    }
}

pub type ReaderResult<T> = Result<T, ReaderError>;
