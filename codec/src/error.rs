//! Error types for decode operations

use thiserror::Error;

/// Error type for decode operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("invalid varint")]
    InvalidVarint,
    #[error("bad variant index: {0}")]
    BadVariantIndex(u32),
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    #[error("nesting exceeds {0} levels")]
    DepthExceeded(usize),
    #[error("invalid data in {0}: {1}")]
    Invalid(&'static str, &'static str), // context, message
}
