//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source could not supply the requested number of bytes.
    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },
    /// A decoded length prefix exceeded the configured maximum.
    #[error("length bound exceeded: {found} > {max}")]
    LengthBoundExceeded { found: u64, max: usize },
    #[error("invalid encoding in {0}: {1}")]
    InvalidEncoding(&'static str, &'static str), // context, message
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
}
