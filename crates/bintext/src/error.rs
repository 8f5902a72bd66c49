//! Codec status codes.

use thiserror::Error;

/// Failure codes recorded by a codec handle.
///
/// Every fallible handle operation returns one of these and records it as
/// the handle's last error; a successful operation clears the record.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// `work` was called with an empty input buffer; nothing was appended.
    #[error("empty input buffer")]
    EmptyInput,
    /// Decoding hit text that is malformed for the active protocol. Bytes
    /// decoded before the failing position stay in the result buffer.
    #[error("malformed input for the active protocol")]
    InvalidInput,
    /// The option is not recognized by the active protocol; the
    /// configuration is unchanged.
    #[error("option not recognized by the active protocol")]
    IgnoredOption,
}
