//! Base16 (hex) transcoder.
//!
//! Encodes each input byte as two uppercase hex characters and decodes the
//! reverse, tolerating embedded CRLF line breaks. Line wrapping of encoder
//! output and lowercase acceptance on decode are configurable.

mod decoder;
mod encoder;

use crate::codec::CodecOption;
use crate::error::CodecError;

/// Width at which the encoder wraps output lines.
pub(crate) const CHUNK_WIDTH: usize = 76;

/// Base16 transcoder configuration.
#[derive(Debug, Clone)]
pub(crate) struct Base16 {
    /// Insert CRLF line breaks while encoding.
    pub(crate) chunked: bool,
    /// Fold `a`–`z` to uppercase before decode validation.
    pub(crate) ignore_case: bool,
}

impl Default for Base16 {
    fn default() -> Self {
        Self {
            chunked: true,
            ignore_case: false,
        }
    }
}

impl Base16 {
    pub(crate) fn set_option(&mut self, option: CodecOption) -> Result<(), CodecError> {
        match option {
            CodecOption::Base16IgnoreCase(value) => self.ignore_case = value,
            CodecOption::Base16Chunked(value) => self.chunked = value,
            _ => return Err(CodecError::IgnoredOption),
        }
        Ok(())
    }
}
