//! Base64 transcoder.
//!
//! Packs 3 input bytes into 4 alphabet characters and unpacks the reverse,
//! with the standard or URL-safe alphabet, optional `=` padding, and
//! optional CRLF line wrapping of encoder output.

mod constants;
mod decoder;
mod encoder;

use crate::codec::CodecOption;
use crate::error::CodecError;

/// Width at which the encoder wraps output lines.
pub(crate) const CHUNK_WIDTH: usize = 76;

/// Base64 transcoder configuration.
#[derive(Debug, Clone)]
pub(crate) struct Base64 {
    /// Use `-` and `_` in place of `+` and `/`.
    pub(crate) url_safe: bool,
    /// Emit `=` padding on encode; require it on decode.
    pub(crate) padding: bool,
    /// Insert CRLF line breaks while encoding.
    pub(crate) chunked: bool,
}

impl Default for Base64 {
    fn default() -> Self {
        Self {
            url_safe: false,
            padding: true,
            chunked: true,
        }
    }
}

impl Base64 {
    pub(crate) fn set_option(&mut self, option: CodecOption) -> Result<(), CodecError> {
        match option {
            CodecOption::Base64UrlSafe(value) => self.url_safe = value,
            CodecOption::Base64Padding(value) => self.padding = value,
            CodecOption::Base64Chunked(value) => self.chunked = value,
            _ => return Err(CodecError::IgnoredOption),
        }
        Ok(())
    }

    /// The alphabet selected by the current configuration.
    pub(crate) fn alphabet(&self) -> &'static [u8; 64] {
        if self.url_safe {
            constants::ALPHABET_URL
        } else {
            constants::ALPHABET_STD
        }
    }
}
