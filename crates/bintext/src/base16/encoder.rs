//! Base16 encode pass.

use bintext_stream::ByteStream;

use super::{Base16, CHUNK_WIDTH};

/// Uppercase hex alphabet, one character per nibble.
const ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

impl Base16 {
    /// Appends the hex expansion of `data` to `out`, two characters per
    /// input byte, high nibble first.
    ///
    /// When `chunked`, a CRLF is written before any pair that would start
    /// while the accumulated buffer length is a positive multiple of
    /// [`CHUNK_WIDTH`]. The test runs over the raw buffer length (line
    /// breaks and output from earlier passes included) and never fires on
    /// the first pair of a pass.
    pub(crate) fn encode(&self, data: &[u8], out: &mut ByteStream) {
        for (i, &byte) in data.iter().enumerate() {
            if self.chunked && i > 0 && out.len() % CHUNK_WIDTH == 0 {
                out.write_bytes(b"\r\n");
            }
            out.write_byte(ALPHABET[(byte >> 4) as usize]);
            out.write_byte(ALPHABET[(byte & 0x0f) as usize]);
        }
    }
}
