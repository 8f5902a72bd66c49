//! Base64 decode pass.

use bintext_stream::ByteStream;

use super::constants::{ALPHABET_STD, ALPHABET_URL, PAD};
use super::Base64;
use crate::error::CodecError;

const INVALID: u8 = 0xff;

/// Builds the character → sextet reverse table for one alphabet; unmapped
/// entries hold the `INVALID` sentinel.
const fn reverse_table(alphabet: &[u8; 64]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static REVERSE_STD: [u8; 256] = reverse_table(ALPHABET_STD);
static REVERSE_URL: [u8; 256] = reverse_table(ALPHABET_URL);

impl Base64 {
    /// Decodes base64 text into `out`, three bytes per group of four
    /// sextets.
    ///
    /// CR and LF are skipped entirely. Complete groups are appended as soon
    /// as they close, so a failure partway through leaves the
    /// already-decoded prefix in `out`.
    ///
    /// Padding rules: with `padding` on, `=` may only terminate a group
    /// already holding two or three sextets and nothing but CR/LF may follow
    /// the pad run; with `padding` off, `=` is an invalid character and a
    /// trailing group of two or three sextets decodes to one or two bytes.
    /// A trailing group of one sextet never decodes.
    pub(crate) fn decode(&self, data: &[u8], out: &mut ByteStream) -> Result<(), CodecError> {
        let table = if self.url_safe {
            &REVERSE_URL
        } else {
            &REVERSE_STD
        };
        let mut quad = [0u8; 4];
        let mut filled = 0usize;
        let mut pads = 0usize;
        for &c in data {
            if c == b'\r' || c == b'\n' {
                continue;
            }
            if c == PAD {
                if !self.padding || filled < 2 {
                    return Err(CodecError::InvalidInput);
                }
                pads += 1;
                if filled + pads > 4 {
                    return Err(CodecError::InvalidInput);
                }
                continue;
            }
            if pads > 0 {
                return Err(CodecError::InvalidInput);
            }
            let sextet = table[c as usize];
            if sextet == INVALID {
                return Err(CodecError::InvalidInput);
            }
            quad[filled] = sextet;
            filled += 1;
            if filled == 4 {
                out.write_byte((quad[0] << 2) | (quad[1] >> 4));
                out.write_byte((quad[1] << 4) | (quad[2] >> 2));
                out.write_byte((quad[2] << 6) | quad[3]);
                filled = 0;
            }
        }
        match (filled, pads) {
            (0, 0) => Ok(()),
            (2, 2) => {
                out.write_byte((quad[0] << 2) | (quad[1] >> 4));
                Ok(())
            }
            (3, 1) => {
                out.write_byte((quad[0] << 2) | (quad[1] >> 4));
                out.write_byte((quad[1] << 4) | (quad[2] >> 2));
                Ok(())
            }
            (2, 0) | (3, 0) if !self.padding => {
                out.write_byte((quad[0] << 2) | (quad[1] >> 4));
                if filled == 3 {
                    out.write_byte((quad[1] << 4) | (quad[2] >> 2));
                }
                Ok(())
            }
            _ => Err(CodecError::InvalidInput),
        }
    }
}
