//! Binary-to-text codec framework.
//!
//! `bintext` registers transcoding schemes (base16 and base64) behind one
//! handle API: pick a [`Protocol`] and a [`Method`] at construction, apply
//! scheme-scoped [`CodecOption`]s, then feed complete input buffers through
//! [`Codec::work`]. Output accumulates in a handle-owned byte stream until
//! [`Codec::reset`]; failures surface as [`CodecError`] codes, also
//! retrievable through [`Codec::last_error`].
//!
//! # Example
//!
//! ```
//! use bintext::{Codec, CodecOption, Method, Protocol};
//!
//! let mut codec = Codec::new(Protocol::Base16, Method::Decode);
//! codec.set_option(CodecOption::Base16IgnoreCase(true)).unwrap();
//! let bytes = codec.work(b"deadBEEF").unwrap();
//! assert_eq!(bytes, [0xde, 0xad, 0xbe, 0xef]);
//! ```

mod base16;
mod base64;
mod codec;
mod error;

pub use codec::{Codec, CodecOption, Method, Protocol};
pub use error::CodecError;

/// Encodes `data` with `protocol`'s default configuration.
///
/// # Example
///
/// ```
/// use bintext::{encode, Protocol};
///
/// assert_eq!(encode(Protocol::Base64, b"hello world"), b"aGVsbG8gd29ybGQ=");
/// ```
pub fn encode(protocol: Protocol, data: &[u8]) -> Vec<u8> {
    let mut codec = Codec::new(protocol, Method::Encode);
    if !data.is_empty() {
        // Encoding a non-empty buffer never fails.
        let _ = codec.work(data);
    }
    codec.into_bytes()
}

/// Decodes `text` with `protocol`'s default configuration.
///
/// # Example
///
/// ```
/// use bintext::{decode, Protocol};
///
/// assert_eq!(decode(Protocol::Base64, b"aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn decode(protocol: Protocol, text: &[u8]) -> Result<Vec<u8>, CodecError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let mut codec = Codec::new(protocol, Method::Decode);
    codec.work(text)?;
    Ok(codec.into_bytes())
}
