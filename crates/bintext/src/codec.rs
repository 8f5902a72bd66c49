//! Codec handle and protocol dispatch.

use bintext_stream::ByteStream;

use crate::base16::Base16;
use crate::base64::Base64;
use crate::error::CodecError;

/// Transcoding schemes known to the framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Base16,
    Base64,
}

impl Protocol {
    /// Looks up a protocol by its registry name.
    ///
    /// Returns `None` for names no transcoder is registered under.
    ///
    /// # Example
    ///
    /// ```
    /// use bintext::Protocol;
    ///
    /// assert_eq!(Protocol::from_name("hex"), Some(Protocol::Base16));
    /// assert_eq!(Protocol::from_name("base32"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Protocol> {
        match name {
            "base16" | "hex" => Some(Protocol::Base16),
            "base64" => Some(Protocol::Base64),
            _ => None,
        }
    }
}

/// Direction of a transcoding pass, fixed for the lifetime of a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Encode,
    Decode,
}

/// Scheme-scoped configuration switches.
///
/// Each option carries its value. Applying an option to a handle whose
/// protocol does not recognize it fails with [`CodecError::IgnoredOption`]
/// and leaves the configuration untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecOption {
    /// Accept lowercase hex digits when decoding base16.
    Base16IgnoreCase(bool),
    /// Wrap base16 encoder output with CRLF line breaks.
    Base16Chunked(bool),
    /// Use the URL-safe base64 alphabet (`-` and `_` for `+` and `/`).
    Base64UrlSafe(bool),
    /// Emit `=` padding when encoding and require it when decoding base64.
    Base64Padding(bool),
    /// Wrap base64 encoder output with CRLF line breaks.
    Base64Chunked(bool),
}

/// The transcoder variant selected for a handle, carrying its configuration.
#[derive(Debug, Clone)]
enum Transcoder {
    Base16(Base16),
    Base64(Base64),
}

/// A single-direction transcoding handle.
///
/// A handle owns its result buffer: every successful [`Codec::work`] call
/// appends to it, and [`Codec::reset`] clears it while keeping the
/// configuration. The protocol and method never change after construction:
/// an encode handle can never decode and vice versa.
///
/// # Example
///
/// ```
/// use bintext::{Codec, Method, Protocol};
///
/// let mut codec = Codec::new(Protocol::Base16, Method::Encode);
/// let text = codec.work(&[0xde, 0xad]).unwrap();
/// assert_eq!(text, b"DEAD");
/// ```
#[derive(Debug)]
pub struct Codec {
    method: Method,
    transcoder: Transcoder,
    result: ByteStream,
    last_error: Option<CodecError>,
}

impl Codec {
    /// Creates a handle for `protocol` with that scheme's default
    /// configuration.
    pub fn new(protocol: Protocol, method: Method) -> Codec {
        let transcoder = match protocol {
            Protocol::Base16 => Transcoder::Base16(Base16::default()),
            Protocol::Base64 => Transcoder::Base64(Base64::default()),
        };
        Codec {
            method,
            transcoder,
            result: ByteStream::new(),
            last_error: None,
        }
    }

    /// Creates a handle for the protocol registered under `name`, or `None`
    /// if no transcoder answers to that name.
    pub fn from_name(name: &str, method: Method) -> Option<Codec> {
        Protocol::from_name(name).map(|protocol| Codec::new(protocol, method))
    }

    /// The scheme this handle was created for.
    pub fn protocol(&self) -> Protocol {
        match self.transcoder {
            Transcoder::Base16(_) => Protocol::Base16,
            Transcoder::Base64(_) => Protocol::Base64,
        }
    }

    /// The direction this handle was created for.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Applies a configuration option to the active transcoder.
    ///
    /// Options scoped to another scheme fail with
    /// [`CodecError::IgnoredOption`]; the configuration is unchanged and a
    /// later [`Codec::work`] behaves exactly as it would have without the
    /// call.
    pub fn set_option(&mut self, option: CodecOption) -> Result<(), CodecError> {
        let outcome = match &mut self.transcoder {
            Transcoder::Base16(base16) => base16.set_option(option),
            Transcoder::Base64(base64) => base64.set_option(option),
        };
        self.last_error = outcome.err();
        outcome
    }

    /// Runs one transcoding pass over `input`, appending the produced bytes
    /// to the result buffer.
    ///
    /// Returns the full accumulated buffer on success; repeated calls keep
    /// appending until [`Codec::reset`]. An empty `input` fails with
    /// [`CodecError::EmptyInput`] and leaves the buffer untouched. A decode
    /// failure leaves any bytes produced before the failing position in the
    /// buffer.
    pub fn work(&mut self, input: &[u8]) -> Result<&[u8], CodecError> {
        if input.is_empty() {
            self.last_error = Some(CodecError::EmptyInput);
            return Err(CodecError::EmptyInput);
        }
        let outcome = match (&self.transcoder, self.method) {
            (Transcoder::Base16(base16), Method::Encode) => {
                base16.encode(input, &mut self.result);
                Ok(())
            }
            (Transcoder::Base16(base16), Method::Decode) => base16.decode(input, &mut self.result),
            (Transcoder::Base64(base64), Method::Encode) => {
                base64.encode(input, &mut self.result);
                Ok(())
            }
            (Transcoder::Base64(base64), Method::Decode) => base64.decode(input, &mut self.result),
        };
        match outcome {
            Ok(()) => {
                self.last_error = None;
                Ok(self.result.as_slice())
            }
            Err(err) => {
                self.last_error = Some(err);
                Err(err)
            }
        }
    }

    /// Clears the result buffer; configuration, protocol and method persist.
    pub fn reset(&mut self) {
        self.result.clear();
    }

    /// The outcome of the most recent [`Codec::work`] or
    /// [`Codec::set_option`] call; `None` means it succeeded.
    pub fn last_error(&self) -> Option<CodecError> {
        self.last_error
    }

    /// Consumes the handle and hands back the accumulated result buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.result.into_bytes()
    }
}
