/// Standard base64 alphabet (RFC 4648 §4).
pub(crate) const ALPHABET_STD: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (RFC 4648 §5): `-` and `_` replace `+` and `/`.
pub(crate) const ALPHABET_URL: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding byte.
pub(crate) const PAD: u8 = b'=';
