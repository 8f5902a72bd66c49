//! Tests for the base16 transcoder.

use bintext::{Codec, CodecError, CodecOption, Method, Protocol};
use proptest::prelude::*;
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=200);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn encodes_uppercase_pairs() {
    assert_eq!(
        bintext::encode(Protocol::Base16, &[0xde, 0xad, 0xbe, 0xef]),
        b"DEADBEEF"
    );
    assert_eq!(bintext::encode(Protocol::Base16, &[0x00, 0x0f]), b"000F");
}

#[test]
fn thirty_eight_bytes_fill_a_line_without_a_break() {
    let text = bintext::encode(Protocol::Base16, &[0xab; 38]);
    assert_eq!(text.len(), 76);
    assert!(!text.contains(&b'\r'));
}

#[test]
fn forty_bytes_break_once_after_the_76th_character() {
    let text = bintext::encode(Protocol::Base16, &[0xab; 40]);
    assert_eq!(text.len(), 82);
    assert_eq!(&text[76..78], b"\r\n");
    assert_eq!(text.iter().filter(|&&c| c == b'\n').count(), 1);
}

#[test]
fn chunking_can_be_disabled() {
    let mut codec = Codec::new(Protocol::Base16, Method::Encode);
    codec.set_option(CodecOption::Base16Chunked(false)).unwrap();
    let text = codec.work(&[0xab; 40]).unwrap();
    assert_eq!(text.len(), 80);
    assert!(!text.contains(&b'\r'));
}

#[test]
fn break_position_tracks_the_accumulated_buffer() {
    // Two 20-byte passes: the line break lands where the buffer reaches 76
    // characters, in the middle of the second pass.
    let mut codec = Codec::new(Protocol::Base16, Method::Encode);
    codec.work(&[0x11; 20]).unwrap();
    let text = codec.work(&[0x22; 20]).unwrap();
    assert_eq!(text.len(), 82);
    assert_eq!(&text[76..78], b"\r\n");
}

#[test]
fn decode_accepts_mixed_case_only_when_folding() {
    let folded = {
        let mut codec = Codec::new(Protocol::Base16, Method::Decode);
        codec
            .set_option(CodecOption::Base16IgnoreCase(true))
            .unwrap();
        codec.work(b"deadBEEF").unwrap().to_vec()
    };
    let upper = bintext::decode(Protocol::Base16, b"DEADBEEF").unwrap();
    assert_eq!(folded, upper);
    assert_eq!(
        bintext::decode(Protocol::Base16, b"deadbeef"),
        Err(CodecError::InvalidInput)
    );
}

#[test]
fn odd_length_is_rejected_before_any_output() {
    let mut codec = Codec::new(Protocol::Base16, Method::Decode);
    assert_eq!(codec.work(b"ABC"), Err(CodecError::InvalidInput));
    assert_eq!(codec.into_bytes(), Vec::<u8>::new());
}

#[test]
fn illegal_characters_are_rejected() {
    assert_eq!(
        bintext::decode(Protocol::Base16, b"GG"),
        Err(CodecError::InvalidInput)
    );
    assert_eq!(
        bintext::decode(Protocol::Base16, b"4!"),
        Err(CodecError::InvalidInput)
    );
}

#[test]
fn embedded_line_breaks_are_skipped() {
    assert_eq!(
        bintext::decode(Protocol::Base16, b"DE\r\nAD").unwrap(),
        bintext::decode(Protocol::Base16, b"DEAD").unwrap()
    );
}

#[test]
fn parity_counts_line_break_characters() {
    // Two digits plus two newlines: raw length 4 is even, so this decodes.
    assert_eq!(bintext::decode(Protocol::Base16, b"A\nB\n").unwrap(), [0xab]);
    // Two digits plus one CR: raw length 3 is odd, rejected up front.
    assert_eq!(
        bintext::decode(Protocol::Base16, b"AB\r"),
        Err(CodecError::InvalidInput)
    );
}

#[test]
fn dangling_digit_after_skipped_breaks_is_rejected() {
    // Raw length 6 is even but only three digits survive the CRLF skip.
    let mut codec = Codec::new(Protocol::Base16, Method::Decode);
    assert_eq!(codec.work(b"41\r\n4\n"), Err(CodecError::InvalidInput));
    // The completed first pair was already appended.
    assert_eq!(codec.into_bytes(), [0x41]);
}

#[test]
fn random_blobs_roundtrip_through_the_default_config() {
    for _ in 0..100 {
        let blob = generate_blob();
        let text = bintext::encode(Protocol::Base16, &blob);
        let back = bintext::decode(Protocol::Base16, &text).unwrap();
        assert_eq!(back, blob);
    }
}

proptest! {
    #[test]
    fn roundtrip_with_and_without_chunking(data in proptest::collection::vec(any::<u8>(), 0..300), chunked: bool) {
        let mut encoder = Codec::new(Protocol::Base16, Method::Encode);
        encoder.set_option(CodecOption::Base16Chunked(chunked)).unwrap();
        let text = if data.is_empty() {
            Vec::new()
        } else {
            encoder.work(&data).unwrap().to_vec()
        };
        let back = bintext::decode(Protocol::Base16, &text).unwrap();
        prop_assert_eq!(back, data);
    }
}
