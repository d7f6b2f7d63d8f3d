use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use encoding_rs::{Encoding, UTF_8};

use crate::codec::{self, Mode};
use crate::convert::ConvertError;

/// Converts a string in the given direction.
///
/// Compress encodes `input` to bytes per `encoding`, runs the gzip codec
/// into an in-memory buffer, and returns the buffer as padded RFC 4648
/// Base64. Decompress reverses each step. The same encoding must be used
/// on both sides of a round trip.
///
/// `None` is rejected with [`ConvertError::NullInput`]; an empty string is
/// valid and compresses to a minimal gzip member.
///
/// The encoding is normalized through [`Encoding::output_encoding`], so
/// labels the encoder cannot produce (UTF-16LE/BE, replacement) map to
/// UTF-8 on both sides of the round trip.
pub fn convert_string(
    mode: Mode,
    input: Option<&str>,
    encoding: &'static Encoding,
) -> Result<String, ConvertError> {
    let input = input.ok_or(ConvertError::NullInput)?;
    let encoding = encoding.output_encoding();
    match mode {
        Mode::Compress => {
            let (plain, _, _) = encoding.encode(input);
            let mut reader = plain.as_ref();
            let mut framed = Vec::new();
            codec::transform(Mode::Compress, &mut reader, &mut framed)?;
            Ok(BASE64.encode(framed))
        }
        Mode::Decompress => {
            let framed = BASE64.decode(input)?;
            let mut reader = framed.as_slice();
            let mut plain = Vec::new();
            codec::transform(Mode::Decompress, &mut reader, &mut plain)?;
            let (text, _, _) = encoding.decode(&plain);
            Ok(text.into_owned())
        }
    }
}

/// UTF-8 convenience for [`convert_string`] in compress direction.
pub fn compress_string(input: &str) -> Result<String, ConvertError> {
    convert_string(Mode::Compress, Some(input), UTF_8)
}

/// UTF-8 convenience for [`convert_string`] in decompress direction.
pub fn decompress_string(input: &str) -> Result<String, ConvertError> {
    convert_string(Mode::Decompress, Some(input), UTF_8)
}

#[cfg(test)]
mod tests {
    use super::{compress_string, convert_string, decompress_string};
    use crate::codec::{CodecError, Mode};
    use crate::convert::ConvertError;
    use encoding_rs::{UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};

    #[test]
    fn hello_world_round_trips_through_base64() {
        let packed = compress_string("hello world").expect("compress");
        assert!(!packed.is_empty());
        assert_ne!(packed, "hello world");
        assert_eq!(decompress_string(&packed).expect("decompress"), "hello world");
    }

    #[test]
    fn empty_string_is_valid_input() {
        let packed = compress_string("").expect("compress empty");
        assert!(!packed.is_empty());
        assert_eq!(decompress_string(&packed).expect("decompress empty"), "");
    }

    #[test]
    fn multibyte_text_round_trips() {
        let text = "naïve — 压缩 🗜️ מדחס";
        let packed = compress_string(text).expect("compress");
        assert_eq!(decompress_string(&packed).expect("decompress"), text);
    }

    #[test]
    fn output_is_deterministic_for_equal_inputs() {
        let first = compress_string("determinism check").expect("first");
        let second = compress_string("determinism check").expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn absent_input_is_rejected_in_both_directions() {
        for mode in [Mode::Compress, Mode::Decompress] {
            let err = convert_string(mode, None, UTF_8).expect_err("None must fail");
            assert!(matches!(err, ConvertError::NullInput));
        }
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let err = decompress_string("not*valid*base64!").expect_err("must fail");
        assert!(matches!(err, ConvertError::Base64(_)));
    }

    #[test]
    fn valid_base64_of_garbage_is_a_codec_error() {
        // "AAAAAAAAAAAA" decodes fine but carries no gzip header.
        let err = decompress_string("AAAAAAAAAAAA").expect_err("must fail");
        assert!(
            matches!(
                err,
                ConvertError::Codec(CodecError::Framing(_) | CodecError::Truncated)
            ),
            "expected framing/truncation, got {err:?}"
        );
    }

    #[test]
    fn utf16_labels_round_trip_via_output_encoding() {
        // The encoder cannot emit UTF-16, so both directions normalize to
        // its output encoding instead of decoding UTF-8 bytes as UTF-16.
        for encoding in [UTF_16LE, UTF_16BE] {
            let text = "hello 圧縮 world";
            let packed =
                convert_string(Mode::Compress, Some(text), encoding).expect("compress utf-16");
            let recovered =
                convert_string(Mode::Decompress, Some(&packed), encoding).expect("decompress");
            assert_eq!(recovered, text, "round trip failed for {}", encoding.name());
        }
    }

    #[test]
    fn non_utf8_encoding_round_trips_when_matched() {
        let text = "déjà vu à 100°";
        let packed =
            convert_string(Mode::Compress, Some(text), WINDOWS_1252).expect("compress cp1252");
        let recovered =
            convert_string(Mode::Decompress, Some(&packed), WINDOWS_1252).expect("decompress");
        assert_eq!(recovered, text);
    }
}
