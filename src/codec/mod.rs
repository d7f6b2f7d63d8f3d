use std::io::{self, Read, Write};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

/// First two bytes of every gzip member.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

#[derive(Debug)]
pub enum CodecError {
    /// The input does not carry a valid gzip header, or a block or the
    /// CRC32/length trailer fails validation.
    Framing(String),
    /// The input ends mid-member, before the trailer.
    Truncated,
    /// An I/O failure unrelated to framing (e.g. the destination ran out
    /// of space mid-copy).
    Io(io::Error),
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Framing(detail) => write!(f, "invalid gzip framing: {detail}"),
            Self::Truncated => write!(f, "input ended before the gzip stream was complete"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CodecError {}

impl CodecError {
    // Only meaningful on the decompress path; compress-side failures are
    // plain I/O errors regardless of kind.
    fn from_stream(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::Truncated,
            io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput => {
                Self::Framing(err.to_string())
            }
            _ => Self::Io(err),
        }
    }
}

/// Drains `input` through the gzip codec into `output`.
///
/// Compress wraps the writer in a gzip member (header, DEFLATE blocks,
/// CRC32 + uncompressed-length trailer) and returns the number of
/// plaintext bytes read. Decompress validates the framing, inflates, and
/// returns the number of plaintext bytes written. Data moves through
/// `io::copy`'s fixed-size buffer, so neither direction holds the whole
/// stream in memory. Neither stream is closed here; both stay owned by
/// the caller.
pub fn transform<R, W>(mode: Mode, input: &mut R, output: &mut W) -> Result<u64, CodecError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    match mode {
        Mode::Compress => {
            let mut encoder = GzEncoder::new(output, Compression::default());
            let bytes = io::copy(input, &mut encoder).map_err(CodecError::Io)?;
            encoder.try_finish().map_err(CodecError::Io)?;
            Ok(bytes)
        }
        Mode::Decompress => {
            let mut decoder = GzDecoder::new(input);
            let bytes = io::copy(&mut decoder, output).map_err(CodecError::from_stream)?;
            Ok(bytes)
        }
    }
}
