use std::fs::File;
use std::path::{Path, PathBuf};

use crate::codec::{self, Mode};
use crate::convert::ConvertError;
use crate::naming;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub source: PathBuf,
    pub dest: PathBuf,
    /// Plaintext bytes that crossed the codec: bytes read when compressing,
    /// bytes written when decompressing.
    pub bytes: u64,
}

/// Converts `source` into `dest` in the given direction.
///
/// The source is opened read-only; the destination is created or truncated.
/// Both handles close on every exit path when they drop. On a codec error
/// the destination is left partially written; callers that need atomicity
/// must stage the output themselves.
pub fn convert_file(mode: Mode, source: &Path, dest: &Path) -> Result<FileReport, ConvertError> {
    let mut reader = File::open(source).map_err(|err| ConvertError::open_failed(source, err))?;
    let mut writer = File::create(dest).map_err(|err| ConvertError::create_failed(dest, err))?;
    let bytes = codec::transform(mode, &mut reader, &mut writer)?;
    Ok(FileReport {
        source: source.to_path_buf(),
        dest: dest.to_path_buf(),
        bytes,
    })
}

/// Like [`convert_file`], with the destination derived from the source:
/// `.gz` appended when compressing, stripped when decompressing.
pub fn convert_file_with_default_name(
    mode: Mode,
    source: &Path,
) -> Result<FileReport, ConvertError> {
    let dest = match mode {
        Mode::Compress => naming::compressed_name(source),
        Mode::Decompress => naming::decompressed_name(source),
    };
    convert_file(mode, source, &dest)
}
