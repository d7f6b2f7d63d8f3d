use std::io;
use std::path::{Path, PathBuf};

use crate::codec::CodecError;

pub mod file;
pub mod string;

pub use file::{FileReport, convert_file, convert_file_with_default_name};
pub use string::{compress_string, convert_string, decompress_string};

#[derive(Debug)]
pub enum ConvertError {
    /// A required input string was absent. An empty string is valid input;
    /// only a missing one is rejected.
    NullInput,
    NotFound(PathBuf),
    Access { path: PathBuf, source: io::Error },
    Base64(base64::DecodeError),
    Codec(CodecError),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullInput => write!(f, "input string is required"),
            Self::NotFound(path) => write!(f, "source file `{}` not found", path.display()),
            Self::Access { path, source } => {
                write!(f, "cannot access `{}`: {source}", path.display())
            }
            Self::Base64(err) => write!(f, "input is not valid Base64: {err}"),
            Self::Codec(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<CodecError> for ConvertError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

impl From<base64::DecodeError> for ConvertError {
    fn from(value: base64::DecodeError) -> Self {
        Self::Base64(value)
    }
}

impl ConvertError {
    /// Stable code string for CLI error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NullInput => "null_input",
            Self::NotFound(_) => "not_found",
            Self::Access { .. } => "access_denied",
            Self::Base64(_) => "base64_decode",
            Self::Codec(CodecError::Framing(_)) => "framing",
            Self::Codec(CodecError::Truncated) => "truncated_input",
            Self::Codec(CodecError::Io(_)) => "io_error",
        }
    }

    fn open_failed(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::Access {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    fn create_failed(path: &Path, err: io::Error) -> Self {
        Self::Access {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
