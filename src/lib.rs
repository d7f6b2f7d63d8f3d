pub mod codec;
pub mod convert;
pub mod naming;

pub use codec::{CodecError, Mode, transform};
pub use convert::{
    ConvertError, FileReport, compress_string, convert_file, convert_file_with_default_name,
    convert_string, decompress_string,
};
