use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Conventional extension for gzip-compressed files, matched
/// case-insensitively.
pub const GZIP_EXTENSION: &str = "gz";

/// Default destination for compressing `path`: the same path with `.gz`
/// appended, unless it already carries the extension.
pub fn compressed_name(path: &Path) -> PathBuf {
    if has_gzip_extension(path) {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(GZIP_EXTENSION);
    PathBuf::from(name)
}

/// Default destination for decompressing `path`: the same path with a
/// trailing `.gz` stripped, or unchanged when the extension is absent.
pub fn decompressed_name(path: &Path) -> PathBuf {
    if has_gzip_extension(path) {
        path.with_extension("")
    } else {
        path.to_path_buf()
    }
}

fn has_gzip_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(GZIP_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::{compressed_name, decompressed_name};
    use std::path::Path;

    #[test]
    fn compressed_name_appends_extension_once() {
        assert_eq!(
            compressed_name(Path::new("a.txt")),
            Path::new("a.txt.gz")
        );
        assert_eq!(
            compressed_name(Path::new("a.txt.gz")),
            Path::new("a.txt.gz")
        );
    }

    #[test]
    fn decompressed_name_strips_extension_when_present() {
        assert_eq!(
            decompressed_name(Path::new("a.txt.gz")),
            Path::new("a.txt")
        );
        assert_eq!(decompressed_name(Path::new("a.txt")), Path::new("a.txt"));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(
            compressed_name(Path::new("report.TXT.GZ")),
            Path::new("report.TXT.GZ")
        );
        assert_eq!(
            decompressed_name(Path::new("report.TXT.GZ")),
            Path::new("report.TXT")
        );
    }

    #[test]
    fn directory_component_is_preserved() {
        assert_eq!(
            compressed_name(Path::new("logs/2026/app.log")),
            Path::new("logs/2026/app.log.gz")
        );
        assert_eq!(
            decompressed_name(Path::new("logs/2026/app.log.gz")),
            Path::new("logs/2026/app.log")
        );
    }

    #[test]
    fn bare_gz_name_strips_to_stem() {
        assert_eq!(decompressed_name(Path::new("archive.gz")), Path::new("archive"));
        assert_eq!(compressed_name(Path::new("archive")), Path::new("archive.gz"));
    }
}
