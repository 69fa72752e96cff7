//! Capability-based filesystem checks built on `cap-std` and `camino`.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Return whether `path` exists and is a regular file.
///
/// A missing path surfaces as an [`io::ErrorKind::NotFound`] error so callers
/// can tell "absent" apart from "present but not a file".
pub(crate) fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir")
    }

    #[rstest]
    fn regular_file_is_reported() {
        let dir = TempDir::new().expect("tempdir");
        let path = utf8_root(&dir).join("routes.db");
        std::fs::write(&path, b"db").expect("write file");
        assert!(file_is_file(&path).expect("inspect file"));
    }

    #[rstest]
    fn directory_is_not_a_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = utf8_root(&dir).join("nested");
        std::fs::create_dir(&path).expect("create dir");
        assert!(!file_is_file(&path).expect("inspect dir"));
    }

    #[rstest]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let path = utf8_root(&dir).join("absent.db");
        let err = file_is_file(&path).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
