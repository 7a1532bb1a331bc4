#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub const CROSSREF_DIR: &str = "tests/data/crossref";
pub const HIP_SAMPLE: &str = "tests/data/hip_sample.dat";

pub fn utf8(dir: &TempDir) -> &Utf8Path {
    Utf8Path::from_path(dir.path()).expect("temporary directory path is UTF-8")
}

/// Copy the cross-reference fixtures into a fresh directory, leaving out `skip`.
///
/// The caller must hold the returned [`TempDir`] guard to keep the directory alive.
pub fn crossref_copy(skip: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    for entry in std::fs::read_dir(CROSSREF_DIR).unwrap() {
        let entry = entry.unwrap();
        let name = entry.file_name().into_string().unwrap();
        if !skip.contains(&name.as_str()) {
            std::fs::copy(entry.path(), dir.path().join(&name)).unwrap();
        }
    }
    dir
}

pub fn hip_sample() -> Utf8PathBuf {
    Utf8PathBuf::from(HIP_SAMPLE)
}
