//! Kept in its own test binary: it inspects the descriptors of the whole process.
#![cfg(target_os = "linux")]

mod common;

use astrocat::{AstrocatError, CatalogResolver};
use common::{crossref_copy, utf8};

/// Number of descriptors of this process that point inside `dir`.
fn open_handles_in(dir: &std::path::Path) -> usize {
    std::fs::read_dir("/proc/self/fd")
        .unwrap()
        .filter_map(|entry| std::fs::read_link(entry.ok()?.path()).ok())
        .filter(|target| target.starts_with(dir))
        .count()
}

#[test]
fn test_failed_open_releases_opened_tables() {
    let dir = crossref_copy(&["refs.dat"]);
    let root = dir.path().canonicalize().unwrap();
    assert_eq!(open_handles_in(&root), 0);

    let resolver = CatalogResolver::open(utf8(&dir));
    assert!(matches!(resolver, Err(AstrocatError::OpenError { .. })));
    assert_eq!(open_handles_in(&root), 0);

    std::fs::write(dir.path().join("refs.dat"), "").unwrap();
    let resolver = CatalogResolver::open(utf8(&dir)).unwrap();
    assert_eq!(open_handles_in(&root), 5);

    resolver.close();
    assert_eq!(open_handles_in(&root), 0);
}
