//! Test helpers for writing map files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use dispatch_core::test_support::REFERENCE_MAP;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory holding a map file.
#[derive(Debug)]
pub(super) struct MapWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
    map: Utf8PathBuf,
}

impl MapWorkspace {
    /// Workspace with the reference map written to `city.map`.
    pub(super) fn with_reference_map() -> Self {
        let workspace = Self::empty();
        write_utf8(&workspace.map, REFERENCE_MAP.as_bytes());
        workspace
    }

    /// Workspace where `city.map` has not been written yet.
    pub(super) fn empty() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let map = root.join("city.map");
        Self {
            _dir: dir,
            root,
            map,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn map(&self) -> &Utf8Path {
        &self.map
    }
}
