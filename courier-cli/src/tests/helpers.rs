//! Test helpers for staging catalogues and output folders on disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Two sushi orders served by a single restaurant near the origin.
pub(super) const SUSHI_CATALOG: &str = r#"{
    "origin": { "latitude": 41.528, "longitude": 2.434 },
    "specialties": [
        { "name": "Japonesa", "commitment_weight": 30, "unit_weight": 300, "marker_colour": "darkblue" }
    ],
    "orders": [
        { "id": 2, "specialty": "Japonesa", "address": "Sant Benet 8",
          "coordinate": { "latitude": 41.5387, "longitude": 2.4409 } },
        { "id": 18, "specialty": "Japonesa", "address": "Can Llopis 8",
          "coordinate": { "latitude": 41.5466, "longitude": 2.4665 } }
    ],
    "restaurants": [
        { "name": "Katsumi Sushi", "address": "Plaça d'Espanya 18", "specialty": "Japonesa",
          "coordinate": { "latitude": 41.5446, "longitude": 2.4416 } }
    ]
}"#;

/// A temporary directory with a UTF-8 root path.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    pub(super) fn write_catalog(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}
