//! Fixtures for CLI tests: temporary SQLite databases and UTF-8 paths.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use tiered_route_core::{
    GeoPoint,
    test_support::{stop, write_sqlite_database},
};

pub(super) const SEEDED_DATE: &str = "2025-09-24";

/// A temporary directory holding a seeded `routes.db`.
pub(super) struct SeededDatabase {
    _dir: TempDir,
    root: Utf8PathBuf,
    database: Utf8PathBuf,
}

impl SeededDatabase {
    pub(super) fn new() -> Self {
        Self::with_depot(Some(GeoPoint::new(-33.518, -70.71749)))
    }

    pub(super) fn with_depot(depot: Option<GeoPoint>) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let database = root.join("routes.db");
        let stops = [
            stop("1", "BLACK", -33.44, -70.65),
            stop("2", "BLACK", -33.45, -70.62),
            stop("3", "PRO", -33.49, -70.60),
            stop("4", "REGULAR", -33.50, -70.67),
        ];
        write_sqlite_database(database.as_std_path(), depot, SEEDED_DATE, &stops)
            .expect("seed database");
        Self {
            _dir: dir,
            root,
            database,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn database(&self) -> &Utf8Path {
        &self.database
    }
}

pub(super) fn utf8_output(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).expect("output should be UTF-8")
}
