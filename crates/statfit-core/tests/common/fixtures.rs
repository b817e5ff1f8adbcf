//! Sample files under `test_fixtures/`
//!
//! `diameters.txt` and `diameters.csv` hold the same 60 measurements; the
//! CSV has a part id in its first column.

use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "test_fixtures", name]
        .iter()
        .collect()
}

/// Raw fixture text, for feeding through the upload encoder
pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()))
}
