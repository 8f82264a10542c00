use std::path::PathBuf;

use campus_paths_lib::CampusMap;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_map() -> CampusMap {
    CampusMap::load(&fixtures_dir()).expect("fixture dataset loads")
}
