//! Fixture-backed state for handler tests.

use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::state::AppState;

/// Directory holding the fixture TSV files.
pub const TEST_FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../docs/fixtures");

static TEST_STATE: Lazy<AppState> = Lazy::new(|| {
    let dir = PathBuf::from(TEST_FIXTURE_DIR);
    AppState::load(Some(&dir))
        .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", dir, e))
});

/// Shared state loaded from the fixture dataset.
///
/// Every caller shares one map and therefore one route cache. Tests that
/// count solver runs should build their own state with [`fresh_state`].
pub fn test_state() -> AppState {
    TEST_STATE.clone()
}

/// A newly loaded fixture state with an empty route cache.
pub fn fresh_state() -> AppState {
    AppState::load(Some(&fixture_dir())).unwrap_or_else(|e| panic!("fixture load failed: {}", e))
}

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_DIR)
}

/// Building short names present in the fixture.
pub mod fixture_buildings {
    /// Paul G. Allen Center, north-west corner.
    pub const CSE: &str = "CSE";
    pub const MGH: &str = "MGH";
    pub const SUZ: &str = "SUZ";
    /// Reachable from CSE by a one-way walkway only.
    pub const KNE: &str = "KNE";
    /// No walkways at all.
    pub const ODE: &str = "ODE";
}
