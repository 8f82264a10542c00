//! Application state shared by the axum handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use campus_paths_lib::{resolve_data_dir, CampusMap, Error as LibError};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// The data directory could not be resolved.
    DataDirUnavailable(LibError),

    /// The dataset could not be loaded or did not form a valid map.
    DatasetLoad { dir: PathBuf, source: LibError },
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataDirUnavailable(e) => write!(f, "failed to resolve data directory: {}", e),
            Self::DatasetLoad { dir, source } => {
                write!(f, "failed to load campus dataset from {}: {}", dir.display(), source)
            }
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DataDirUnavailable(e) => Some(e),
            Self::DatasetLoad { source, .. } => Some(source),
        }
    }
}

/// Shared application state.
///
/// Cheap to clone; every clone refers to the same campus map and therefore the
/// same route cache.
///
/// ```ignore
/// use axum::{extract::State, routing::get, Router};
/// use campus_paths_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) -> String {
///     state.map().building_count().to_string()
/// }
///
/// let state = AppState::load(None).unwrap();
/// let app: Router = Router::new().route("/count", get(handler)).with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    map: CampusMap,
    data_dir: Option<PathBuf>,
}

impl AppState {
    /// Load the campus map from `data_dir`, or from the default data directory
    /// when `None`.
    pub fn load(data_dir: Option<&Path>) -> Result<Self, AppStateError> {
        let dir = resolve_data_dir(data_dir).map_err(AppStateError::DataDirUnavailable)?;

        tracing::info!(dir = %dir.display(), "loading campus dataset");
        let map = CampusMap::load(&dir).map_err(|source| AppStateError::DatasetLoad {
            dir: dir.clone(),
            source,
        })?;
        tracing::info!(
            buildings = map.building_count(),
            nodes = map.graph().node_count(),
            "campus map loaded"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                map,
                data_dir: Some(dir),
            }),
        })
    }

    /// Wrap an already built map.
    pub fn from_map(map: CampusMap) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                map,
                data_dir: None,
            }),
        }
    }

    pub fn map(&self) -> &CampusMap {
        &self.inner.map
    }

    /// Directory the dataset was loaded from, if it came from disk.
    pub fn data_dir(&self) -> Option<&Path> {
        self.inner.data_dir.as_deref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("buildings", &self.inner.map.building_count())
            .field("cached_routes", &self.inner.map.cached_routes())
            .field("data_dir", &self.inner.data_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_paths_lib::Building;

    fn single_building_map() -> CampusMap {
        CampusMap::from_records(
            vec![Building {
                short_name: "CSE".to_string(),
                long_name: "Allen Center".to_string(),
                x: 1.0,
                y: 2.0,
            }],
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn from_map_wraps_without_directory() {
        let state = AppState::from_map(single_building_map());
        assert_eq!(state.map().building_count(), 1);
        assert!(state.data_dir().is_none());
    }

    #[test]
    fn clones_share_the_route_cache() {
        let state = AppState::from_map(single_building_map());
        let clone = state.clone();
        state.map().find_shortest_path("CSE", "CSE").unwrap();
        assert_eq!(clone.map().cached_routes(), 1);
        assert_eq!(clone.map().solver_runs(), 1);
    }

    #[test]
    fn debug_shows_summary() {
        let debug = format!("{:?}", AppState::from_map(single_building_map()));
        assert!(debug.contains("AppState"));
        assert!(debug.contains("buildings: 1"));
    }

    #[test]
    fn load_reports_missing_dataset() {
        let err = AppState::load(Some(Path::new("/nonexistent/campus"))).unwrap_err();
        match &err {
            AppStateError::DatasetLoad { dir, source } => {
                assert_eq!(dir, Path::new("/nonexistent/campus"));
                assert!(matches!(source, LibError::DatasetNotFound { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("/nonexistent/campus"));
    }
}
