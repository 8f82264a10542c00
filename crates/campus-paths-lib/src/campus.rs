//! Name-based routing over the campus walkway graph.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path as FsPath;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cache::{PathCache, RouteKey, UnboundedCache};
use crate::dataset::{load_dataset, Building, PathRecord};
use crate::error::{Error, Result};
use crate::graph::{Distance, LabeledGraph};
use crate::path::Path;
use crate::routing::shortest_path;

/// Maximum number of close matches offered for an unknown building name.
const MAX_SUGGESTIONS: usize = 3;

/// Similarity threshold for suggesting a building name.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Map coordinate. Equality is exact; no snapping is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

type RouteCache = dyn PathCache<RouteKey, Option<Path<Point>>>;

/// Campus walkway graph with building lookups and memoized route queries.
///
/// The graph and building indices are fixed at construction. Every distinct
/// ordered `(start, end)` query is solved at most once; later queries for the
/// same pair are answered from the cache, including "no route" outcomes.
pub struct CampusMap {
    graph: LabeledGraph<Point, Distance>,
    short_name_to_point: HashMap<String, Point>,
    point_to_building: HashMap<Point, Building>,
    cache: Box<RouteCache>,
    solver_runs: AtomicUsize,
}

impl CampusMap {
    /// Build the map from parsed building and walkway records.
    ///
    /// Each walkway record contributes exactly one directed edge, in the
    /// direction it was recorded.
    pub fn from_records(buildings: Vec<Building>, paths: Vec<PathRecord>) -> Result<Self> {
        let mut graph = LabeledGraph::new();
        let mut short_name_to_point = HashMap::with_capacity(buildings.len());
        let mut point_to_building: HashMap<Point, Building> =
            HashMap::with_capacity(buildings.len());

        for building in buildings {
            let point = Point::new(building.x, building.y);
            if short_name_to_point.contains_key(&building.short_name) {
                return Err(Error::DuplicateBuilding {
                    name: building.short_name,
                });
            }
            if let Some(existing) = point_to_building.get(&point) {
                return Err(Error::SharedBuildingLocation {
                    first: existing.short_name.clone(),
                    second: building.short_name,
                });
            }
            graph.add_node(point);
            short_name_to_point.insert(building.short_name.clone(), point);
            point_to_building.insert(point, building);
        }

        for record in &paths {
            let start = Point::new(record.x1, record.y1);
            let end = Point::new(record.x2, record.y2);
            graph.add_node(start);
            graph.add_node(end);
            graph.add_edge(start, end, Distance::new(record.distance)?)?;
        }

        let one_way = count_one_way(&graph);
        if one_way > 0 {
            debug!(edges = one_way, "walkways recorded in one direction only");
        }

        info!(
            buildings = short_name_to_point.len(),
            nodes = graph.node_count(),
            edges = graph.edge_total(),
            "campus map built"
        );

        let map = Self {
            graph,
            short_name_to_point,
            point_to_building,
            cache: Box::new(UnboundedCache::new()),
            solver_runs: AtomicUsize::new(0),
        };
        map.check_rep();
        Ok(map)
    }

    /// Parse the dataset in `dir` and build the map.
    pub fn load(dir: &FsPath) -> Result<Self> {
        let dataset = load_dataset(dir)?;
        Self::from_records(dataset.buildings, dataset.paths)
    }

    /// Replace the route cache. Entries held by the previous cache are dropped.
    pub fn with_cache<C>(mut self, cache: C) -> Self
    where
        C: PathCache<RouteKey, Option<Path<Point>>> + 'static,
    {
        self.cache = Box::new(cache);
        self
    }

    /// Whether `short_name` identifies a building on the map.
    pub fn short_name_exists(&self, short_name: &str) -> bool {
        self.short_name_to_point.contains_key(short_name)
    }

    /// Long display name of the building registered as `short_name`.
    pub fn long_name_for(&self, short_name: &str) -> Result<&str> {
        self.building(short_name)
            .map(|building| building.long_name.as_str())
            .ok_or_else(|| Error::BuildingNotFound {
                name: short_name.to_string(),
            })
    }

    /// Short name to long name for every building.
    pub fn building_names(&self) -> BTreeMap<String, String> {
        self.point_to_building
            .values()
            .map(|b| (b.short_name.clone(), b.long_name.clone()))
            .collect()
    }

    /// All buildings, ordered by short name.
    pub fn buildings(&self) -> Vec<&Building> {
        let mut buildings: Vec<&Building> = self.point_to_building.values().collect();
        buildings.sort_by(|a, b| a.short_name.cmp(&b.short_name));
        buildings
    }

    pub fn building(&self, short_name: &str) -> Option<&Building> {
        self.short_name_to_point
            .get(short_name)
            .and_then(|point| self.point_to_building.get(point))
    }

    /// Coordinate of the building registered as `short_name`.
    pub fn point_for(&self, short_name: &str) -> Option<Point> {
        self.short_name_to_point.get(short_name).copied()
    }

    /// Number of registered buildings.
    pub fn building_count(&self) -> usize {
        self.short_name_to_point.len()
    }

    /// Read-only access to the walkway graph.
    pub fn graph(&self) -> &LabeledGraph<Point, Distance> {
        &self.graph
    }

    /// How many times the solver has actually run (cache misses).
    pub fn solver_runs(&self) -> usize {
        self.solver_runs.load(AtomicOrdering::Relaxed)
    }

    /// Number of memoized route queries.
    pub fn cached_routes(&self) -> usize {
        self.cache.len()
    }

    /// Shortest walk between two buildings by distance.
    ///
    /// Returns `Ok(None)` when both names are valid but no route connects them.
    /// Fails with an invalid-argument error when either name is empty or
    /// unknown, independently of the other.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> Result<Option<Path<Point>>> {
        let start_point = self.resolve(start)?;
        let end_point = self.resolve(end)?;

        let key = RouteKey::new(start, end);
        let mut solved = false;
        let result = self.cache.get_or_insert_with(key, &mut || {
            solved = true;
            self.solver_runs.fetch_add(1, AtomicOrdering::Relaxed);
            shortest_path(&self.graph, &start_point, &end_point)
        });

        debug!(
            start,
            end,
            cached = !solved,
            found = result.is_some(),
            "route query answered"
        );
        Ok(result)
    }

    fn resolve(&self, name: &str) -> Result<Point> {
        if name.is_empty() {
            return Err(Error::EmptyBuildingName);
        }
        self.point_for(name).ok_or_else(|| Error::UnknownBuilding {
            name: name.to_string(),
            suggestions: self.suggestions(name),
        })
    }

    fn suggestions(&self, name: &str) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .short_name_to_point
            .keys()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (score, candidate.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    fn check_rep(&self) {
        debug_assert_eq!(
            self.short_name_to_point.len(),
            self.point_to_building.len(),
            "building indices out of sync"
        );
    }
}

impl fmt::Debug for CampusMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CampusMap")
            .field("buildings", &self.short_name_to_point.len())
            .field("nodes", &self.graph.node_count())
            .field("cached_routes", &self.cache.len())
            .finish()
    }
}

fn count_one_way(graph: &LabeledGraph<Point, Distance>) -> usize {
    graph
        .nodes()
        .flat_map(|node| graph.edges_from(node).into_iter().flatten())
        .filter(|edge| {
            graph
                .edge_count(edge.to(), edge.from())
                .map(|count| count == 0)
                .unwrap_or(false)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::BoundedCache;
    use crate::test_helpers::{building, sample_map, walkway};

    #[test]
    fn indexes_buildings_by_short_name() {
        let map = sample_map();
        assert!(map.short_name_exists("CSE"));
        assert!(!map.short_name_exists("XYZ"));
        assert_eq!(map.long_name_for("MGH").unwrap(), "Mary Gates Hall");
        assert_eq!(map.building_count(), 4);
        assert_eq!(map.building_names().len(), 4);
    }

    #[test]
    fn long_name_for_unknown_is_not_found() {
        let map = sample_map();
        let err = map.long_name_for("XYZ").unwrap_err();
        assert!(matches!(err, Error::BuildingNotFound { .. }));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn finds_shortest_route() {
        let map = sample_map();
        let path = map.find_shortest_path("CSE", "SUZ").unwrap().expect("route");
        assert_eq!(path.cost(), 15.0);
        assert_eq!(path.len(), 2);
        assert_eq!(path.start(), &Point::new(0.0, 0.0));
        assert_eq!(path.end(), &Point::new(20.0, 0.0));
    }

    #[test]
    fn same_building_is_zero_length() {
        let map = sample_map();
        let path = map.find_shortest_path("CSE", "CSE").unwrap().unwrap();
        assert!(path.is_empty());
        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.end(), &Point::new(0.0, 0.0));
    }

    #[test]
    fn isolated_building_has_no_route() {
        let map = sample_map();
        assert!(map.find_shortest_path("CSE", "ODG").unwrap().is_none());
    }

    #[test]
    fn repeated_queries_are_served_from_cache() {
        let map = sample_map();
        let first = map.find_shortest_path("CSE", "SUZ").unwrap();
        let second = map.find_shortest_path("CSE", "SUZ").unwrap();
        assert_eq!(first, second);
        assert_eq!(map.solver_runs(), 1);

        map.find_shortest_path("CSE", "ODG").unwrap();
        map.find_shortest_path("CSE", "ODG").unwrap();
        assert_eq!(map.solver_runs(), 2);
        assert_eq!(map.cached_routes(), 2);
    }

    #[test]
    fn reverse_queries_are_cached_separately() {
        let map = sample_map();
        map.find_shortest_path("CSE", "MGH").unwrap();
        map.find_shortest_path("MGH", "CSE").unwrap();
        assert_eq!(map.solver_runs(), 2);
    }

    #[test]
    fn unknown_names_are_invalid_arguments() {
        let map = sample_map();
        for (start, end) in [("XYZ", "CSE"), ("CSE", "XYZ"), ("XYZ", "QQQ")] {
            let err = map.find_shortest_path(start, end).unwrap_err();
            assert!(err.is_invalid_argument(), "{start} -> {end}");
        }
        let err = map.find_shortest_path("", "CSE").unwrap_err();
        assert!(matches!(err, Error::EmptyBuildingName));
        assert_eq!(map.solver_runs(), 0);
    }

    #[test]
    fn unknown_name_offers_suggestions() {
        let map = sample_map();
        match map.find_shortest_path("CSF", "MGH").unwrap_err() {
            Error::UnknownBuilding { suggestions, .. } => {
                assert_eq!(suggestions.first().map(String::as_str), Some("CSE"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn walkways_are_one_directional() {
        let map = CampusMap::from_records(
            vec![building("A", 0.0, 0.0), building("B", 1.0, 0.0)],
            vec![walkway((0.0, 0.0), (1.0, 0.0), 1.0)],
        )
        .unwrap();
        assert!(map.find_shortest_path("A", "B").unwrap().is_some());
        assert!(map.find_shortest_path("B", "A").unwrap().is_none());
    }

    #[test]
    fn duplicate_short_names_are_rejected() {
        let err = CampusMap::from_records(
            vec![building("A", 0.0, 0.0), building("A", 1.0, 0.0)],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateBuilding { .. }));
    }

    #[test]
    fn shared_locations_are_rejected() {
        let err = CampusMap::from_records(
            vec![building("A", 0.0, 0.0), building("B", 0.0, 0.0)],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::SharedBuildingLocation { .. }));
    }

    #[test]
    fn bounded_cache_can_be_substituted() {
        let map = sample_map().with_cache(BoundedCache::new(1).unwrap());
        map.find_shortest_path("CSE", "SUZ").unwrap();
        map.find_shortest_path("CSE", "MGH").unwrap();
        map.find_shortest_path("CSE", "SUZ").unwrap();
        assert_eq!(map.solver_runs(), 3);
        assert_eq!(map.cached_routes(), 1);
    }

    #[test]
    fn points_compare_exactly() {
        assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
        assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 2.000_000_1));
        assert!(Point::new(0.0, 5.0) < Point::new(1.0, 0.0));
    }
}
