//! Serializable views of query results and their turn-by-turn rendering.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use crate::campus::{CampusMap, Point};
use crate::dataset::Building;
use crate::direction::{CoordinateConvention, Direction};
use crate::path::Path;

/// Coordinate reported when no route exists.
pub const NO_PATH_SENTINEL: Point = Point { x: -1.0, y: -1.0 };

/// Plain coordinate pair.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for Coordinate {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// One hop of a rendered route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SegmentView {
    pub start: Coordinate,
    pub end: Coordinate,
    pub cost: f64,
}

/// Route between two buildings, ready for a client.
///
/// A query with no route is rendered as an empty path sitting on
/// [`NO_PATH_SENTINEL`] with zero cost.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathResponse {
    pub start: Coordinate,
    pub path: Vec<SegmentView>,
    pub cost: f64,
    pub directions: Vec<String>,
    #[serde(skip)]
    found: bool,
}

impl PathResponse {
    /// Render a solver result for the query `start_name` to `end_name`.
    pub fn from_path(start_name: &str, end_name: &str, path: Option<&Path<Point>>) -> Self {
        let found = path.is_some();
        let sentinel;
        let path = match path {
            Some(path) => path,
            None => {
                sentinel = Path::new(NO_PATH_SENTINEL);
                &sentinel
            }
        };

        Self {
            start: (*path.start()).into(),
            path: path
                .segments()
                .map(|segment| SegmentView {
                    start: (*segment.start()).into(),
                    end: (*segment.end()).into(),
                    cost: segment.cost(),
                })
                .collect(),
            cost: path.cost(),
            directions: direction_lines(
                start_name,
                end_name,
                path,
                CoordinateConvention::IncreasingDownRight,
            ),
            found,
        }
    }

    /// Whether this response stands for a query with no route. A real route
    /// starting on the sentinel coordinate is still a route.
    pub fn is_no_path(&self) -> bool {
        !self.found
    }

    /// Directions joined into a single block of text.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        for line in &self.directions {
            let _ = writeln!(buffer, "{line}");
        }
        buffer
    }
}

/// Human-readable turn-by-turn instructions for `path`.
pub fn direction_lines(
    start_name: &str,
    end_name: &str,
    path: &Path<Point>,
    convention: CoordinateConvention,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(path.len() + 2);
    lines.push(format!("Path from {start_name} to {end_name}"));
    for segment in path {
        let direction = Direction::resolve(
            segment.start().x,
            segment.start().y,
            segment.end().x,
            segment.end().y,
            convention,
        );
        lines.push(format!("\tWalk {:.0} feet {}", segment.cost(), direction));
    }
    lines.push(format!("Total distance: {:.0} feet", path.cost()));
    lines
}

/// Every building on the map plus the short-to-long name index.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingsResponse {
    pub names: BTreeMap<String, String>,
    pub buildings: Vec<Building>,
}

impl BuildingsResponse {
    pub fn from_map(map: &CampusMap) -> Self {
        Self {
            names: map.building_names(),
            buildings: map.buildings().into_iter().cloned().collect(),
        }
    }

    /// One `SHORT: Long Name` line per building.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        for (short, long) in &self.names {
            let _ = writeln!(buffer, "{short}: {long}");
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_map;

    #[test]
    fn renders_route_with_directions() {
        let map = sample_map();
        let path = map.find_shortest_path("CSE", "SUZ").unwrap();
        let response = PathResponse::from_path("CSE", "SUZ", path.as_ref());

        assert_eq!(response.cost, 15.0);
        assert_eq!(response.path.len(), 2);
        assert_eq!(response.start, Coordinate { x: 0.0, y: 0.0 });
        assert_eq!(
            response.directions,
            vec![
                "Path from CSE to SUZ".to_string(),
                "\tWalk 10 feet E".to_string(),
                "\tWalk 5 feet E".to_string(),
                "Total distance: 15 feet".to_string(),
            ]
        );
        assert!(!response.is_no_path());
    }

    #[test]
    fn missing_route_uses_sentinel() {
        let response = PathResponse::from_path("CSE", "ODG", None);
        assert!(response.is_no_path());
        assert_eq!(response.start, Coordinate { x: -1.0, y: -1.0 });
        assert_eq!(response.cost, 0.0);
        assert_eq!(response.directions.last().unwrap(), "Total distance: 0 feet");
    }

    #[test]
    fn route_on_sentinel_coordinate_is_still_a_route() {
        let corner = Building {
            short_name: "Z".to_string(),
            long_name: "Corner Hall".to_string(),
            x: -1.0,
            y: -1.0,
        };
        let map = CampusMap::from_records(vec![corner], Vec::new()).unwrap();
        let path = map.find_shortest_path("Z", "Z").unwrap();
        assert!(path.is_some());

        let response = PathResponse::from_path("Z", "Z", path.as_ref());
        assert!(!response.is_no_path());
        assert_eq!(response.start, Coordinate::from(NO_PATH_SENTINEL));
        assert!(response.path.is_empty());

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("found").is_none());
    }

    #[test]
    fn serializes_to_expected_shape() {
        let map = sample_map();
        let path = map.find_shortest_path("CSE", "MGH").unwrap();
        let response = PathResponse::from_path("CSE", "MGH", path.as_ref());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["start"]["x"], 0.0);
        assert_eq!(json["path"][0]["end"]["x"], 10.0);
        assert_eq!(json["path"][0]["cost"], 10.0);
        assert_eq!(json["cost"], 10.0);
    }

    #[test]
    fn buildings_response_lists_everything() {
        let map = sample_map();
        let response = BuildingsResponse::from_map(&map);
        assert_eq!(response.buildings.len(), 4);
        assert_eq!(response.names["MGH"], "Mary Gates Hall");
        assert_eq!(response.buildings[0].short_name, "CSE");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["buildings"][0]["shortName"], "CSE");
        assert!(response.render_text().contains("MGH: Mary Gates Hall"));
    }
}
