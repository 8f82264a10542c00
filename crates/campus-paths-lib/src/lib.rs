//! Campus paths library entry points.
//!
//! This crate exposes helpers to locate and parse the campus dataset, build the
//! labeled routing graph, and answer shortest-path queries between buildings.
//! Higher-level consumers (CLI, HTTP service) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod cache;
pub mod campus;
pub mod dataset;
pub mod direction;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use cache::{BoundedCache, PathCache, RouteKey, UnboundedCache};
pub use campus::{CampusMap, Point};
pub use dataset::{load_dataset, resolve_data_dir, Building, CampusDataset, PathRecord};
pub use direction::{CoordinateConvention, Direction};
pub use error::{Error, Result};
pub use graph::{Distance, EdgeLabel, LabeledEdge, LabeledGraph};
pub use output::{BuildingsResponse, Coordinate, PathResponse, SegmentView};
pub use path::{Path, Segment};
pub use routing::{shortest_path, PathSolver, ShortestPathFinder};
