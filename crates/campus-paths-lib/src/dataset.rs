//! Campus dataset location and parsing.
//!
//! The dataset is two tab-separated files with a header row:
//!
//! - `campus_buildings.tsv`: `shortName  longName  x  y`
//! - `campus_paths.tsv`: `x1  y1  x2  y2  distance`
//!
//! Each path row describes one directed walk between two coordinates. A
//! walkway that can be travelled both ways appears twice, once per direction.

use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Filename of the building table inside the data directory.
pub const BUILDINGS_FILENAME: &str = "campus_buildings.tsv";

/// Filename of the walkway table inside the data directory.
pub const PATHS_FILENAME: &str = "campus_paths.tsv";

/// Environment variable overriding the dataset directory.
pub const DATA_DIR_ENV: &str = "CAMPUS_PATHS_DATA_DIR";

/// A named point of interest on the campus map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub short_name: String,
    pub long_name: String,
    pub x: f64,
    pub y: f64,
}

/// One directed walkway between two coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub distance: f64,
}

/// Parsed contents of a campus data directory.
#[derive(Debug, Clone, Default)]
pub struct CampusDataset {
    pub buildings: Vec<Building>,
    pub paths: Vec<PathRecord>,
}

/// Resolve the default data directory.
///
/// `CAMPUS_PATHS_DATA_DIR` wins when set; otherwise the platform data directory
/// for the application is used.
pub fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let dirs = ProjectDirs::from("com", "campus-paths", "campus-paths")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Resolve the data directory from an explicit override or the defaults.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_data_dir(),
    }
}

/// Load both dataset tables from `dir`.
pub fn load_dataset(dir: &Path) -> Result<CampusDataset> {
    let buildings_path = dir.join(BUILDINGS_FILENAME);
    let paths_path = dir.join(PATHS_FILENAME);

    let buildings = parse_buildings(open(&buildings_path)?, BUILDINGS_FILENAME)?;
    let paths = parse_paths(open(&paths_path)?, PATHS_FILENAME)?;

    info!(
        dir = %dir.display(),
        buildings = buildings.len(),
        paths = paths.len(),
        "loaded campus dataset"
    );

    Ok(CampusDataset { buildings, paths })
}

fn open(path: &Path) -> Result<fs::File> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "opening dataset file");
    Ok(fs::File::open(path)?)
}

/// Parse building rows from a tab-separated reader.
pub fn parse_buildings<R: Read>(reader: R, file: &str) -> Result<Vec<Building>> {
    let rows: Vec<(u64, Building)> = parse_rows(reader, file)?;
    rows.into_iter()
        .map(|(line, building)| {
            if building.short_name.is_empty() {
                return Err(parse_error(file, line, "short name is empty"));
            }
            if !building.x.is_finite() || !building.y.is_finite() {
                return Err(parse_error(file, line, "coordinates must be finite"));
            }
            Ok(building)
        })
        .collect()
}

/// Parse walkway rows from a tab-separated reader.
pub fn parse_paths<R: Read>(reader: R, file: &str) -> Result<Vec<PathRecord>> {
    let rows: Vec<(u64, PathRecord)> = parse_rows(reader, file)?;
    rows.into_iter()
        .map(|(line, record)| {
            let coords = [record.x1, record.y1, record.x2, record.y2];
            if coords.iter().any(|value| !value.is_finite()) {
                return Err(parse_error(file, line, "coordinates must be finite"));
            }
            if !record.distance.is_finite() || record.distance < 0.0 {
                return Err(parse_error(
                    file,
                    line,
                    format!("distance must be finite and non-negative, got {}", record.distance),
                ));
            }
            Ok(record)
        })
        .collect()
}

fn parse_rows<R: Read, T: DeserializeOwned>(reader: R, file: &str) -> Result<Vec<(u64, T)>> {
    let mut tsv = ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, result) in tsv.deserialize::<T>().enumerate() {
        // Header occupies line 1.
        let line = index as u64 + 2;
        let row = result.map_err(|err| {
            let line = err
                .position()
                .map(|position| position.line())
                .unwrap_or(line);
            parse_error(file, line, err.to_string())
        })?;
        rows.push((line, row));
    }
    Ok(rows)
}

fn parse_error(file: &str, line: u64, message: impl Into<String>) -> Error {
    Error::DatasetParse {
        file: file.to_string(),
        line,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILDINGS: &str = "shortName\tlongName\tx\ty\n\
        CSE\tPaul G. Allen Center for Computer Science & Engineering\t2259.7112\t1715.5273\n\
        MGH\tMary Gates Hall\t1914.5103\t1709.8816\n";

    const PATHS: &str = "x1\ty1\tx2\ty2\tdistance\n\
        2259.7112\t1715.5273\t1914.5103\t1709.8816\t345.25\n\
        1914.5103\t1709.8816\t2259.7112\t1715.5273\t345.25\n";

    #[test]
    fn parses_buildings() {
        let buildings = parse_buildings(BUILDINGS.as_bytes(), BUILDINGS_FILENAME).unwrap();
        assert_eq!(buildings.len(), 2);
        assert_eq!(buildings[0].short_name, "CSE");
        assert_eq!(
            buildings[0].long_name,
            "Paul G. Allen Center for Computer Science & Engineering"
        );
        assert_eq!(buildings[1].x, 1914.5103);
    }

    #[test]
    fn parses_paths() {
        let paths = parse_paths(PATHS.as_bytes(), PATHS_FILENAME).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].distance, 345.25);
        assert_eq!(paths[1].x2, 2259.7112);
    }

    #[test]
    fn malformed_number_reports_line() {
        let data = "x1\ty1\tx2\ty2\tdistance\n1\t2\t3\t4\t5\n1\t2\t3\tfour\t5\n";
        let err = parse_paths(data.as_bytes(), PATHS_FILENAME).unwrap_err();
        match err {
            Error::DatasetParse { file, line, .. } => {
                assert_eq!(file, PATHS_FILENAME);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_distance_is_rejected() {
        let data = "x1\ty1\tx2\ty2\tdistance\n1\t2\t3\t4\t-5\n";
        let err = parse_paths(data.as_bytes(), PATHS_FILENAME).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn empty_short_name_is_rejected() {
        let data = "shortName\tlongName\tx\ty\n\tNameless\t1\t2\n";
        let err = parse_buildings(data.as_bytes(), BUILDINGS_FILENAME).unwrap_err();
        assert!(matches!(err, Error::DatasetParse { line: 2, .. }));
    }

    #[test]
    fn missing_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(dir.path()).unwrap_err();
        assert!(matches!(err, Error::DatasetNotFound { .. }));
    }

    #[test]
    fn loads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(BUILDINGS_FILENAME), BUILDINGS).unwrap();
        fs::write(dir.path().join(PATHS_FILENAME), PATHS).unwrap();
        let dataset = load_dataset(dir.path()).unwrap();
        assert_eq!(dataset.buildings.len(), 2);
        assert_eq!(dataset.paths.len(), 2);
    }

    #[test]
    fn explicit_data_dir_wins() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/campus"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/campus"));
    }
}
