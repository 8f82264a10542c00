// Test-only helpers for `campus-paths-lib` unit tests
#![allow(dead_code)]

use crate::campus::CampusMap;
use crate::dataset::{Building, PathRecord};

pub fn building(short_name: &str, x: f64, y: f64) -> Building {
    Building {
        short_name: short_name.to_string(),
        long_name: format!("{short_name} Hall"),
        x,
        y,
    }
}

pub fn walkway(from: (f64, f64), to: (f64, f64), distance: f64) -> PathRecord {
    PathRecord {
        x1: from.0,
        y1: from.1,
        x2: to.0,
        y2: to.1,
        distance,
    }
}

/// Both directions of a walkway.
pub fn two_way(a: (f64, f64), b: (f64, f64), distance: f64) -> [PathRecord; 2] {
    [walkway(a, b, distance), walkway(b, a, distance)]
}

/// Four buildings on a line, with ODG unreachable:
///
/// ```text
/// CSE --10-- MGH --5-- SUZ        ODG
///  \__________20_______/
/// ```
pub fn sample_map() -> CampusMap {
    let cse = (0.0, 0.0);
    let mgh = (10.0, 0.0);
    let suz = (20.0, 0.0);

    let mut mary_gates = building("MGH", mgh.0, mgh.1);
    mary_gates.long_name = "Mary Gates Hall".to_string();

    let buildings = vec![
        building("CSE", cse.0, cse.1),
        mary_gates,
        building("SUZ", suz.0, suz.1),
        building("ODG", 50.0, 50.0),
    ];
    let paths = [two_way(cse, mgh, 10.0), two_way(mgh, suz, 5.0), two_way(cse, suz, 20.0)]
        .into_iter()
        .flatten()
        .collect();

    CampusMap::from_records(buildings, paths).expect("sample map builds")
}
