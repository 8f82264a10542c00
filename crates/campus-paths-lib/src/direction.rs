use std::fmt;

use serde::Serialize;

/// Orientation of the map's coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateConvention {
    /// `y` grows towards north (mathematical axes).
    IncreasingUpRight,
    /// `y` grows towards south, as in image and screen coordinates.
    #[default]
    IncreasingDownRight,
}

/// Eight-point compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// Sector order starting at east and turning counter-clockwise.
const SECTORS: [Direction; 8] = [
    Direction::E,
    Direction::NE,
    Direction::N,
    Direction::NW,
    Direction::W,
    Direction::SW,
    Direction::S,
    Direction::SE,
];

impl Direction {
    /// Direction of travel from `(x1, y1)` to `(x2, y2)`.
    pub fn resolve(x1: f64, y1: f64, x2: f64, y2: f64, convention: CoordinateConvention) -> Self {
        Self::from_delta(x2 - x1, y2 - y1, convention)
    }

    /// Direction of a displacement. Each compass point covers a 45 degree
    /// sector centred on it. A zero displacement resolves to north.
    pub fn from_delta(dx: f64, dy: f64, convention: CoordinateConvention) -> Self {
        if dx == 0.0 && dy == 0.0 {
            return Direction::N;
        }
        let north = match convention {
            CoordinateConvention::IncreasingUpRight => dy,
            CoordinateConvention::IncreasingDownRight => -dy,
        };
        let degrees = north.atan2(dx).to_degrees().rem_euclid(360.0);
        let sector = ((degrees + 22.5) / 45.0).floor() as usize % SECTORS.len();
        SECTORS[sector]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
