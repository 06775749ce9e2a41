use serde::{Deserialize, Serialize};

/// A point in degrees. Serialized as a `[lat, lng]` pair, the way country datasets store it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<LatLng> for (f64, f64) {
    fn from(point: LatLng) -> Self {
        (point.lat, point.lng)
    }
}

/// Coarse direction hint shown next to a guess.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bearing {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
    /// Origin and destination share coordinates.
    TargetReached,
}

impl Bearing {
    /// Maps an angle (degrees, counter-clockwise from east) to its 45° bucket.
    ///
    /// `angle / 45` is rounded half-to-even, so the boundary angles resolve towards the even
    /// multiple of 45: 22.5° is east, 67.5° is north, 157.5° is west.
    pub fn from_degrees(angle: f64) -> Self {
        let bucket = (angle / 45.0).round_ties_even() as i64;
        match bucket.rem_euclid(8) {
            0 => Bearing::East,
            1 => Bearing::NorthEast,
            2 => Bearing::North,
            3 => Bearing::NorthWest,
            4 => Bearing::West,
            5 => Bearing::SouthWest,
            6 => Bearing::South,
            _ => Bearing::SouthEast,
        }
    }

    /// One-byte code used in the session cookie: the bucket index, `8` for the target.
    pub fn code(&self) -> u8 {
        match self {
            Bearing::East => 0,
            Bearing::NorthEast => 1,
            Bearing::North => 2,
            Bearing::NorthWest => 3,
            Bearing::West => 4,
            Bearing::SouthWest => 5,
            Bearing::South => 6,
            Bearing::SouthEast => 7,
            Bearing::TargetReached => 8,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Bearing::East),
            1 => Some(Bearing::NorthEast),
            2 => Some(Bearing::North),
            3 => Some(Bearing::NorthWest),
            4 => Some(Bearing::West),
            5 => Some(Bearing::SouthWest),
            6 => Some(Bearing::South),
            7 => Some(Bearing::SouthEast),
            8 => Some(Bearing::TargetReached),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Bearing::East => "🢂",
            Bearing::NorthEast => "🢅",
            Bearing::North => "🢁",
            Bearing::NorthWest => "🢄",
            Bearing::West => "🢀",
            Bearing::SouthWest => "🢇",
            Bearing::South => "🢃",
            Bearing::SouthEast => "🢆",
            Bearing::TargetReached => "✓",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measurement {
    pub distance_km: f64,
    pub bearing: Bearing,
}
