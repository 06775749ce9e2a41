use crate::countries::errors::GeometryError;
use crate::geodesy::models::LatLng;
use geo::{LineString, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Africa,
        Region::Americas,
        Region::Asia,
        Region::Europe,
        Region::Oceania,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Border outline as a multi-polygon, whichever of `Polygon`/`MultiPolygon` the dataset used.
pub fn border_from_geojson(
    geometry: geojson::Geometry,
) -> Result<MultiPolygon<f64>, GeometryError> {
    match geo::Geometry::<f64>::try_from(geometry.value)? {
        geo::Geometry::Polygon(polygon) => Ok(polygon.into()),
        geo::Geometry::MultiPolygon(polygons) => Ok(polygons),
        _ => Err(GeometryError::Unsupported),
    }
}

/// One line of the dataset as stored on disk.
#[derive(Deserialize)]
struct CountryRecord {
    name: String,
    region: Region,
    #[serde(default)]
    area: Option<f64>,
    #[serde(default)]
    population: Option<u64>,
    latlng: LatLng,
    #[serde(default)]
    geometry: Option<geojson::Geometry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "CountryRecord")]
pub struct Country {
    pub name: String,
    pub region: Region,
    /// Square kilometers.
    pub area: Option<f64>,
    pub population: Option<u64>,
    pub latlng: LatLng,
    pub geometry: Option<MultiPolygon<f64>>,
}

impl TryFrom<CountryRecord> for Country {
    type Error = GeometryError;

    fn try_from(record: CountryRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            name: record.name,
            region: record.region,
            area: record.area,
            population: record.population,
            latlng: record.latlng,
            geometry: record.geometry.map(border_from_geojson).transpose()?,
        })
    }
}

impl Country {
    /// Outer ring of every polygon that encloses an area. Holes are not drawn.
    pub fn outlines(&self) -> Vec<&LineString<f64>> {
        self.geometry
            .iter()
            .flat_map(|border| border.0.iter())
            .map(Polygon::exterior)
            .filter(|ring| ring.0.len() >= MIN_CLOSED_RING_LENGTH)
            .collect()
    }

    pub fn has_geometry(&self) -> bool {
        !self.outlines().is_empty()
    }
}

/// A closed triangle: three corners plus the repeated first one.
const MIN_CLOSED_RING_LENGTH: usize = 4;
